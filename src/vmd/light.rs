use std::io::Read;

use crate::error::Result;
use crate::motion::LightFrame;

use super::vmd::Vmd;

impl<R: Read> Vmd<R> {
	/// Read the light frame array: a `u32` count followed by that many
	/// 28-byte records.
	pub fn read_light_frames(&mut self) -> Result<Vec<LightFrame>> {
		let count = self.read_u32()?;
		let mut frames = Vec::with_capacity(count as usize);
		for _ in 0..count {
			frames.push(LightFrame {
				time: self.read_u32()?,
				color: self.read_f32s()?,
				direction: self.read_f32s()?,
			});
		}
		Ok(frames)
	}
}
