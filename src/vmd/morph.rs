use std::io::Read;

use crate::error::Result;
use crate::motion::MorphFrame;

use super::vmd::Vmd;

/// Width of the null-padded morph name field.
const NAME_LENGTH: usize = 15;

impl<R: Read> Vmd<R> {
	/// Read the morph frame array: a `u32` count followed by that many
	/// 23-byte records.
	pub fn read_morph_frames(&mut self) -> Result<Vec<MorphFrame>> {
		let count = self.read_u32()?;
		let mut frames = Vec::with_capacity(count as usize);
		for _ in 0..count {
			frames.push(MorphFrame {
				morph: self.read_string(NAME_LENGTH)?,
				time: self.read_u32()?,
				weight: self.read_f32()?,
			});
		}
		Ok(frames)
	}
}
