use std::io::Read;

use crate::error::{Error, Result};
use crate::macros::read_primitive;

use super::vmd::Vmd;

impl<R: Read> Vmd<R> {
	read_primitive!(u32, read_u32);
	read_primitive!(f32, read_f32);
	read_primitive!(u8, read_u8);

	/// Read an opaque run of bytes verbatim.
	pub fn read_bytes<const N: usize>(&mut self) -> Result<[u8; N]> {
		let mut buffer = [0u8; N];
		self.reader
			.read_exact(&mut buffer)
			.map_err(Error::from_read)?;
		Ok(buffer)
	}

	/// Read a run of little-endian 32-bit floats.
	pub fn read_f32s<const N: usize>(&mut self) -> Result<[f32; N]> {
		let mut values = [0f32; N];
		for value in &mut values {
			*value = self.read_f32()?;
		}
		Ok(values)
	}
}
