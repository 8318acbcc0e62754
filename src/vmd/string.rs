use std::io::Read;

use encoding_rs::SHIFT_JIS;

use crate::error::{Error, Result};

use super::vmd::Vmd;

impl<R: Read> Vmd<R> {
	/// Read a fixed-width, null-padded Shift-JIS string field of `length`
	/// bytes. A zero length consumes no input. Bytes at and after the first
	/// null are discarded, trailing garbage included.
	pub fn read_string(&mut self, length: usize) -> Result<String> {
		if length == 0 {
			return Ok(String::new());
		}

		let mut buffer = vec![0u8; length];
		self.reader
			.read_exact(&mut buffer)
			.map_err(Error::from_read)?;

		let content = match buffer.iter().position(|&byte| byte == 0) {
			Some(index) => &buffer[..index],
			None => &buffer[..],
		};

		// Name fields are not always well-formed Shift-JIS. Rather than fail
		// the decode over a name, fall back to the raw bytes, mapped one code
		// point per byte.
		let (string, malformed) = SHIFT_JIS.decode_without_bom_handling(content);
		if malformed {
			return Ok(content.iter().map(|&byte| char::from(byte)).collect());
		}

		Ok(string.into_owned())
	}
}
