use std::io::Read;

use crate::error::{Error, Result};
use crate::motion::Header;

use super::vmd::Vmd;

const MAGIC_PREFIX: &[u8] = b"Vocaloid Motion Data";
const MAGIC_V1: &[u8] = b"Vocaloid Motion Data file";
const MAGIC_V2: &[u8] = b"Vocaloid Motion Data 0002";

impl<R: Read> Vmd<R> {
	/// Read the 30-byte signature block and the version-sized model name
	/// field that follows it.
	pub fn read_header(&mut self) -> Result<Header> {
		// The last 5 bytes of the block are padding; only the first 25 carry
		// the signature.
		let block: [u8; 30] = self.read_bytes()?;
		let signature = &block[..25];

		let version = if signature == MAGIC_V1 {
			1
		} else if signature == MAGIC_V2 {
			2
		} else if signature.starts_with(MAGIC_PREFIX) {
			return Err(Error::UnsupportedVersion);
		} else {
			return Err(Error::NotVmd);
		};

		// Version 1 files store the model name in 10 bytes, version 2 in 20.
		let model_name = self.read_string(version as usize * 10)?;

		Ok(Header {
			version,
			model_name,
		})
	}
}
