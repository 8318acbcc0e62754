use std::io::Read;

use crate::error::Result;
use crate::motion::BoneFrame;

use super::vmd::Vmd;

/// Width of the null-padded bone name field.
const NAME_LENGTH: usize = 15;

impl<R: Read> Vmd<R> {
	/// Read the bone frame array: a `u32` count followed by that many
	/// 111-byte records.
	pub fn read_bone_frames(&mut self) -> Result<Vec<BoneFrame>> {
		let count = self.read_u32()?;
		let mut frames = Vec::with_capacity(count as usize);
		for _ in 0..count {
			frames.push(self.read_bone_frame()?);
		}
		Ok(frames)
	}

	fn read_bone_frame(&mut self) -> Result<BoneFrame> {
		Ok(BoneFrame {
			bone: self.read_string(NAME_LENGTH)?,
			time: self.read_u32()?,
			translation: self.read_f32s()?,
			rotation: self.read_f32s()?,
			x_curve: self.read_bytes()?,
			y_curve: self.read_bytes()?,
			z_curve: self.read_bytes()?,
			rotation_curve: self.read_bytes()?,
		})
	}
}

#[cfg(test)]
mod test {
	use std::io::Cursor;

	use crate::vmd::vmd::Vmd;

	fn record(name: &[u8]) -> Vec<u8> {
		let mut bytes = name.to_vec();
		bytes.resize(15, 0);
		bytes.extend_from_slice(&3u32.to_le_bytes());
		for value in [1.0f32, 2.0, 3.0, 0.0, 0.0, 0.0, 1.0] {
			bytes.extend_from_slice(&value.to_le_bytes());
		}
		bytes.extend_from_slice(&[0x14; 16]);
		bytes.extend_from_slice(&[0x28; 16]);
		bytes.extend_from_slice(&[0x3C; 16]);
		bytes.extend_from_slice(&[0x50; 16]);
		bytes
	}

	#[test]
	fn empty() {
		let mut vmd = Vmd::new(Cursor::new(0u32.to_le_bytes()));
		assert_eq!(vmd.read_bone_frames().unwrap(), vec![]);
	}

	#[test]
	fn two_frames() {
		let mut input = 2u32.to_le_bytes().to_vec();
		input.extend(record(b"left arm"));
		input.extend(record(b"right arm"));

		let mut vmd = Vmd::new(Cursor::new(input));
		let frames = vmd.read_bone_frames().unwrap();
		assert_eq!(frames.len(), 2);
		assert_eq!(frames[0].bone, "left arm");
		assert_eq!(frames[1].bone, "right arm");
		assert_eq!(frames[0].time, 3);
		assert_eq!(frames[0].translation, [1.0, 2.0, 3.0]);
		assert_eq!(frames[0].rotation, [0.0, 0.0, 0.0, 1.0]);
		assert_eq!(frames[0].x_curve, [0x14; 16]);
		assert_eq!(frames[0].rotation_curve, [0x50; 16]);
	}

	#[test]
	fn truncated_record() {
		let mut input = 1u32.to_le_bytes().to_vec();
		input.extend_from_slice(&record(b"centre")[..50]);

		let mut vmd = Vmd::new(Cursor::new(input));
		assert!(vmd.read_bone_frames().unwrap_err().is_truncated());
	}

	#[test]
	fn missing_count() {
		let mut vmd = Vmd::new(Cursor::new(&b""[..]));
		assert!(vmd.read_bone_frames().unwrap_err().is_truncated());
	}
}
