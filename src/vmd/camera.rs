use std::io::Read;

use crate::error::Result;
use crate::motion::CameraFrame;

use super::vmd::Vmd;

impl<R: Read> Vmd<R> {
	/// Read the camera frame array: a `u32` count followed by that many
	/// 61-byte records.
	pub fn read_camera_frames(&mut self) -> Result<Vec<CameraFrame>> {
		let count = self.read_u32()?;
		let mut frames = Vec::with_capacity(count as usize);
		for _ in 0..count {
			frames.push(self.read_camera_frame()?);
		}
		Ok(frames)
	}

	fn read_camera_frame(&mut self) -> Result<CameraFrame> {
		Ok(CameraFrame {
			time: self.read_u32()?,
			distance: self.read_f32()?,
			translation: self.read_f32s()?,
			rotation: self.read_f32s()?,
			curve: self.read_bytes()?,
			view_angle: self.read_f32()?,
			orthographic: self.read_u8()? != 0,
		})
	}
}

#[cfg(test)]
mod test {
	use std::io::Cursor;

	use crate::vmd::vmd::Vmd;

	fn record(orthographic: u8) -> Vec<u8> {
		let mut bytes = 8u32.to_le_bytes().to_vec();
		bytes.extend_from_slice(&(-45.0f32).to_le_bytes());
		for value in [0.0f32, 10.0, 0.0, 0.0, 0.0, 0.0] {
			bytes.extend_from_slice(&value.to_le_bytes());
		}
		bytes.extend_from_slice(&[0x6B; 24]);
		bytes.extend_from_slice(&30.0f32.to_le_bytes());
		bytes.push(orthographic);
		bytes
	}

	#[test]
	fn empty() {
		let mut vmd = Vmd::new(Cursor::new(0u32.to_le_bytes()));
		assert_eq!(vmd.read_camera_frames().unwrap(), vec![]);
	}

	#[test]
	fn single_frame() {
		let mut input = 1u32.to_le_bytes().to_vec();
		input.extend(record(1));

		let mut vmd = Vmd::new(Cursor::new(input));
		let frames = vmd.read_camera_frames().unwrap();
		assert_eq!(frames.len(), 1);
		assert_eq!(frames[0].time, 8);
		assert_eq!(frames[0].distance, -45.0);
		assert_eq!(frames[0].translation, [0.0, 10.0, 0.0]);
		assert_eq!(frames[0].curve, [0x6B; 24]);
		assert_eq!(frames[0].view_angle, 30.0);
		assert!(frames[0].orthographic);
	}

	#[test]
	fn perspective_flag() {
		let mut input = 1u32.to_le_bytes().to_vec();
		input.extend(record(0));

		let mut vmd = Vmd::new(Cursor::new(input));
		let frames = vmd.read_camera_frames().unwrap();
		assert!(!frames[0].orthographic);
	}

	#[test]
	fn truncated_record() {
		let mut input = 1u32.to_le_bytes().to_vec();
		input.extend_from_slice(&record(0)[..40]);

		let mut vmd = Vmd::new(Cursor::new(input));
		assert!(vmd.read_camera_frames().unwrap_err().is_truncated());
	}
}
