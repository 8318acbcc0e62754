use std::io::Read;

use crate::error::{Result, Stage};
use crate::motion::Motion;

/// Decode a complete motion file from `input`.
///
/// The stream is read front to back in one pass: header, then the bone,
/// morph, camera, and light frame arrays. On failure the error is tagged
/// with the stage it occurred in and no document is returned.
pub fn read(input: &mut impl Read) -> Result<Motion> {
	let mut vmd = Vmd::new(input);

	let header = vmd.read_header().map_err(|error| error.at(Stage::Header))?;
	let bone_frames = vmd
		.read_bone_frames()
		.map_err(|error| error.at(Stage::BoneFrames))?;
	let morph_frames = vmd
		.read_morph_frames()
		.map_err(|error| error.at(Stage::MorphFrames))?;
	let camera_frames = vmd
		.read_camera_frames()
		.map_err(|error| error.at(Stage::CameraFrames))?;
	let light_frames = vmd
		.read_light_frames()
		.map_err(|error| error.at(Stage::LightFrames))?;

	Ok(Motion {
		header,
		bone_frames,
		morph_frames,
		camera_frames,
		light_frames,
	})
}

#[derive(Debug)]
pub struct Vmd<R> {
	pub reader: R,
}

impl<R: Read> Vmd<R> {
	pub fn new(reader: R) -> Self {
		Self { reader }
	}
}
