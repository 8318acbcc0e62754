//! In-memory representation of a decoded motion file.

/// File header: format version and the model the motion targets.
#[derive(Clone, Debug, PartialEq)]
pub struct Header {
	/// Format version, either 1 or 2.
	pub version: u32,
	/// Name of the model this motion was authored for.
	pub model_name: String,
}

/// One bone keyframe.
#[derive(Clone, Debug, PartialEq)]
pub struct BoneFrame {
	/// Name of the bone this keyframe animates.
	pub bone: String,
	/// Frame index.
	pub time: u32,
	/// Translation offset from the bone's rest position.
	pub translation: [f32; 3],
	/// Rotation as a quaternion (x, y, z, w).
	pub rotation: [f32; 4],
	/// Opaque interpolation curve for the X translation axis.
	pub x_curve: [u8; 16],
	/// Opaque interpolation curve for the Y translation axis.
	pub y_curve: [u8; 16],
	/// Opaque interpolation curve for the Z translation axis.
	pub z_curve: [u8; 16],
	/// Opaque interpolation curve for the rotation.
	pub rotation_curve: [u8; 16],
}

/// One shape-morph keyframe.
#[derive(Clone, Debug, PartialEq)]
pub struct MorphFrame {
	/// Name of the morph this keyframe animates.
	pub morph: String,
	/// Frame index.
	pub time: u32,
	/// Morph weight, typically within 0..=1.
	pub weight: f32,
}

/// One camera keyframe.
#[derive(Clone, Debug, PartialEq)]
pub struct CameraFrame {
	/// Frame index.
	pub time: u32,
	/// Distance from the view target.
	pub distance: f32,
	/// Position of the view target.
	pub translation: [f32; 3],
	/// Rotation as euler angles (x, y, z).
	pub rotation: [f32; 3],
	/// Opaque interpolation curve.
	pub curve: [u8; 24],
	/// View angle in degrees.
	pub view_angle: f32,
	/// Whether the camera uses an orthographic projection.
	pub orthographic: bool,
}

/// One light keyframe.
#[derive(Clone, Debug, PartialEq)]
pub struct LightFrame {
	/// Frame index.
	pub time: u32,
	/// Light color (r, g, b).
	pub color: [f32; 3],
	/// Direction the light shines in.
	pub direction: [f32; 3],
}

/// A fully decoded motion file. Each frame sequence is independent, stored in
/// file order, and may be empty.
#[derive(Clone, Debug, PartialEq)]
pub struct Motion {
	/// File header.
	pub header: Header,
	/// Bone keyframes.
	pub bone_frames: Vec<BoneFrame>,
	/// Shape-morph keyframes.
	pub morph_frames: Vec<MorphFrame>,
	/// Camera keyframes.
	pub camera_frames: Vec<CameraFrame>,
	/// Light keyframes.
	pub light_frames: Vec<LightFrame>,
}
