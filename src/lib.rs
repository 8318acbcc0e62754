//! Pure rust reader for the Vocaloid Motion Data animation format.

#![allow(clippy::module_inception)]
#![warn(missing_debug_implementations, missing_docs)]

mod error;
mod macros;
mod motion;

pub mod vmd;

pub use {
	error::{Error, Result, Stage},
	motion::{BoneFrame, CameraFrame, Header, LightFrame, MorphFrame, Motion},
	vmd::read,
};
