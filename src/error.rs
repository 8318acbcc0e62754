use std::{fmt, io};

use enum_as_inner::EnumAsInner;
use thiserror::Error;

/// An error that occurred while decoding a motion file.
#[derive(Error, Debug, EnumAsInner)]
pub enum Error {
	/// The input does not carry the Vocaloid Motion Data signature.
	#[error("Input is not a Vocaloid Motion Data file.")]
	NotVmd,

	/// The input carries the Vocaloid Motion Data signature, but a version
	/// marker this reader does not handle.
	#[error("Unsupported Vocaloid Motion Data version.")]
	UnsupportedVersion,

	/// The input ended before a required field was fully read.
	#[error("Input ended before a required field was fully read.")]
	Truncated,

	/// Failure in the underlying reader.
	#[error(transparent)]
	Io(#[from] io::Error),

	/// Failure tagged with the decoding stage it occurred in.
	#[error("Error decoding {stage}.")]
	Decode {
		/// Stage of the decoding pipeline that failed.
		stage: Stage,
		/// Underlying cause of the failure.
		source: Box<Error>,
	},
}

impl Error {
	/// Wrap this error with the decoding stage it occurred in.
	pub(crate) fn at(self, stage: Stage) -> Self {
		Self::Decode {
			stage,
			source: Box::new(self),
		}
	}

	/// Map a `read_exact` failure, reporting a clean end-of-input as a
	/// truncated file rather than a transport error.
	pub(crate) fn from_read(error: io::Error) -> Self {
		match error.kind() {
			io::ErrorKind::UnexpectedEof => Self::Truncated,
			_ => Self::Io(error),
		}
	}
}

/// Stage of the decoding pipeline.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
	Header,
	BoneFrames,
	MorphFrames,
	CameraFrames,
	LightFrames,
}

impl fmt::Display for Stage {
	fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
		formatter.write_str(match self {
			Self::Header => "header",
			Self::BoneFrames => "bone frames",
			Self::MorphFrames => "morph frames",
			Self::CameraFrames => "camera frames",
			Self::LightFrames => "light frames",
		})
	}
}

/// Result shorthand defaulting to this crate's error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;
