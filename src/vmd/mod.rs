//! Utilities for reading the VMD binary motion format.

mod bone;
mod camera;
mod common;
mod header;
mod light;
mod morph;
mod string;
mod vmd;

pub use vmd::read;
