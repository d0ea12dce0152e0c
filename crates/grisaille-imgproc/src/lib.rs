#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// image statistics module.
pub mod core;

/// image cropping module.
pub mod crop;

/// point-wise intensity transforms module.
pub mod enhance;

/// compute image histogram module.
pub mod histogram;

/// utilities for interpolation.
pub mod interpolation;

/// grid layout of multiple images module.
pub mod montage;

/// utility functions for resizing images.
pub mod resize;
