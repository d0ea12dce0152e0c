#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use grisaille_image as image;

#[doc(inline)]
pub use grisaille_imgproc as imgproc;

#[doc(inline)]
pub use grisaille_io as io;
