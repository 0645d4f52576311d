//! Conversion between curves and interchange documents.
//!
//! Both directions are pure: they never touch files or scenes.

mod decode;
mod encode;

pub use decode::{decode, decode_with};
pub use encode::{encode, encode_with};
