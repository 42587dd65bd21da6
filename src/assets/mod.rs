//! Asset decoding.
//!
//! IO is front-loaded by the sequence loader; this module only turns bytes into
//! pixels.

/// Image decoding into the working RGBA8 representation.
pub mod decode;
