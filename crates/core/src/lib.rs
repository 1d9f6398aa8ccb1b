//! Face-centered square cropping for avatar images.
//!
//! The crate is split the same way on every axis: `domain` modules hold pure
//! types, traits and arithmetic, `infrastructure` modules talk to the outside
//! world (ONNX Runtime, the filesystem, the network).

pub mod cropping;
pub mod detection;
pub mod imaging;
pub mod pipeline;
pub mod shared;
