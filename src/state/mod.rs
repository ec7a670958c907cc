//! Application state module

mod signup;

pub use signup::*;
