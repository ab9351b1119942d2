// Library crate root.
//
// This crate is used both as a binary (src/main.rs) and as a library. The
// transform math in `mat3` has no dependency on the canvas or the window.

pub mod error;
pub mod matrix;
pub mod mat3;
pub mod im;
pub mod canvas;
pub mod params;
pub mod config;
pub mod sketch;
pub mod demo_ui;

pub use error::{DemoError, TransformError};
pub use mat3::{Mat3, Vec3, apply, compose, make_vector};
