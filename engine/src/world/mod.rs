//! World Module
//!
//! Scene-object transforms shared by the gameplay components.

pub mod transform;

pub use transform::Transform;
