#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod matrix;
mod number_traits;
pub mod vector;

pub use error::{MathError, Result};
pub use matrix::{AffineTransform, Identity, Matrix3, Matrix3f, Operand, Product};
pub use vector::{Vector2, Vector2f, Vector3, Vector3f};
