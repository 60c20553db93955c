#![warn(clippy::pedantic)]

pub use planar_math::*;
