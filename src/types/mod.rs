//! Core value types for spritefx.
//!
//! - `Colour` - RGBA colour values with hex parsing and 16-bit interpolation
//! - `Gradient` - ordered colour ramps between two endpoints

mod colour;
mod gradient;

pub use colour::Colour;
pub use gradient::Gradient;
