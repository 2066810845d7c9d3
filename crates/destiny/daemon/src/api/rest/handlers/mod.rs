//! REST API handlers

mod health;
mod matrix;

pub use health::*;
pub use matrix::*;
