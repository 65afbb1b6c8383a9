pub mod error;

pub use error::{GlimpseError, Result};
