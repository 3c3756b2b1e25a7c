mod error;
pub mod meili;

pub use error::{Error, Result};
