pub mod db;
mod error;
pub mod models;
pub mod queries;

pub use error::{Error, Result};
