pub mod error;
pub mod models;
pub mod projection;

pub use error::{Result, StockXError};
