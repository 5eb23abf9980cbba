pub mod error;

pub use error::{InventoryError, KeyError};
