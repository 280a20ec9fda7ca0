mod json_file;
mod store_error;

pub use json_file::{BaselineStore, JsonFileStore};
pub use store_error::StoreError;
