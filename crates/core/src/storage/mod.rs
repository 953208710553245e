mod error;
mod traits;
mod types;

pub use error::{Result, StoreError};
pub use traits::PostStore;
pub use types::{FieldMap, PostRecord, WriteAck};
