mod record_store;
mod storage;

pub use record_store::*;
pub use storage::*;
