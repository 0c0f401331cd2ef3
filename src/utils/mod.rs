// Utils compartidos

pub mod constants;
pub mod storage;

pub use constants::*;
pub use storage::{KeyValueStorage, MemoryStorage, load_json, save_json};
