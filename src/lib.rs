pub mod errors;
pub mod models;
pub mod stats;
pub mod storage;
pub mod store;

pub use errors::JournalError;
pub use stats::{build_stats, build_stats_at};
pub use storage::{load_data, resolve_data_path};
pub use store::JournalStore;
