pub mod notify;
pub mod store;

pub use notify::{TracingNotifier, TracingRevealSink};
pub use store::{JsonFileStore, MemoryStore};
