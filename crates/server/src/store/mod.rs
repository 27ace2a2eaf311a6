mod window_store;

pub use window_store::{MergeOutcome, WindowStore, WindowView, DEFAULT_WINDOW_SIZE};
