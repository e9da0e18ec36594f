// src/progress.rs
/// Lightweight progress reporting used by searches.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called once the number of items is known.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one show has been normalized into a result.
    fn item_done(&mut self, _id: u64) {}

    /// Called once all items are done. Not called when the run fails.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
