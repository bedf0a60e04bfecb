/// Status channel for a run: a single human-readable line, overwritten on
/// each update. Push-only and fire-and-forget; implementations must not
/// block or influence control flow.
pub trait ProgressObserver {
    fn on_progress(&self, message: &str);
}

/// Observer that discards everything. Used where no UI is attached.
pub struct NullObserver;

impl ProgressObserver for NullObserver {
    fn on_progress(&self, _message: &str) {}
}
