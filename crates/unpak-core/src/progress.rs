//! Progress reporting for extraction operations.

/// Running tally of an extraction operation.
///
/// `total` is fixed when the archive's entry list is read, before any file
/// is written; `completed` counts processed entries and never exceeds
/// `total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressState {
    /// Total number of entries in the archive, directories included.
    pub total: usize,

    /// Number of entries processed so far.
    pub completed: usize,
}

impl ProgressState {
    /// Creates a state for an archive with `total` entries, none processed.
    #[must_use]
    pub const fn new(total: usize) -> Self {
        Self {
            total,
            completed: 0,
        }
    }

    /// Records one more processed entry, saturating at `total`.
    pub const fn advance(&mut self) {
        if self.completed < self.total {
            self.completed += 1;
        }
    }

    /// Returns `true` once every entry has been processed.
    ///
    /// An empty archive is complete from the start.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.completed >= self.total
    }

    /// Completion as a percentage in `0.0..=100.0`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn percent(&self) -> f64 {
        if self.total == 0 {
            100.0
        } else {
            (self.completed as f64 / self.total as f64) * 100.0
        }
    }
}

/// Callback trait for observing extraction progress.
///
/// Both hooks fire after **every** entry is processed: `on_completed` is
/// invoked alongside `on_status_updated` each time, not only once at the
/// end. Implementors wanting a terminal signal should check
/// [`ProgressState::is_complete`] on the state they receive. The hooks have
/// empty default bodies, so an implementation overrides only the ones it
/// cares about.
///
/// # Examples
///
/// ```
/// use unpak_core::{ProgressSink, ProgressState};
///
/// struct PrintProgress;
///
/// impl ProgressSink for PrintProgress {
///     fn on_status_updated(&mut self, state: ProgressState) {
///         println!("{}/{} entries", state.completed, state.total);
///     }
/// }
/// ```
pub trait ProgressSink: Send {
    /// Called after each entry with the updated tally.
    fn on_status_updated(&mut self, state: ProgressState) {
        let _ = state;
    }

    /// Called after each entry, immediately following
    /// [`on_status_updated`](Self::on_status_updated), with the same tally.
    fn on_completed(&mut self, state: ProgressState) {
        let _ = state;
    }
}

/// No-op implementation of `ProgressSink` that does nothing.
///
/// Use this when you don't need progress reporting but the API requires
/// a sink implementation.
#[derive(Debug, Default)]
pub struct NoopProgress;

impl ProgressSink for NoopProgress {}
