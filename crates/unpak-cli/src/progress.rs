//! Terminal progress bar fed by extraction notifications.

use console::Term;
use indicatif::ProgressBar;
use indicatif::ProgressStyle;
use unpak_core::ProgressSink;
use unpak_core::ProgressState;

/// CLI progress bar wrapper implementing `ProgressSink`.
///
/// The bar starts without a length and adopts the entry total from the
/// first status update, since the total is only known once the archive's
/// entry list has been read. Automatically cleans up on drop.
pub struct CliProgress {
    bar: ProgressBar,
}

impl CliProgress {
    /// Creates a bar labelled with `message`, e.g. "Extracting".
    #[must_use]
    pub fn new(message: &str) -> Self {
        let bar = ProgressBar::no_length();

        // Template: "Extracting [████████░░░░] 42/100 entries (12s)"
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{msg} [{bar:40.cyan/blue}] {pos}/{len} entries ({eta})")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓░"),
        );

        bar.set_message(message.to_string());

        Self { bar }
    }

    /// Returns `true` when stdout is a terminal worth drawing on.
    #[must_use]
    pub fn should_show() -> bool {
        Term::stdout().is_term()
    }
}

impl Drop for CliProgress {
    fn drop(&mut self) {
        self.bar.finish_and_clear();
    }
}

impl ProgressSink for CliProgress {
    fn on_status_updated(&mut self, state: ProgressState) {
        if self.bar.length() != Some(state.total as u64) {
            self.bar.set_length(state.total as u64);
        }
        self.bar.set_position(state.completed as u64);
    }

    fn on_completed(&mut self, state: ProgressState) {
        // Fires after every entry; only the final call tears the bar down.
        if state.is_complete() {
            self.bar.finish_and_clear();
        }
    }
}
