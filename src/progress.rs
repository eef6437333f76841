use console::Style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::probe::{ProbeMethod, REQUEST_TIMEOUT};
use crate::types::CheckOutcome;

const TICKS: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner on stderr while one probe is in flight, showing elapsed time
/// against the request timeout. Hidden by indicatif when stderr is not a tty.
pub fn probe_spinner(method: ProbeMethod, url: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(TICKS)
            .template("{spinner} [{elapsed}] {msg}")
            .expect("invalid spinner template"),
    );
    pb.set_message(format!(
        "{method} {url} (timeout {}s)",
        REQUEST_TIMEOUT.as_secs()
    ));
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Stop the spinner, leaving a one-word verdict in its place.
pub fn finish_probe(pb: &ProgressBar, outcome: &CheckOutcome) {
    let verdict = if outcome.passed {
        Style::new().green().apply_to("✓ done")
    } else {
        Style::new().red().apply_to("✗ failed")
    };
    pb.finish_with_message(format!("{} {}", pb.message(), verdict));
}
