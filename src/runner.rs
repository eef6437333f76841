use reqwest::Client;
use tracing::warn;

use crate::check::{self, CheckSpec};
use crate::progress::{finish_probe, probe_spinner};
use crate::report;
use crate::types::{CheckOutcome, RunResult};

/// Execute every check in order against `base_url` and collect one outcome each.
///
/// Each check runs in its own task so that an error or a panic inside it is
/// recorded as a failed outcome instead of ending the run. Checks are awaited
/// one at a time; nothing runs concurrently.
pub async fn run_checks(
    client: &Client,
    base_url: &str,
    checks: &[CheckSpec],
    show_progress: bool,
) -> RunResult {
    let mut outcomes: Vec<CheckOutcome> = Vec::with_capacity(checks.len());

    for &spec in checks {
        let url = spec.url(base_url);
        if show_progress {
            report::print_check_header(spec.name, spec.method, &url);
        }
        let pb = show_progress.then(|| probe_spinner(spec.method, &url));

        let client = client.clone();
        let base = base_url.to_string();
        let handle = tokio::spawn(async move { check::execute(&client, &base, spec).await });

        let outcome = match handle.await {
            Ok(Ok(verdict)) => CheckOutcome::new(spec.name, verdict),
            Ok(Err(e)) => {
                warn!(check = spec.name, "check errored: {e:#}");
                CheckOutcome::failed(spec.name, format!("Test '{}' crashed: {e:#}", spec.name))
            }
            Err(e) => {
                warn!(check = spec.name, "check panicked: {e}");
                CheckOutcome::failed(spec.name, format!("Test '{}' crashed: {e}", spec.name))
            }
        };

        if let Some(pb) = &pb {
            finish_probe(pb, &outcome);
        }
        if show_progress {
            report::print_outcome(&outcome);
        }
        outcomes.push(outcome);
    }

    RunResult::from_outcomes(outcomes)
}
