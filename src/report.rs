use console::Style;

use crate::probe::ProbeMethod;
use crate::types::{CheckOutcome, RunResult};

const RULE_WIDTH: usize = 60;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

fn status_label(passed: bool) -> String {
    if passed {
        Style::new().green().bold().apply_to("PASS").to_string()
    } else {
        Style::new().red().bold().apply_to("FAIL").to_string()
    }
}

pub fn print_banner(base_url: &str) {
    let bold = Style::new().bold();
    println!();
    println!("{}", rule());
    println!("{}", bold.apply_to("DEPLOYMENT VERIFICATION"));
    println!("{}", rule());
    println!("Base URL:  {base_url}");
    println!(
        "Timestamp: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
}

pub fn print_check_header(name: &str, method: ProbeMethod, url: &str) {
    println!();
    println!("{}", rule());
    println!("TEST: {name}");
    println!("{}", rule());
    println!("Testing: {method} {url}");
}

pub fn print_outcome(outcome: &CheckOutcome) {
    println!("{}: {}", status_label(outcome.passed), outcome.message);
}

/// Final table, one line per check in the order the checks ran.
pub fn print_summary(result: &RunResult) {
    let dim = Style::new().dim();

    println!();
    println!("{}", rule());
    println!("TEST SUMMARY");
    println!("{}", rule());

    for outcome in &result.outcomes {
        println!("  {} {}", status_label(outcome.passed), outcome.name);
        if !outcome.passed {
            println!("       {}", dim.apply_to(&outcome.message));
        }
    }

    println!();
    println!(
        "Total: {}/{} tests passed",
        result.passed_count, result.total_count
    );

    if result.overall_success {
        println!(
            "\n{}",
            Style::new()
                .green()
                .apply_to("All tests passed! Deployment is successful!")
        );
    } else {
        println!(
            "\n{}",
            Style::new().red().apply_to(format!(
                "{} test(s) failed! Deployment may have issues.",
                result.failed_count()
            ))
        );
    }
    println!();
}
