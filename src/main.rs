mod check;
mod cli;
mod logging;
mod probe;
mod progress;
mod report;
mod runner;
mod types;

use clap::Parser;
use cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Usage errors exit with clap's status 2 before any check runs.
    let cli = Cli::parse();
    logging::init_tracing();

    let client = match probe::build_client() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(2);
        }
    };

    report::print_banner(&cli.url);
    let result = runner::run_checks(&client, &cli.url, check::CHECKS, true).await;
    report::print_summary(&result);

    std::process::exit(result.exit_code());
}
