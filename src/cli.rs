use clap::Parser;
use reqwest::Url;

#[derive(Parser, Debug)]
#[command(
    name = "deploy-verify",
    version,
    about = "Verify a freshly deployed HTTP service before shifting traffic to it"
)]
pub struct Cli {
    /// Base URL of the deployed API (e.g. http://example.com/api/v1)
    #[arg(long, value_name = "BASE_URL", value_parser = parse_base_url)]
    pub url: String,
}

/// Strip trailing slashes and require an absolute http(s) URL.
///
/// Used by clap's value_parser for the --url flag.
pub fn parse_base_url(raw: &str) -> Result<String, String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err("URL must not be empty".to_string());
    }

    let parsed = Url::parse(trimmed).map_err(|e| format!("invalid URL '{trimmed}': {e}"))?;
    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            return Err(format!(
                "unsupported scheme '{other}', expected http or https"
            ));
        }
    }
    if parsed.host_str().is_none() {
        return Err(format!("URL '{trimmed}' has no host"));
    }

    Ok(trimmed.to_string())
}
