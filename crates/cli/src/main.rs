// ABOUTME: CLI binary for the Doogle content extractor.
// ABOUTME: Extracts main-content text from one or more URLs and prints it to stdout.

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use doogle_extract::Extractor;

#[derive(Parser, Debug)]
#[command(name = "doogle-cli")]
#[command(about = "Fetch web pages and extract their main content as plain text")]
struct Args {
    /// Output the full result as JSON instead of raw content
    #[arg(long = "json")]
    json_output: bool,

    /// Fetch timeout in seconds
    #[arg(long = "timeout", default_value_t = 8)]
    timeout_secs: u64,

    /// Maximum extracted content length in characters
    #[arg(long = "max-chars", default_value_t = 8000)]
    max_chars: usize,

    /// Allow fetching from private/local networks
    #[arg(long = "allow-private-networks")]
    allow_private_networks: bool,

    /// URLs to extract
    #[arg(required = true)]
    urls: Vec<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let extractor = Extractor::builder()
        .timeout(Duration::from_secs(args.timeout_secs))
        .max_content_chars(args.max_chars)
        .allow_private_networks(args.allow_private_networks)
        .build();

    let mut had_error = false;

    for url in &args.urls {
        match extractor.extract(url).await {
            Ok(result) => {
                if args.json_output {
                    match serde_json::to_string_pretty(&result) {
                        Ok(json) => println!("{}", json),
                        Err(e) => {
                            eprintln!("error serializing result for {}: {}", url, e);
                            had_error = true;
                        }
                    }
                } else {
                    println!("{}", result.content);
                }
            }
            Err(e) => {
                eprintln!("error extracting {}: {}", url, e);
                had_error = true;
            }
        }
    }

    if had_error {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}
