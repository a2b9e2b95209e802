//! Casegen Control - CLI front-end for the test case generator.
//!
//! Takes one test case description, performs one completion call, and
//! prints the result. Every failure is reported on stderr with a non-zero
//! exit code; nothing is swallowed.

mod render;
mod spinner;

use anyhow::{bail, Result};
use casegen_common::prompt::build_messages;
use casegen_common::{parse_report, CasegenError, CompletionClient, Config};
use clap::Parser;
use std::io::{self, BufRead, Write};
use tracing::Level;

#[derive(Parser)]
#[command(name = "casegenctl")]
#[command(about = "Generate structured QA test cases from a description", long_about = None)]
#[command(version)]
struct Cli {
    /// Test case description; prompted for interactively when omitted
    description: Option<String>,

    /// Print the raw response text instead of the structured view
    #[arg(long)]
    raw: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Keep interactive output clean; RUST_LOG opts into more
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .init();

    let cli = Cli::parse();

    // Credential check comes first: no prompt, no network call without it
    let config = Config::from_env()?;

    let description = match cli.description {
        Some(text) => text,
        None => prompt_description()?,
    };
    if description.trim().is_empty() {
        bail!("Test case description must not be empty");
    }

    let client = CompletionClient::new(config);
    let messages = build_messages(&description);

    let spinner = spinner::Spinner::start("Generating test cases...");
    let outcome = client.complete(&messages).await;
    spinner.finish();

    let raw_response = outcome?;

    if cli.raw {
        println!("{}", raw_response);
        return Ok(());
    }

    match parse_report(&raw_response) {
        Ok(report) => print!("{}", render::format_report(&report)),
        Err(CasegenError::MalformedResponse { reason, raw }) => {
            eprint!("{}", render::format_malformed(&reason, &raw));
            eprintln!();
            std::process::exit(1);
        }
        Err(other) => return Err(other.into()),
    }

    Ok(())
}

/// Ask for one line of free text on stdin.
fn prompt_description() -> Result<String> {
    print!("Enter the test case description: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;
    Ok(input.trim().to_string())
}
