//! CLI administration tool for the app directory.
//!
//! Lets an operator inspect the listing collection, relay a submission by hand,
//! and check store connectivity without going through the web page.
//!
//! # Usage
//!
//! ```bash
//! # Show the listings the page would render
//! cargo run --bin admin -- listings
//!
//! # Same, as JSON
//! cargo run --bin admin -- listings --json
//!
//! # Relay a submission
//! cargo run --bin admin -- submit --email john@doe.io --link https://pomo.example
//!
//! # Check configuration and store connectivity
//! cargo run --bin admin -- check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see `app_directory::config`.

use app_directory::application::services::{ListingFetch, ListingService, SubmissionService};
use app_directory::config::{self, Config};
use app_directory::domain::entities::SubmissionResult;
use app_directory::domain::form::{FormPhase, SubmissionForm};
use app_directory::domain::repositories::RecordStore;
use app_directory::error::AppError;
use app_directory::infrastructure::ledger::NullLedger;
use app_directory::infrastructure::notion::NotionStore;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::sync::Arc;
use std::time::Instant;

/// CLI tool for managing the app directory.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Show the normalized listings
    Listings {
        /// Print entries as JSON
        #[arg(long)]
        json: bool,
    },

    /// Relay a submission to the submission collection
    Submit {
        /// Submitter email
        #[arg(short, long)]
        email: String,

        /// Project URL
        #[arg(short, long)]
        link: String,

        /// Submitter twitter handle
        #[arg(short, long)]
        twitter: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Check configuration and store connectivity
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Invalid configuration")?;
    let store: Arc<dyn RecordStore> = Arc::new(
        NotionStore::new(&config.store).context("Failed to create record store client")?,
    );

    match cli.command {
        Commands::Listings { json } => handle_listings(store, json).await?,
        Commands::Submit {
            email,
            link,
            twitter,
            yes,
        } => handle_submit(store, &config, email, link, twitter, yes).await?,
        Commands::Check => handle_check(store, &config).await?,
    }

    Ok(())
}

/// Fetches and prints the listings the page would render.
///
/// # Output Format
///
/// ```text
/// 📋 Listings
///
///   Flow                           https://flow.app
///     Minimal Pomodoro timer for macOS
/// ```
async fn handle_listings(store: Arc<dyn RecordStore>, json: bool) -> Result<()> {
    let service = ListingService::new(store);

    let entries = match service.fetch_listings().await {
        ListingFetch::Available(entries) => entries,
        ListingFetch::Unavailable(e) => {
            anyhow::bail!("Listings unavailable: {}", e);
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!("{}", "📋 Listings".bright_blue().bold());
    println!();

    if entries.is_empty() {
        println!("{}", "  No listings found".yellow());
        return Ok(());
    }

    for entry in &entries {
        println!("  {:<30} {}", entry.name.cyan().bold(), entry.link.bright_black());
        println!("    {}", entry.description);
    }

    println!();
    println!(
        "  Total: {}",
        entries.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Relays a submission with confirmation prompt.
///
/// Drives the same form lifecycle as the page: the submission goes
/// `Idle -> Submitting` and ends in `Success` or back in `Idle`.
async fn handle_submit(
    store: Arc<dyn RecordStore>,
    config: &Config,
    email: String,
    link: String,
    twitter: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "📨 Submit App".bright_blue().bold());
    println!();

    let mut form = SubmissionForm::new();
    form.email = email;
    form.link = link;
    form.twitter = twitter.unwrap_or_default();

    println!("  Email:   {}", form.email.cyan());
    println!("  Link:    {}", form.link.cyan());
    if !form.twitter.is_empty() {
        println!("  Twitter: {}", form.twitter.cyan());
    }
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Relay this submission?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let service = SubmissionService::new(store, Arc::new(NullLedger::new()), config.validation_mode);

    form.begin_submit();
    println!("{}", "⏳ Submitting".bright_black());

    let outcome = service.relay(form.submission(), None).await;
    let succeeded = matches!(&outcome, Ok(result) if result.is_success());
    form.finish(succeeded, Instant::now());

    report_outcome(&form, outcome)?;
    println!();

    Ok(())
}

/// Prints the relay outcome.
///
/// # Errors
///
/// Fails unless the form reached `Success`, so scripts see a non-zero exit.
fn report_outcome(
    form: &SubmissionForm,
    outcome: Result<SubmissionResult, AppError>,
) -> Result<()> {
    match outcome {
        Ok(result) if matches!(form.phase(), FormPhase::Success { .. }) => {
            println!("{}", "✅ Submitted!".green().bold());
            println!("  Store status: {}", result.status.to_string().bright_white());
            Ok(())
        }
        Ok(result) => {
            println!(
                "{}",
                format!("❌ Store rejected the submission ({})", result.status).red()
            );
            anyhow::bail!("Submission rejected with status {}", result.status);
        }
        Err(AppError::Validation { message, details }) => {
            println!("{}", format!("❌ {}", message).red());
            println!("  {}", details.to_string().bright_black());
            anyhow::bail!("Submission invalid: {}", message);
        }
        Err(e) => Err(anyhow::anyhow!("Submission failed: {:?}", e)),
    }
}

/// Prints the configuration summary and checks the listing collection.
async fn handle_check(store: Arc<dyn RecordStore>, config: &Config) -> Result<()> {
    println!("{}", "🔍 Configuration".bright_blue().bold());
    println!();
    println!("  Store:                 {}", config.store.api_base.cyan());
    println!("  API version:           {}", config.store.api_version.cyan());
    println!(
        "  Listing collection:    {}",
        config.store.listings_database_id.cyan()
    );
    println!(
        "  Submission collection: {}",
        config.store.submissions_database_id.cyan()
    );
    println!(
        "  Validation:            {}",
        format!("{:?}", config.validation_mode).cyan()
    );
    println!();

    match store.health_check().await {
        Ok(()) => {
            println!("{}", "✅ Listing collection reachable".green().bold());
        }
        Err(e) => {
            println!("{}", "❌ Record store check failed".red().bold());
            println!("  {}", e.to_string().bright_black());
            anyhow::bail!("Record store unreachable");
        }
    }
    println!();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn settled_form(succeeded: bool) -> SubmissionForm {
        let mut form = SubmissionForm::new();
        form.begin_submit();
        form.finish(succeeded, Instant::now());
        form
    }

    #[test]
    fn test_accepted_submission_succeeds() {
        let outcome = Ok(SubmissionResult::forwarded(200));

        assert!(report_outcome(&settled_form(true), outcome).is_ok());
    }

    #[test]
    fn test_rejected_submission_fails() {
        let outcome = Ok(SubmissionResult::forwarded(400));

        let err = report_outcome(&settled_form(false), outcome).unwrap_err();
        assert!(err.to_string().contains("400"));
    }

    #[test]
    fn test_invalid_submission_fails() {
        let outcome = Err(AppError::bad_request(
            "Validation failed",
            json!({ "email": [] }),
        ));

        assert!(report_outcome(&settled_form(false), outcome).is_err());
    }
}
