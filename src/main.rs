use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::io::Read;
use std::path::PathBuf;
use tracing::{info, warn};

use kefir_topics::campaign::CampaignStore;
use kefir_topics::classifier::{Topic, TopicClassifier};
use kefir_topics::output::terminal;
use kefir_topics::tally::TopicTally;

mod config;

/// Kéfir Topics: assign campaign comments to a fixed topic taxonomy.
///
/// Comments are matched against a ranked cascade of Spanish keyword rules;
/// the first rule that matches decides the topic.
#[derive(Parser)]
#[command(name = "kefir-topics", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify one or more comments given as arguments
    Classify {
        /// The comments to classify
        #[arg(required = true)]
        comments: Vec<String>,

        /// Emit JSON instead of colored text
        #[arg(long)]
        json: bool,
    },

    /// Classify one comment per line from a file (or stdin) and summarize
    Batch {
        /// Input file; reads stdin when omitted
        #[arg(long)]
        input: Option<PathBuf>,

        /// Emit JSON instead of colored text
        #[arg(long)]
        json: bool,
    },

    /// Show the campaign metadata and its taxonomy mismatch
    Metadata {
        /// Emit JSON instead of colored text
        #[arg(long)]
        json: bool,
    },

    /// List the cascade ranks and their patterns
    Rules,
}

#[derive(Serialize)]
struct Classified<'a> {
    comment: &'a str,
    topic: Topic,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so stdout only carries results
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("kefir_topics=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Classify { comments, json } => {
            let classifier = TopicClassifier::new()?;
            let results: Vec<Classified> = comments
                .iter()
                .map(|c| Classified {
                    comment: c,
                    topic: classifier.classify(c),
                })
                .collect();

            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                for r in &results {
                    terminal::display_classification(r.comment, r.topic);
                }
            }
        }

        Commands::Batch { input, json } => {
            let classifier = TopicClassifier::new()?;
            let comments = read_comments(input.as_ref())?;

            if comments.is_empty() {
                println!("No comments to classify.");
                return Ok(());
            }

            info!(count = comments.len(), "Classifying comments");

            let pb = if input.is_some() {
                ProgressBar::new(comments.len() as u64)
            } else {
                ProgressBar::hidden()
            };
            pb.set_style(
                ProgressStyle::default_bar().template("  Comments [{bar:30}] {pos}/{len} ({eta})")?,
            );

            let mut tally = TopicTally::new();
            let mut results = Vec::with_capacity(comments.len());
            for comment in &comments {
                let topic = classifier.classify(comment);
                tally.record(topic);
                results.push(Classified { comment, topic });
                pb.inc(1);
            }
            pb.finish_and_clear();

            if json {
                let report = serde_json::json!({
                    "results": results,
                    "tally": tally,
                });
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                for r in &results {
                    terminal::display_classification(r.comment, r.topic);
                }
                terminal::display_tally(&tally);
            }
        }

        Commands::Metadata { json } => {
            let config = config::Config::load()?;
            config.require_metadata_file()?;
            let store = CampaignStore::from_config(config.metadata_path.as_deref())?;
            let metadata = store.metadata();

            let mismatch = metadata.taxonomy_mismatch();
            if !mismatch.is_empty() {
                warn!(
                    display_only = mismatch.display_only.len(),
                    classifier_only = mismatch.classifier_only.len(),
                    "Campaign display categories do not match classifier topics"
                );
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&metadata)?);
            } else {
                terminal::display_metadata(&metadata);
            }
        }

        Commands::Rules => {
            let classifier = TopicClassifier::new()?;
            terminal::display_rules(classifier.rules());
            println!(
                "\n{}",
                "Patterns run on lowercased text; accent-tolerant keywords accept both spellings.".dimmed()
            );
        }
    }

    Ok(())
}

/// Read non-blank lines from a file, or from stdin when no path is given.
fn read_comments(input: Option<&PathBuf>) -> Result<Vec<String>> {
    let raw = match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read comments from {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read comments from stdin")?;
            buf
        }
    };

    Ok(raw
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| l.to_string())
        .collect())
}
