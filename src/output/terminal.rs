// Colored terminal output for classifications, topic distributions and
// campaign metadata.
//
// main.rs only decides what to show; all formatting lives here.

use colored::Colorize;

use crate::campaign::CampaignMetadata;
use crate::classifier::rules::Rule;
use crate::classifier::Topic;
use crate::tally::TopicTally;

/// Print one classified comment on a single line.
pub fn display_classification(comment: &str, topic: Topic) {
    let preview = super::truncate_chars(comment.trim(), 80);
    println!("  {:<42} {}", colorize_topic(topic), preview.dimmed());
}

/// Display a batch distribution as a bar chart, in cascade order.
pub fn display_tally(tally: &TopicTally) {
    println!(
        "\n{}",
        format!("=== Topic Distribution ({} comments) ===", tally.total()).bold()
    );
    println!();

    let bar_width: usize = 20;

    for (topic, count) in tally.iter() {
        let share = tally.share(topic);
        let filled = (share * bar_width as f64).round() as usize;
        let empty = bar_width.saturating_sub(filled);
        let bar = format!("[{}{}]", "=".repeat(filled), " ".repeat(empty));

        let colored_bar = if share >= 0.25 {
            bar.bright_green()
        } else if share >= 0.10 {
            bar.bright_yellow()
        } else {
            bar.bright_blue()
        };

        println!(
            "  {:>2}. {:<42} {} {:>5} ({:>5.1}%)",
            topic.rank(),
            topic.label().bold(),
            colored_bar,
            count,
            share * 100.0
        );
    }
    println!();
}

/// Display the campaign record and how its categories line up with the
/// classifier's labels.
pub fn display_metadata(metadata: &CampaignMetadata) {
    println!(
        "\n{}",
        format!("=== Campaign: {} ===", metadata.campaign_name).bold()
    );
    println!("  Product: {}", metadata.product);
    println!("  Version: {}", metadata.version);
    println!("  Last updated: {}", metadata.last_updated);

    println!("\n  Display categories:");
    for (i, category) in metadata.categories.iter().enumerate() {
        println!("    {}. {}", i + 1, category);
    }

    let mismatch = metadata.taxonomy_mismatch();
    if mismatch.is_empty() {
        println!("\n  {}", "Display categories match classifier topics.".green());
        return;
    }

    println!(
        "\n  {} display categories differ from classifier topics",
        "Warning:".yellow()
    );
    for category in &mismatch.display_only {
        println!("    - display only:    {}", category.dimmed());
    }
    for topic in &mismatch.classifier_only {
        println!("    - classifier only: {}", topic.label().dimmed());
    }
}

/// List the cascade, content rules followed by the structural ranks.
pub fn display_rules(rules: &[Rule]) {
    println!("\n{}", "=== Topic Cascade (first match wins) ===".bold());
    println!();

    for rule in rules {
        println!("  {:>2}. {}", rule.rank(), colorize_topic(rule.topic()));
        println!(
            "      Pattern: {}",
            super::truncate_chars(rule.pattern_source(), 120).dimmed()
        );
    }

    println!("  {:>2}. {}", Topic::OffTopic.rank(), colorize_topic(Topic::OffTopic));
    println!(
        "      {}",
        "Emoji outnumber words, fewer than 2 words, or acknowledgment-only text".dimmed()
    );
    println!("  {:>2}. {}", Topic::Other.rank(), colorize_topic(Topic::Other));
    println!("      {}", "Everything else".dimmed());
}

/// Colorize a topic label: content topics stand out, noise and catch-all fade.
fn colorize_topic(topic: Topic) -> colored::ColoredString {
    match topic {
        Topic::HomemadeKefir => topic.label().red().bold(),
        Topic::Price => topic.label().bright_red(),
        Topic::OffTopic => topic.label().dimmed(),
        Topic::Other => topic.label().normal(),
        _ => topic.label().cyan(),
    }
}
