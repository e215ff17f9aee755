use std::error::Error;

use chrono::Local;
use pullsift_core::transcript::SessionCensus;
use pullsift_core::{
    AppConfig, BossProfile, BossRegistry, HeaderCensus, RunOptions, RunSummary, Transcript,
    count_headers, run,
};

use crate::args::{CleanArgs, CountArgs};

pub fn clean(args: CleanArgs, registry: &BossRegistry) -> Result<(), Box<dyn Error>> {
    let config = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::load_default()?,
    };
    let options = clean_options(args, &config);
    let summary = run(&options, registry)?;
    print!("{}", render_run_summary(&summary));
    Ok(())
}

/// Config values with command-line flags layered on top.
pub fn clean_options(args: CleanArgs, config: &AppConfig) -> RunOptions {
    let mut options = RunOptions::from_config(args.input, Local::now().date_naive(), config);
    if let Some(output) = args.output {
        options.output = output;
    }
    if let Some(csv) = args.csv {
        options.csv_output = csv;
    }
    if let Some(mode) = args.export {
        options.export_mode = mode;
    }
    if args.boss.is_some() {
        options.boss = args.boss;
    }
    options
}

pub fn render_run_summary(summary: &RunSummary) -> String {
    format!(
        "Detected boss: {}\n\
         Kept {} attempts ({} duplicate headers, {} without timestamp, {} without events)\n\
         Data has been cleaned and saved to {}\n\
         CSV data ({}) has been saved to {}\n",
        summary.boss.name,
        summary.attempts,
        summary.stats.duplicate_headers,
        summary.stats.malformed_dropped,
        summary.stats.empty_dropped,
        summary.output.display(),
        summary.export_mode,
        summary.csv_output.display(),
    )
}

pub fn count(args: CountArgs, registry: &BossRegistry) -> Result<(), Box<dyn Error>> {
    let transcript = Transcript::read(&args.input)?;
    let boss = registry.select(&transcript.content, args.boss.as_deref())?;
    let census = count_headers(&transcript.content, boss);
    print!("{}", render_census(boss, &census));
    Ok(())
}

pub fn render_census(boss: &BossProfile, census: &HeaderCensus) -> String {
    let mut out = format!(
        "Total {} attempt headers found: {}\nUnique attempt numbers: {}\n",
        boss.name,
        census.total_headers,
        census.unique_pulls.len()
    );
    match census.max_pull() {
        Some(max) => out.push_str(&format!("Max attempt number: {max}\n")),
        None => out.push_str("Max attempt number: none\n"),
    }

    if census.sessions.is_empty() {
        return out;
    }

    out.push_str("\nAttempts by session:\n");
    for SessionCensus { date, pulls } in &census.sessions {
        let max = pulls.last().copied().unwrap_or(0);
        out.push_str(&format!(
            "{date}: {} unique attempts (max #: {max})\n",
            pulls.len()
        ));
    }

    let across: std::collections::BTreeSet<u32> = census
        .sessions
        .iter()
        .flat_map(|session| session.pulls.iter().copied())
        .collect();
    let numbers: Vec<String> = across.iter().map(u32::to_string).collect();
    out.push_str(&format!(
        "\nTotal unique attempts across all sessions: {}\nAttempt numbers: [{}]\n",
        across.len(),
        numbers.join(", ")
    ));
    out
}

pub fn bosses(registry: &BossRegistry) {
    print!("{}", render_boss_list(registry));
}

pub fn render_boss_list(registry: &BossRegistry) -> String {
    let mut out = format!("{:<18} {:<12} Detects\n", "Boss", "Slug");
    out.push_str(&"-".repeat(60));
    out.push('\n');
    for profile in registry.profiles() {
        out.push_str(&format!(
            "{:<18} {:<12} {}\n",
            profile.name,
            profile.slug,
            profile.detection_patterns.join(", ")
        ));
        out.push_str(&format!("  mechanics: {}\n", profile.mechanics.join(", ")));
    }
    out
}

#[cfg(test)]
mod tests;
