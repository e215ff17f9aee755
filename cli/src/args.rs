use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use pullsift_core::ExportMode;

#[derive(Parser, Debug)]
#[command(name = "pullsift")]
#[command(about = "Clean and summarize boss-attempt transcripts")]
#[command(version)]
pub struct Cli {
    /// Debug output for pullsift itself
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Segment, resequence and summarize a transcript
    Clean(CleanArgs),
    /// Count pull headers without segmenting
    Count(CountArgs),
    /// List supported bosses
    Bosses,
}

#[derive(Args, Debug)]
pub struct CleanArgs {
    /// Transcript file
    pub input: PathBuf,

    /// Cleaned text report [default: cleaned_data.txt]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// CSV export [default: cleaned_data.csv]
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// CSV shape: attempts, events or players [default: attempts]
    #[arg(long)]
    pub export: Option<ExportMode>,

    /// Boss slug; skips detection
    #[arg(short, long)]
    pub boss: Option<String>,

    /// Config file [default: <config dir>/pullsift/config.toml if present]
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct CountArgs {
    /// Transcript file
    pub input: PathBuf,

    /// Boss slug; skips detection
    #[arg(short, long)]
    pub boss: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_flags() {
        let cli = Cli::try_parse_from([
            "pullsift",
            "clean",
            "data.txt",
            "-o",
            "out.txt",
            "--csv",
            "out.csv",
            "--export",
            "players",
            "--boss",
            "stix",
            "-v",
        ])
        .unwrap();

        assert!(cli.verbose);
        let Command::Clean(args) = cli.command else {
            panic!("expected clean");
        };
        assert_eq!(args.input, PathBuf::from("data.txt"));
        assert_eq!(args.output, Some(PathBuf::from("out.txt")));
        assert_eq!(args.csv, Some(PathBuf::from("out.csv")));
        assert_eq!(args.export, Some(ExportMode::Players));
        assert_eq!(args.boss.as_deref(), Some("stix"));
        assert_eq!(args.config, None);
    }

    #[test]
    fn test_rejects_unknown_export_mode() {
        assert!(Cli::try_parse_from(["pullsift", "clean", "data.txt", "--export", "rows"]).is_err());
    }

    #[test]
    fn test_verbose_and_quiet_conflict() {
        assert!(Cli::try_parse_from(["pullsift", "-v", "-q", "bosses"]).is_err());
    }

    #[test]
    fn test_count_and_bosses() {
        let cli = Cli::try_parse_from(["pullsift", "count", "data.txt", "--boss", "gallywix"]).unwrap();
        assert!(matches!(cli.command, Command::Count(CountArgs { ref boss, .. }) if boss.as_deref() == Some("gallywix")));

        let cli = Cli::try_parse_from(["pullsift", "bosses", "-q"]).unwrap();
        assert!(cli.quiet);
        assert!(matches!(cli.command, Command::Bosses));
    }
}
