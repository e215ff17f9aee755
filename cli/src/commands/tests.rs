use std::path::PathBuf;

use pullsift_core::bosses::GALLYWIX;
use pullsift_core::{AppConfig, ExportMode};

use super::*;

fn clean_args(input: &str) -> CleanArgs {
    CleanArgs {
        input: PathBuf::from(input),
        output: None,
        csv: None,
        export: None,
        boss: None,
        config: None,
    }
}

#[test]
fn test_flags_override_config() {
    let config = AppConfig {
        output: Some(PathBuf::from("from-config.txt")),
        csv_output: Some(PathBuf::from("from-config.csv")),
        export_mode: ExportMode::Players,
        boss: Some("stix".to_string()),
        ..AppConfig::default()
    };

    let mut args = clean_args("data.txt");
    args.csv = Some(PathBuf::from("flag.csv"));
    args.boss = Some("gallywix".to_string());
    let options = clean_options(args, &config);

    assert_eq!(options.output, PathBuf::from("from-config.txt"));
    assert_eq!(options.csv_output, PathBuf::from("flag.csv"));
    assert_eq!(options.export_mode, ExportMode::Players);
    assert_eq!(options.boss.as_deref(), Some("gallywix"));
}

#[test]
fn test_defaults_without_config() {
    let options = clean_options(clean_args("data.txt"), &AppConfig::default());
    assert_eq!(options.output, PathBuf::from("cleaned_data.txt"));
    assert_eq!(options.csv_output, PathBuf::from("cleaned_data.csv"));
    assert_eq!(options.export_mode, ExportMode::Attempts);
    assert_eq!(options.boss, None);
}

#[test]
fn test_render_census() {
    let content = "\
Log Analysis \u{2014} 5/20/2025
Gallywix #1   (1:00)
Gallywix #2   (1:00)
Gallywix #2   (1:00) - Part 2
Log Analysis \u{2014} 5/24/2025
Gallywix #1   (2:00)
";
    let census = count_headers(content, &GALLYWIX);
    assert_eq!(
        render_census(&GALLYWIX, &census),
        "Total Gallywix attempt headers found: 4\n\
         Unique attempt numbers: 2\n\
         Max attempt number: 2\n\
         \n\
         Attempts by session:\n\
         5/20/2025: 2 unique attempts (max #: 2)\n\
         5/24/2025: 1 unique attempts (max #: 1)\n\
         \n\
         Total unique attempts across all sessions: 2\n\
         Attempt numbers: [1, 2]\n"
    );
}

#[test]
fn test_render_boss_list_in_registry_order() {
    let listing = render_boss_list(&BossRegistry::builtin());
    let order: Vec<usize> = ["Nexus-King", "Gallywix", "Mug'Zee", "Stix Bunkjunker"]
        .iter()
        .map(|name| listing.find(name).unwrap())
        .collect();
    assert!(order.windows(2).all(|w| w[0] < w[1]));
    assert!(listing.contains("mugzee"));
}
