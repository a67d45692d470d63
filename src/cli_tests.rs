use std::path::PathBuf;

use clap::Parser;

use super::*;

#[test]
fn cli_render_defaults() {
    let cli = Cli::parse_from(["sentiment-report", "render"]);
    match cli.command {
        Commands::Render(args) => {
            assert!(args.pages.is_empty());
            assert!(args.artifacts.is_none());
            assert!(args.output.is_none());
            assert!(!args.strict);
        }
        _ => panic!("Expected Render command"),
    }
}

#[test]
fn cli_render_with_repeated_pages() {
    let cli = Cli::parse_from([
        "sentiment-report",
        "render",
        "--page",
        "k-fold",
        "-p",
        "random-forest",
    ]);
    match cli.command {
        Commands::Render(args) => {
            assert_eq!(args.pages, vec![Page::KFold, Page::RandomForest]);
        }
        _ => panic!("Expected Render command"),
    }
}

#[test]
fn cli_render_rejects_unknown_page() {
    let result = Cli::try_parse_from(["sentiment-report", "render", "--page", "summary"]);
    assert!(result.is_err());
}

#[test]
fn cli_render_with_paths_and_strict() {
    let cli = Cli::parse_from([
        "sentiment-report",
        "render",
        "--artifacts",
        "out",
        "--config",
        "custom.toml",
        "--output",
        "report.html",
        "--strict",
    ]);
    match cli.command {
        Commands::Render(args) => {
            assert_eq!(args.artifacts, Some(PathBuf::from("out")));
            assert_eq!(args.config, Some(PathBuf::from("custom.toml")));
            assert_eq!(args.output, Some(PathBuf::from("report.html")));
            assert!(args.strict);
        }
        _ => panic!("Expected Render command"),
    }
}

#[test]
fn cli_inspect_with_columns_and_format() {
    let cli = Cli::parse_from([
        "sentiment-report",
        "inspect",
        "average_scores.csv",
        "--columns",
        "Metric,Score",
        "--format",
        "json",
    ]);
    match cli.command {
        Commands::Inspect(args) => {
            assert_eq!(args.file, PathBuf::from("average_scores.csv"));
            assert_eq!(args.columns, vec!["Metric", "Score"]);
            assert_eq!(args.format, OutputFormat::Json);
        }
        _ => panic!("Expected Inspect command"),
    }
}

#[test]
fn cli_inspect_defaults_to_text() {
    let cli = Cli::parse_from(["sentiment-report", "inspect", "a.csv"]);
    match cli.command {
        Commands::Inspect(args) => {
            assert!(args.columns.is_empty());
            assert_eq!(args.format, OutputFormat::Text);
        }
        _ => panic!("Expected Inspect command"),
    }
}

#[test]
fn cli_init_defaults() {
    let cli = Cli::parse_from(["sentiment-report", "init"]);
    match cli.command {
        Commands::Init(args) => {
            assert_eq!(args.output, PathBuf::from(".sentiment-report.toml"));
            assert!(!args.force);
        }
        _ => panic!("Expected Init command"),
    }
}

#[test]
fn cli_global_flags() {
    let cli = Cli::parse_from([
        "sentiment-report",
        "render",
        "-vv",
        "--color",
        "never",
        "--no-config",
    ]);
    assert_eq!(cli.verbose, 2);
    assert!(!cli.quiet);
    assert!(matches!(cli.color, ColorChoice::Never));
    assert!(cli.no_config);
}

#[test]
fn cli_quiet_flag() {
    let cli = Cli::parse_from(["sentiment-report", "-q", "init"]);
    assert!(cli.quiet);
}
