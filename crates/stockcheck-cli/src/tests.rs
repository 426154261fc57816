use super::*;

#[test]
fn parses_product_ids_with_defaults() {
    let cli = Cli::try_parse_from(["stockcheck", "40299687", "S69022537"])
        .expect("expected valid cli args");

    assert_eq!(cli.product_ids, vec!["40299687", "S69022537"]);
    assert!(cli.country.is_none());
    assert!(cli.store.is_none());
    assert_eq!(cli.reporter, ReportFormat::Table);
    assert!(cli.max_concurrent.is_none());
}

#[test]
fn no_product_ids_is_valid() {
    let cli = Cli::try_parse_from(["stockcheck"]).expect("expected valid cli args");
    assert!(cli.product_ids.is_empty());
}

#[test]
fn parses_short_options() {
    let cli = Cli::try_parse_from([
        "stockcheck",
        "-c",
        "at",
        "-s",
        "Wien",
        "-r",
        "json",
        "40299687",
    ])
    .expect("expected valid cli args");

    assert_eq!(cli.country.as_deref(), Some("at"));
    assert_eq!(cli.store.as_deref(), Some("Wien"));
    assert_eq!(cli.reporter, ReportFormat::Json);
}

#[test]
fn parses_csv_reporter_and_concurrency_cap() {
    let cli = Cli::try_parse_from([
        "stockcheck",
        "--reporter",
        "csv",
        "--max-concurrent",
        "8",
        "40299687",
    ])
    .expect("expected valid cli args");

    assert_eq!(cli.reporter, ReportFormat::Csv);
    assert_eq!(cli.max_concurrent, Some(8));
}

#[test]
fn rejects_unknown_reporter() {
    let result = Cli::try_parse_from(["stockcheck", "--reporter", "xml", "40299687"]);
    assert!(result.is_err());
}

#[test]
fn help_is_answered_by_argument_parsing_alone() {
    let err = Cli::try_parse_from(["stockcheck", "--help"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
}
