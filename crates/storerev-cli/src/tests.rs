use clap::Parser;

use super::*;

#[test]
fn parses_minimal_collect_command() {
    let cli = Cli::try_parse_from([
        "storerev", "collect", "--app-id", "6499447981", "--slug", "one-pass",
    ])
    .expect("expected valid cli args");

    let Commands::Collect(args) = cli.command;
    assert_eq!(args.app_id, "6499447981");
    assert_eq!(args.slug, "one-pass");
    assert_eq!(args.store, StoreArg::AppStore);
    assert_eq!(args.family, FamilyArg::Api);
    assert!(args.country.is_none());
    assert!(args.output_dir.is_none());
}

#[test]
fn parses_store_and_family_values() {
    let cli = Cli::try_parse_from([
        "storerev",
        "collect",
        "--app-id",
        "com.pearhealthlabs.onepass",
        "--slug",
        "one-pass",
        "--store",
        "google-play",
        "--family",
        "browser",
    ])
    .expect("expected valid cli args");

    let Commands::Collect(args) = cli.command;
    assert_eq!(args.store, StoreArg::GooglePlay);
    assert_eq!(args.family, FamilyArg::Browser);
}

#[test]
fn parses_country_and_output_dir_overrides() {
    let cli = Cli::try_parse_from([
        "storerev",
        "collect",
        "--app-id",
        "1",
        "--slug",
        "x",
        "--country",
        "gb",
        "--output-dir",
        "/tmp/out",
    ])
    .expect("expected valid cli args");

    let Commands::Collect(args) = cli.command;
    assert_eq!(args.country.as_deref(), Some("gb"));
    assert_eq!(args.output_dir, Some(std::path::PathBuf::from("/tmp/out")));
}

#[test]
fn rejects_unknown_family() {
    let result = Cli::try_parse_from([
        "storerev", "collect", "--app-id", "1", "--slug", "x", "--family", "union",
    ]);
    assert!(result.is_err());
}

#[test]
fn missing_app_id_is_an_error() {
    let result = Cli::try_parse_from(["storerev", "collect", "--slug", "one-pass"]);
    assert!(result.is_err());
}

#[test]
fn family_file_slugs() {
    assert_eq!(FamilyArg::Api.file_slug(), "api");
    assert_eq!(FamilyArg::Browser.file_slug(), "browser");
    assert_eq!(FamilyArg::Static.file_slug(), "static");
}

#[test]
fn store_arg_converts_to_store_kind() {
    assert_eq!(StoreKind::from(StoreArg::AppStore), StoreKind::AppleAppStore);
    assert_eq!(StoreKind::from(StoreArg::GooglePlay), StoreKind::GooglePlay);
}
