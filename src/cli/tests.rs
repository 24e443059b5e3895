//! Unit tests for CLI commands

use crate::cli::{sample, Cli, Commands, SampleArgs, SampleKind};
use crate::models::{AssetRecord, BulkAssetBatch};
use crate::scenarios::Profile;
use chrono::NaiveDate;
use clap::Parser;

#[test]
fn test_run_command_parses() {
    let cli = Cli::try_parse_from([
        "asset-loadtest",
        "run",
        "--host",
        "https://graf.example.com",
        "-u",
        "25",
        "-r",
        "5",
        "-t",
        "60",
        "--profile",
        "bulk",
        "--seed",
        "9",
    ])
    .unwrap();

    match cli.command {
        Commands::Run(args) => {
            assert_eq!(args.host, "https://graf.example.com");
            assert_eq!(args.users, 25);
            assert_eq!(args.hatch_rate, "5");
            assert_eq!(args.run_time, Some(60));
            assert_eq!(args.profile, Profile::Bulk);
            assert_eq!(args.seed, Some(9));
            assert!(args.report_file.is_none());
        }
        _ => panic!("Expected Run command"),
    }
}

#[test]
fn test_run_defaults() {
    let cli = Cli::try_parse_from(["asset-loadtest", "run", "--host", "http://localhost:8080"])
        .unwrap();
    match cli.command {
        Commands::Run(args) => {
            assert_eq!(args.users, 1);
            assert_eq!(args.hatch_rate, "1");
            assert_eq!(args.run_time, None);
            assert_eq!(args.profile, Profile::Mixed);
        }
        _ => panic!("Expected Run command"),
    }
}

#[test]
fn test_unknown_profile_rejected() {
    assert!(Cli::try_parse_from([
        "asset-loadtest",
        "run",
        "--host",
        "http://localhost",
        "--profile",
        "everything",
    ])
    .is_err());
}

#[test]
fn test_sample_command_parses() {
    let cli = Cli::try_parse_from([
        "asset-loadtest",
        "sample",
        "--profile",
        "bulk",
        "-n",
        "3",
        "--date",
        "2026-01-02",
    ])
    .unwrap();
    match cli.command {
        Commands::Sample(args) => {
            assert_eq!(args.profile, SampleKind::Bulk);
            assert_eq!(args.count, 3);
            assert_eq!(args.date, NaiveDate::from_ymd_opt(2026, 1, 2));
        }
        _ => panic!("Expected Sample command"),
    }
}

#[test]
fn test_sample_single_output() {
    let args = SampleArgs {
        profile: SampleKind::Single,
        count: 4,
        seed: Some(11),
        date: NaiveDate::from_ymd_opt(2026, 6, 1),
    };
    let out = sample(&args).unwrap();
    let records: Vec<AssetRecord> = serde_json::from_str(&out).unwrap();
    assert_eq!(records.len(), 4);
    assert_eq!(out, sample(&args).unwrap(), "seeded output must be stable");
}

#[test]
fn test_sample_bulk_output() {
    let args = SampleArgs {
        profile: SampleKind::Bulk,
        count: 2,
        seed: Some(3),
        date: NaiveDate::from_ymd_opt(2026, 6, 1),
    };
    let batches: Vec<BulkAssetBatch> = serde_json::from_str(&sample(&args).unwrap()).unwrap();
    assert_eq!(batches.len(), 2);
    for batch in batches {
        assert!((5..=10).contains(&batch.len()));
        assert!(batch.assets.iter().all(|a| a.purchase_date == "2026-06-01"));
    }
}
