use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use goose::config::GooseConfiguration;
use goose::prelude::*;
use tracing::info;
use url::Url;

use crate::config::LoadTestConfig;
use crate::factory::{self, AssetFactory};
use crate::scenarios::{self, Profile};

#[derive(Parser, Debug)]
#[command(name = "asset-loadtest")]
#[command(version, about = "Load test the asset tagging API", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a goose attack against a live service
    Run(RunArgs),
    /// Print generated payloads as JSON without sending anything
    Sample(SampleArgs),
}

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Base URL of the service under test
    #[arg(long, env = "ASSETLOAD_HOST")]
    pub host: String,

    /// Number of concurrent users
    #[arg(short, long, default_value_t = 1)]
    pub users: usize,

    /// Users started per second
    #[arg(short = 'r', long, default_value = "1")]
    pub hatch_rate: String,

    /// Stop after this many seconds (runs until interrupted otherwise)
    #[arg(short = 't', long)]
    pub run_time: Option<usize>,

    #[arg(long, value_enum, default_value_t = Profile::Mixed)]
    pub profile: Profile,

    /// Base random seed, overrides the config file and ASSETLOAD_SEED
    #[arg(long)]
    pub seed: Option<u64>,

    /// YAML configuration file
    #[arg(short, long, env = "ASSETLOAD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Write goose's HTML report here
    #[arg(long)]
    pub report_file: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SampleKind {
    Single,
    Bulk,
}

#[derive(Args, Debug, Clone)]
pub struct SampleArgs {
    #[arg(long, value_enum, default_value_t = SampleKind::Single)]
    pub profile: SampleKind,

    /// Number of payloads to print
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    #[arg(long)]
    pub seed: Option<u64>,

    /// Date to count purchase dates back from (YYYY-MM-DD, default today)
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

pub async fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Run(args) => run(args).await,
        Commands::Sample(args) => {
            println!("{}", sample(&args)?);
            Ok(())
        }
    }
}

/// Configure and execute the goose attack described by `args`.
pub async fn run(args: RunArgs) -> Result<()> {
    let mut config = LoadTestConfig::load(args.config.as_deref())?;
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    let host = Url::parse(&args.host).with_context(|| format!("invalid --host {:?}", args.host))?;
    let config = Arc::new(config);

    info!(
        host = %host,
        users = args.users,
        profile = ?args.profile,
        seed = ?config.seed,
        "starting load test"
    );

    let mut attack = GooseAttack::initialize_with_config(GooseConfiguration::default())?
        .set_default(GooseDefault::Host, host.as_str())?
        .set_default(GooseDefault::Users, args.users)?
        .set_default(GooseDefault::HatchRate, args.hatch_rate.as_str())?
        // Logins happen during ramp-up; resetting would drop their failures.
        .set_default(GooseDefault::NoResetMetrics, true)?;
    if let Some(run_time) = args.run_time {
        attack = attack.set_default(GooseDefault::RunTime, run_time)?;
    }
    if let Some(report_file) = &args.report_file {
        attack = attack.set_default(GooseDefault::ReportFile, report_file.as_str())?;
    }

    scenarios::register(*attack, args.profile, &config)?
        .execute()
        .await?;

    info!("load test finished");
    Ok(())
}

/// Render `args.count` generated payloads as pretty JSON.
pub fn sample(args: &SampleArgs) -> Result<String> {
    let mut factory = AssetFactory::with_optional_seed(args.seed);
    let today = args.date.unwrap_or_else(factory::today);
    let payloads = (0..args.count)
        .map(|_| match args.profile {
            SampleKind::Single => serde_json::to_value(factory.generate_on(today)),
            SampleKind::Bulk => serde_json::to_value(factory.generate_bulk_batch_on(today)),
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(serde_json::to_string_pretty(&payloads)?)
}
