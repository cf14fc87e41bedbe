mod platform;

use std::path::PathBuf;

use clap::Parser;

/// Terminal client for the job board.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Route to open first, e.g. `/jobs` or `/jobs/<id>`.
    #[arg(default_value = "/")]
    route: String,

    /// RON configuration file.
    #[arg(long, default_value = platform::DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Overrides `api_base_url` from the configuration file.
    #[arg(long)]
    base_url: Option<String>,

    /// Where log output goes.
    #[arg(long, value_enum, default_value_t = platform::LogDestination::File)]
    log: platform::LogDestination,

    /// Log file used by `--log file` and `--log both`.
    #[arg(long, default_value = platform::DEFAULT_LOG_FILE)]
    log_file: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    platform::initialize_logging(args.log, &args.log_file);

    let mut config = platform::load_config(&args.config)?;
    if let Some(base_url) = args.base_url {
        config.api_base_url = base_url;
    }

    platform::run_app(config, &args.route)
}
