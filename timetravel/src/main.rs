use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use timetravel::acis::AcisClient;
use timetravel::board;
use timetravel::config::Config;
use timetravel::domain::StopCode;
use timetravel::render::{BoardPrinter, Format};
use timetravel::{Error, web};

#[derive(Parser, Debug)]
#[command(name = "timetravel", version)]
#[command(about = "Live bus arrivals for a stop, in your terminal", long_about = None)]
struct Cli {
    /// NaPTAN code of the stop (8 digits)
    #[arg(short = 'n', long = "naptan", value_name = "CODE", required_unless_present = "api")]
    naptan: Option<String>,

    /// Keep the board on screen, refreshing every 30 seconds
    #[arg(short = 't', long = "realtime", requires = "naptan")]
    realtime: bool,

    /// Refresh interval; accepted but the refresh is fixed at 30 seconds
    #[arg(value_name = "INTERVAL", requires = "naptan")]
    interval: Option<String>,

    /// Start the JSON API server
    #[arg(short = 'a', long = "api", conflicts_with_all = ["naptan", "realtime", "plain"])]
    api: bool,

    /// Print one sentence per bus instead of the table
    #[arg(long)]
    plain: bool,

    /// Disable ANSI colours
    #[arg(long)]
    no_color: bool,
}

fn init_tracing(default_level: LevelFilter) {
    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
}

async fn run(cli: Cli, config: Config) -> Result<(), Error> {
    if cli.api {
        return web::serve(&config).await;
    }

    let stop = StopCode::parse(cli.naptan.as_deref().unwrap_or_default())?;

    if let Some(interval) = &cli.interval {
        debug!(interval = %interval, "interval argument ignored");
    }

    let client = AcisClient::new(&config)?;
    let format = if cli.plain { Format::Plain } else { Format::Table };
    let printer = BoardPrinter::new(format, !cli.no_color);
    let mut out = io::stdout();

    if cli.realtime {
        let Err(err) =
            board::watch(&client, &stop, printer, config.refresh_interval, &mut out).await;
        return Err(err);
    }

    board::show(&client, &stop, printer, &mut out).await
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(if cli.api {
        LevelFilter::INFO
    } else {
        LevelFilter::WARN
    });

    match run(cli, Config::default()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
