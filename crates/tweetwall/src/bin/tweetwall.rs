//! TweetWall - presents a live tweet stream as a looping sequence of steps.
//!
//! Live tweets are read from stdin as JSON lines. The historical query that
//! seeds the wall is answered from an optional JSON file.

use clap::Parser;
use std::io::BufRead;
use std::path::PathBuf;
use tracing::{error, info, warn};
use tweetwall::{
    InMemoryTweetSource, JsonFileSource, ObservabilityConfig, TweetSource, TweetWall,
    TweetwallConfig, init_observability_with_config, parse_live_line,
};
use tweetwall_error::{SourceError, SourceErrorKind};

/// Command-line arguments for the wall.
#[derive(Parser, Debug)]
#[command(name = "tweetwall")]
#[command(about = "TweetWall - live tweet stream presentation")]
#[command(version)]
struct Args {
    /// Path to wall configuration file
    #[arg(short, long, default_value = "tweetwall.toml", env = "TWEETWALL_CONFIG")]
    config: PathBuf,

    /// JSON array of tweets answering the historical query
    #[arg(long)]
    history: Option<PathBuf>,

    /// Validate configuration and exit
    #[arg(long)]
    dry_run: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    init_observability_with_config(ObservabilityConfig::default().with_json_logs(args.log_json))?;

    info!("Starting TweetWall");
    info!(config_file = ?args.config, "Loading configuration");
    let config = TweetwallConfig::from_file(&args.config)?;

    let source: Box<dyn TweetSource> = match &args.history {
        Some(path) => Box::new(JsonFileSource::load(path)?),
        None => {
            warn!("No history file given, starting with an empty wall");
            Box::new(InMemoryTweetSource::default())
        }
    };

    let wall = TweetWall::build(config, source.as_ref()).await?;

    if args.dry_run {
        info!("DRY RUN MODE - wall not started");
        for (index, step) in wall.step_names().iter().enumerate() {
            info!(index, step = %step, "Step configured");
        }
        info!(providers = ?wall.providers().kinds(), "Configuration validation complete");
        return Ok(());
    }

    let stop = wall.stop_handle();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => error!(error = %e, "Failed to listen for Ctrl+C, shutting down"),
        }
        stop.stop();
    });

    // Plain thread: a pending stdin read must not hold up runtime shutdown
    let feed = wall.feed();
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    let err = SourceError::new(SourceErrorKind::Disconnected(e.to_string()));
                    error!(error = %err, "Live stream lost");
                    return;
                }
            };

            match parse_live_line(&line) {
                Ok(Some(tweet)) => {
                    if feed.blocking_send(tweet).is_err() {
                        return;
                    }
                }
                Ok(None) => {}
                Err(e) => warn!(error = %e, "Skipping live line"),
            }
        }
        info!("Live stream ended");
    });

    let summary = wall.run().await?;
    info!(
        windows = summary.run.windows,
        cycles = summary.run.cycles,
        received = summary.pump.received,
        failed = summary.pump.failed,
        "TweetWall stopped"
    );

    Ok(())
}
