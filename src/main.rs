use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tictac_rewind::{args::Args, ui::run_ui};

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to a file: stdout belongs to the terminal UI.
    let file_appender = tracing_appender::rolling::daily(&args.log_dir, "tictac-rewind.log");
    let (writer, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(writer)
        .with_ansi(false)
        .init();

    info!("tictac-rewind starting");

    run_ui(&args)
}
