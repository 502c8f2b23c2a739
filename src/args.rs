use clap::Parser;

#[derive(Parser)]
pub struct Args {
    /// Show the move history newest-first
    #[arg(long)]
    pub descending: bool,

    /// Directory for log files
    #[arg(long, default_value = "logs")]
    pub log_dir: String,
}
