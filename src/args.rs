use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sitechat")]
#[command(about = "Scrapes one web page and answers questions about its content")]
#[command(version)]
pub struct Args {
    /// Website URL to scrape (prompted for when omitted)
    pub url: Option<String>,

    /// Number of words per extracted text chunk
    #[arg(long)]
    pub chunk_size: Option<usize>,

    /// Page fetch timeout in seconds
    #[arg(long)]
    pub fetch_timeout: Option<u64>,

    /// Completion model to use
    #[arg(short, long)]
    pub model: Option<String>,

    /// Path to a JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
