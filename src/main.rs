use clap::Parser;
use sitechat::config::{ChatConfig, SessionConfig};
use sitechat::{Responder, Site};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

mod args;
use args::Args;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    // Configuration file when given, otherwise defaults plus environment
    let mut config = match &args.config {
        Some(path) => match SessionConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                ::log::error!("Failed to load config {}: {}", path.display(), e);
                println!("Could not read configuration file: {}", e);
                return;
            }
        },
        None => SessionConfig {
            chat: ChatConfig::from_env(),
            ..SessionConfig::default()
        },
    };

    // Command-line flags take precedence
    if let Some(chunk_size) = args.chunk_size {
        config.scraper.chunk_size = chunk_size;
    }
    if let Some(timeout) = args.fetch_timeout {
        config.scraper.fetch_timeout_secs = timeout;
    }
    if let Some(model) = &args.model {
        config.chat.model = model.clone();
    }
    // The credential may still come from the environment with a file config
    if config.chat.api_key.is_empty() {
        config.chat.api_key = ChatConfig::from_env().api_key;
    }

    println!("Welcome to sitechat! Ask questions about a single web page.");
    println!("Type 'exit' at any time to end the session.\n");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    let url = match args.url {
        Some(url) => url,
        None => match prompt_line(&mut lines, "Enter the website URL to fetch information from: ")
            .await
        {
            Some(line) if !line.trim().is_empty() => line.trim().to_string(),
            _ => {
                println!("No URL given, nothing to do.");
                return;
            }
        },
    };

    ::log::info!("Starting session for URL: {}", url);
    println!("Fetching and processing the website content...\n");

    let record = match Site::new(&url).with_config(config.scraper.clone()).scrape().await {
        Ok(record) => record,
        Err(e) => {
            // A record that failed to build ends the session before any queries
            ::log::error!("Scrape failed: {}", e);
            println!("Failed to fetch {}: {}", url, e);
            return;
        }
    };

    println!("Website content fetched successfully! You can now ask questions.");

    let responder = match Responder::new(config.chat) {
        Ok(responder) => responder,
        Err(e) => {
            ::log::error!("Failed to build completion client: {}", e);
            println!("Could not set up the completion client: {}", e);
            return;
        }
    };

    // Query loop: each question is answered independently against the
    // same record until 'exit' or end of input
    loop {
        let Some(line) = prompt_line(&mut lines, "\nYou: ").await else {
            break;
        };
        let query = line.trim();

        if query.is_empty() {
            continue;
        }
        if query.eq_ignore_ascii_case("exit") {
            println!("It was great chatting with you. Goodbye!");
            break;
        }

        ::log::debug!("Answering query: {}", query);
        let answer = responder.answer(&record, query).await;
        println!("\nBot: {}", answer);
    }
}

/// Print a prompt and read one line from stdin; None at end of input
async fn prompt_line(lines: &mut Lines<BufReader<Stdin>>, prompt: &str) -> Option<String> {
    print!("{}", prompt);
    let _ = std::io::stdout().flush();
    lines.next_line().await.ok().flatten()
}
