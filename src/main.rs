use clap::Parser;
use std::process::ExitCode;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use vidscout::download::Downloader;
use vidscout::select::parse_selection;
use vidscout::{Discoverer, Discovery, ScraperConfig, Transport};

mod args;
use args::Args;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    let Some(target) = args.target().map(str::to_string) else {
        println!("Please provide a URL as an argument or with the --url, -u, or -i flag.");
        return ExitCode::FAILURE;
    };

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            ::log::error!("Invalid configuration: {}", e);
            println!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    ::log::debug!("Using configuration: {:?}", config);

    let transport = match Transport::from_config(&config) {
        Ok(transport) => transport,
        Err(e) => {
            ::log::error!("Failed to set up transport: {}", e);
            println!("Scraping error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let discoverer = Discoverer::new(transport).with_config(&config);

    let discovery = match discoverer.discover(&target).await {
        Ok(discovery) => discovery,
        Err(e) => {
            ::log::error!("Discovery failed: {}", e);
            println!("Scraping error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if args.json {
        return print_json(&discovery);
    }

    if discovery.is_empty() {
        println!("No video links found.");
        return ExitCode::SUCCESS;
    }

    println!("\nFound video links:");
    for (i, link) in discovery.videos.iter().enumerate() {
        println!("{}: {}", i + 1, link);
    }

    if args.list {
        return ExitCode::SUCCESS;
    }

    let input = match &args.select {
        Some(select) => select.clone(),
        None => match prompt_selection().await {
            Ok(input) => input,
            Err(e) => {
                println!("Could not read selection: {}", e);
                return ExitCode::FAILURE;
            }
        },
    };

    let selection = parse_selection(&input, discovery.len());
    for token in &selection.rejected {
        println!("Invalid selection: {}", token);
    }

    let downloader = match Downloader::new(&config) {
        Ok(downloader) => downloader,
        Err(e) => {
            println!("Download error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let identity = discovery
        .identity
        .as_deref()
        .and_then(|name| discoverer.identity(name));

    for index in selection.indices {
        let link = &discovery.videos[index];
        println!("Downloading: {}", link);
        match downloader.download(link, identity).await {
            Ok(path) => println!("Downloaded to {}", path.display()),
            Err(e) => {
                ::log::warn!("Download of {} failed: {}", link, e);
                println!("Download error: {}", e);
            }
        }
    }

    ExitCode::SUCCESS
}

/// Config file (if any), then environment, then command-line flags
fn load_config(args: &Args) -> Result<ScraperConfig, Box<dyn std::error::Error>> {
    let config = match &args.config {
        Some(path) => ScraperConfig::from_file(path)?,
        None => ScraperConfig::default(),
    };
    let config = args.apply_to(config.with_env_overrides());
    config.validate()?;
    Ok(config)
}

fn print_json(discovery: &Discovery) -> ExitCode {
    match serde_json::to_string_pretty(discovery) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            ::log::error!("Failed to serialize discovery: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn prompt_selection() -> std::io::Result<String> {
    let mut stdout = tokio::io::stdout();
    stdout
        .write_all(b"\nEnter the number(s) of the video(s) to download (comma separated): ")
        .await?;
    stdout.flush().await?;

    let mut input = String::new();
    BufReader::new(tokio::io::stdin())
        .read_line(&mut input)
        .await?;
    Ok(input.trim().to_string())
}
