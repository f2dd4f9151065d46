// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gh_omnibox::app::{create_router, AppState};
use gh_omnibox::config::{OmniboxConfig, VERSION};
use gh_omnibox::models::search::SearchResult;
use gh_omnibox::services::logging;
use gh_omnibox::services::omnibox::Omnibox;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

#[derive(Parser)]
#[command(name = "gh-omnibox", version = VERSION, about = "GitHub suggestions for a browser omnibox")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the suggestion API over HTTP
    Serve,
    /// Print suggestions for one input, without debouncing
    Suggest {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Resolve the page to open for an accepted input and record it in history
    Open {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Treat each stdin line as a keystroke and print debounced suggestions
    Interactive,
    /// Remove expired cache entries
    Sweep,
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();

    let cli = Cli::parse();
    let config = OmniboxConfig::from_env()?;
    let omnibox = Arc::new(Omnibox::from_config(&config)?);

    match cli.command {
        Command::Serve => serve(config, omnibox).await,
        Command::Suggest { text } => {
            match omnibox.suggest(&text.join(" ")).await {
                Some(results) => print_results(&results),
                None => println!("(no suggestions)"),
            }
            Ok(())
        }
        Command::Open { text } => {
            println!("{}", omnibox.on_input_entered(&text.join(" ")));
            Ok(())
        }
        Command::Interactive => interactive(omnibox).await,
        Command::Sweep => {
            println!("Removed {} expired cache entries", omnibox.cache().sweep());
            Ok(())
        }
    }
}

async fn serve(config: OmniboxConfig, omnibox: Arc<Omnibox>) -> Result<()> {
    let _sweeper = omnibox.start_maintenance();

    let app = create_router(AppState { omnibox });

    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.listen_addr))?;

    info!(addr = %config.listen_addr, version = VERSION, "gh-omnibox listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Lines starting with `>` are accepted entries; everything else is typed input.
async fn interactive(omnibox: Arc<Omnibox>) -> Result<()> {
    let _sweeper = omnibox.start_maintenance();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        if let Some(entered) = line.strip_prefix('>') {
            println!("-> {}", omnibox.on_input_entered(entered.trim()));
            continue;
        }

        let text = line.clone();
        omnibox.on_input_changed(&line, move |results| {
            println!("[{text}]");
            print_results(&results);
        });
    }

    // Let the last debounced lookup finish before exiting
    tokio::time::sleep(std::time::Duration::from_secs(5)).await;
    Ok(())
}

fn print_results(results: &[SearchResult]) {
    if results.is_empty() {
        println!("(no matches)");
    }
    for result in results {
        println!("{}\n    {}", result.destination_url, result.description_markup);
    }
}
