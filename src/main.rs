use clap::Parser;
use colored::*;
use github_stars_watcher::cli::Cli;
use github_stars_watcher::error::Result;
use github_stars_watcher::github::GitHubClient;
use github_stars_watcher::watcher::StarWatcher;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    // Initialize tracing with INFO level by default
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    println!("{}", "GitHub Stars Watcher".bold().green());
    println!("{}\n", "=".repeat(50).dimmed());
    println!(
        "👀 Watching {} (polling every {} seconds)",
        cli.username.bold(),
        cli.interval
    );
    println!("\nPress Ctrl+C to stop the watcher\n");

    let client = GitHubClient::new()?;
    let mut watcher = StarWatcher::new(&cli.username);

    let stats = watcher
        .run(&client, Duration::from_secs(cli.interval), cli.fail_fast)
        .await?;

    println!("\n🛑 Stopping watcher...");
    println!("\n📊 Final Statistics:");
    println!("Polls completed: {}", stats.cycles);
    println!("Polls failed: {}", stats.failed_cycles);
    println!("Notifications emitted: {}", stats.notifications);
    if let Some(baseline) = watcher.baseline() {
        println!("Final star count: {}", baseline);
    }
    if let Some(at) = stats.last_increase_at {
        println!("Last increase at: {}", at);
    }

    println!("{}", "✅ Watcher stopped".green());

    Ok(())
}
