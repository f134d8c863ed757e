use clap::Parser;

#[derive(Parser)]
#[command(name = "github-stars-watcher")]
#[command(about = "GitHub Stars Watcher - Notifies when a user's total star count rises")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// GitHub username to watch
    #[arg(default_value = "xyproto")]
    pub username: String,

    /// Seconds to sleep between polls
    #[arg(long, env = "POLL_INTERVAL_SECS", default_value_t = 60)]
    pub interval: u64,

    /// Exit on the first failed poll instead of retrying at the next tick
    #[arg(long, env = "FAIL_FAST")]
    pub fail_fast: bool,
}
