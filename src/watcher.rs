use crate::error::Result;
use crate::github::GitHubClient;
use crate::types::GitHubRepo;
use chrono::{DateTime, Utc};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, warn};

/// Total star count across a repository listing.
pub fn total_stars(repos: &[GitHubRepo]) -> u64 {
    repos
        .iter()
        .map(|repo| u64::from(repo.stargazers_count))
        .sum()
}

/// Result of comparing one observed total against the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observation {
    /// First successful poll; the baseline is now armed.
    Baseline(u64),
    /// The total did not rise above the baseline.
    Unchanged,
    /// The total rose above the baseline.
    Increased { from: u64, to: u64 },
}

/// Run statistics reported when the watcher shuts down.
#[derive(Debug, Clone)]
pub struct WatchStats {
    pub cycles: u64,
    pub failed_cycles: u64,
    pub notifications: u64,
    pub started_at: DateTime<Utc>,
    pub last_increase_at: Option<DateTime<Utc>>,
}

/// Polls a user's total star count and notifies on increases.
///
/// Owns all mutable state of the loop: the watched username, the baseline
/// high-water mark, and the run statistics.
pub struct StarWatcher {
    username: String,
    baseline: Option<u64>,
    stats: WatchStats,
}

impl StarWatcher {
    pub fn new(username: impl Into<String>) -> Self {
        StarWatcher {
            username: username.into(),
            baseline: None,
            stats: WatchStats {
                cycles: 0,
                failed_cycles: 0,
                notifications: 0,
                started_at: Utc::now(),
                last_increase_at: None,
            },
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Highest total observed so far, `None` before the first successful poll.
    pub fn baseline(&self) -> Option<u64> {
        self.baseline
    }

    pub fn stats(&self) -> &WatchStats {
        &self.stats
    }

    /// Feed one observed total into the comparison.
    ///
    /// The first observation arms the baseline without notifying, whatever
    /// its value. Afterwards only a strictly greater total raises it; equal
    /// or lower totals (a repository made private or deleted) are absorbed,
    /// so the baseline always equals the maximum observed in this run.
    pub fn observe(&mut self, total: u64) -> Observation {
        match self.baseline {
            None => {
                self.baseline = Some(total);
                Observation::Baseline(total)
            }
            Some(baseline) if total > baseline => {
                self.baseline = Some(total);
                Observation::Increased {
                    from: baseline,
                    to: total,
                }
            }
            Some(_) => Observation::Unchanged,
        }
    }

    /// One full poll cycle: fetch, aggregate, compare, notify.
    pub async fn run_cycle(&mut self, client: &GitHubClient) -> Result<Observation> {
        let repos = client.list_user_repos(&self.username).await?;
        let total = total_stars(&repos);

        info!(repos = repos.len(), total_stars = total, "Poll complete");

        let observation = self.observe(total);
        self.stats.cycles += 1;

        match observation {
            Observation::Baseline(total) => {
                info!(baseline = total, "Baseline armed");
            }
            Observation::Increased { from, to } => {
                println!("STAR!");
                info!(from, to, "Star count increased");
                self.stats.notifications += 1;
                self.stats.last_increase_at = Some(Utc::now());
            }
            Observation::Unchanged => {}
        }

        Ok(observation)
    }

    /// Poll until interrupted, sleeping `interval` between cycle completions
    /// so cycles never overlap.
    ///
    /// A recoverable cycle failure is logged and retried at the next tick; a
    /// fatal one (or any failure with `fail_fast`) propagates out. Returns
    /// the run statistics once Ctrl-C is received.
    pub async fn run(
        &mut self,
        client: &GitHubClient,
        interval: Duration,
        fail_fast: bool,
    ) -> Result<WatchStats> {
        loop {
            match self.run_cycle(client).await {
                Ok(_) => {}
                Err(e) if fail_fast || e.is_fatal() => return Err(e),
                Err(e) => {
                    self.stats.failed_cycles += 1;
                    warn!("Poll failed, retrying at next tick: {}", e);
                }
            }

            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    info!("Shutdown signal received");
                    return Ok(self.stats.clone());
                }
                _ = sleep(interval) => {}
            }
        }
    }
}
