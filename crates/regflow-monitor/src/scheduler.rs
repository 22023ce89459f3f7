//! # Scan Scheduler
//!
//! Drives the deadline scan engine on two cadences: a frequent tick for
//! prompt overdue detection and a daily tick as the coarse safety net.
//! Both loops run until a shutdown signal arrives on a watch channel;
//! a scan failure is logged and the loop keeps ticking.

use std::sync::Arc;
use std::time::Duration;

use regflow_core::Timestamp;
use tokio::sync::watch;

use crate::scan::DeadlineScanner;

/// Default frequent-scan cadence.
pub const DEFAULT_FREQUENT_INTERVAL: Duration = Duration::from_secs(60 * 60);

/// Default daily-scan cadence.
pub const DEFAULT_DAILY_INTERVAL: Duration = Duration::from_secs(24 * 60 * 60);

/// Periodic driver for the deadline scan engine.
pub struct ScanScheduler {
    scanner: Arc<DeadlineScanner>,
    frequent: Duration,
    daily: Duration,
}

impl ScanScheduler {
    /// Build a scheduler with the given frequent cadence and the default
    /// daily cadence.
    pub fn new(scanner: Arc<DeadlineScanner>, frequent: Duration) -> Self {
        Self {
            scanner,
            frequent,
            daily: DEFAULT_DAILY_INTERVAL,
        }
    }

    /// Override the daily cadence.
    pub fn with_daily(mut self, daily: Duration) -> Self {
        self.daily = daily;
        self
    }

    /// Run both scan loops until the shutdown channel flips to `true`
    /// (or its sender is dropped).
    pub async fn run(&self, shutdown: watch::Receiver<bool>) {
        let frequent = tokio::spawn(scan_loop(
            self.scanner.clone(),
            self.frequent,
            "frequent",
            shutdown.clone(),
        ));
        let daily = tokio::spawn(scan_loop(
            self.scanner.clone(),
            self.daily,
            "daily",
            shutdown,
        ));
        let _ = frequent.await;
        let _ = daily.await;
        tracing::info!("scan scheduler stopped");
    }
}

async fn scan_loop(
    scanner: Arc<DeadlineScanner>,
    period: Duration,
    label: &'static str,
    mut shutdown: watch::Receiver<bool>,
) {
    let mut interval = tokio::time::interval(period);
    // The first tick fires immediately; consume it so the loop waits a
    // full period before its first scan.
    interval.tick().await;

    loop {
        tokio::select! {
            _ = interval.tick() => {
                match scanner.scan(Timestamp::now()) {
                    Ok(report) => {
                        tracing::debug!(
                            loop_name = label,
                            reminders = report.total(),
                            skipped = report.skipped,
                            "scheduled scan completed"
                        );
                    }
                    Err(e) => {
                        tracing::error!(loop_name = label, error = %e, "scheduled scan failed");
                    }
                }
            }
            changed = shutdown.changed() => {
                match changed {
                    Ok(()) if !*shutdown.borrow() => continue,
                    _ => {
                        tracing::debug!(loop_name = label, "scan loop shutting down");
                        break;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regflow_core::{ActorId, RefNumber};
    use regflow_state::Regulation;
    use regflow_store::{MemoryStore, RegulationStore, ReminderStore};

    fn overdue_doc() -> Regulation {
        let mut reg = Regulation::new(
            ActorId::new(),
            RefNumber::parse("D4100").unwrap(),
            "Overdue filing rules",
            "finance",
            Timestamp::parse("2026-01-01T00:00:00Z").unwrap(),
        );
        reg.deadline = Some(Timestamp::parse("2026-01-10T00:00:00Z").unwrap());
        reg
    }

    #[tokio::test]
    async fn test_scheduler_scans_until_shutdown() {
        let store = Arc::new(MemoryStore::new());
        store.insert(&overdue_doc()).unwrap();

        let scanner = Arc::new(DeadlineScanner::new(store.clone(), store.clone()));
        let scheduler =
            ScanScheduler::new(scanner, Duration::from_millis(20)).with_daily(Duration::from_secs(3600));

        let (tx, rx) = watch::channel(false);
        let handle = tokio::spawn(async move {
            scheduler.run(rx).await;
        });

        tokio::time::sleep(Duration::from_millis(90)).await;
        tx.send(true).unwrap();
        handle.await.unwrap();

        let reminders = ReminderStore::reminders(store.as_ref()).unwrap();
        assert!(!reminders.is_empty(), "frequent loop should have scanned");
    }

    #[tokio::test]
    async fn test_scheduler_stops_when_sender_dropped() {
        let store = Arc::new(MemoryStore::new());
        let scanner = Arc::new(DeadlineScanner::new(store.clone(), store.clone()));
        let scheduler = ScanScheduler::new(scanner, Duration::from_millis(50))
            .with_daily(Duration::from_secs(3600));

        let (tx, rx) = watch::channel(false);
        let handle = tokio::spawn(async move {
            scheduler.run(rx).await;
        });

        drop(tx);
        handle.await.unwrap();
    }
}
