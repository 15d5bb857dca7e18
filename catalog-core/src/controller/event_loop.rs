//! src/controller/event_loop.rs
//! ============================================================================
//! # Event loop: background results and housekeeping ticks
//!
//! Terminal input is polled by the application in `main.rs`; this type
//! turns everything else (the catalog fetch result, periodic ticks) into
//! [`Action`]s.

use std::time::Duration;

use tokio::{
    sync::mpsc,
    time::{self, Interval, MissedTickBehavior},
};
use tracing::debug;

use crate::{controller::actions::Action, error::AppError, model::entry::Catalog};

/// Results reported by background tasks.
#[derive(Debug)]
pub enum TaskResult {
    CatalogLoaded {
        result: Result<Catalog, AppError>,
        elapsed: Duration,
    },
}

impl From<TaskResult> for Action {
    fn from(task: TaskResult) -> Self {
        match task {
            TaskResult::CatalogLoaded { result, .. } => Self::CatalogLoaded(result),
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct MetricsSnap {
    pub tasks: u64,
    pub ticks: u64,
}

pub struct EventLoop {
    /// `None` once every sender is gone.
    task_rx: Option<mpsc::UnboundedReceiver<TaskResult>>,
    tick: Interval,
    metrics: MetricsSnap,
}

impl EventLoop {
    pub fn new(task_rx: mpsc::UnboundedReceiver<TaskResult>, tick_rate: Duration) -> Self {
        let mut tick = time::interval(tick_rate.max(Duration::from_millis(10)));
        tick.set_missed_tick_behavior(MissedTickBehavior::Skip);

        Self {
            task_rx: Some(task_rx),
            tick,
            metrics: MetricsSnap::default(),
        }
    }

    /// Wait for the next background result or tick.
    pub async fn next_action(&mut self) -> Action {
        tokio::select! {
            task = Self::recv_task(&mut self.task_rx) => {
                self.metrics.tasks += 1;
                if let TaskResult::CatalogLoaded { elapsed, .. } = &task {
                    debug!("Catalog task result after {}ms", elapsed.as_millis());
                }
                task.into()
            }

            _ = self.tick.tick() => {
                self.metrics.ticks += 1;
                Action::Tick
            }
        }
    }

    async fn recv_task(rx: &mut Option<mpsc::UnboundedReceiver<TaskResult>>) -> TaskResult {
        loop {
            let Some(inner) = rx.as_mut() else {
                return std::future::pending().await;
            };
            if let Some(task) = inner.recv().await {
                return task;
            }
            debug!("Task channel closed");
            *rx = None;
        }
    }

    pub fn snapshot_metrics(&self) -> MetricsSnap {
        self.metrics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_task_result_becomes_action() {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut event_loop = EventLoop::new(rx, Duration::from_secs(3600));

        // first tick of a tokio interval fires immediately
        assert!(matches!(event_loop.next_action().await, Action::Tick));

        tx.send(TaskResult::CatalogLoaded {
            result: Ok(Catalog::default()),
            elapsed: Duration::from_millis(3),
        })
        .unwrap();

        assert!(matches!(
            event_loop.next_action().await,
            Action::CatalogLoaded(Ok(_))
        ));
        assert_eq!(event_loop.snapshot_metrics().tasks, 1);
    }

    #[tokio::test]
    async fn test_closed_channel_still_ticks() {
        let (tx, rx) = mpsc::unbounded_channel::<TaskResult>();
        drop(tx);
        let mut event_loop = EventLoop::new(rx, Duration::from_millis(50));

        for _ in 0..3 {
            assert!(matches!(event_loop.next_action().await, Action::Tick));
        }
        assert_eq!(event_loop.snapshot_metrics().ticks, 3);
        assert_eq!(event_loop.snapshot_metrics().tasks, 0);
    }
}
