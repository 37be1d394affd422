use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Operation an engine run performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Sort,
    Filter,
    Report,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sort => f.write_str("sort"),
            Self::Filter => f.write_str("filter"),
            Self::Report => f.write_str("report"),
        }
    }
}

/// Events emitted by the [`super::NullityEngine`].
#[derive(Debug, Clone)]
pub enum NullityEvent {
    RunStarted {
        operation: Operation,
        rows: usize,
        columns: usize,
    },
    ColumnsDropped {
        operation: Operation,
        dropped: usize,
    },
    RunFinished {
        operation: Operation,
        elapsed: Duration,
        metrics: EngineMetricsSnapshot,
    },
    RunFailed {
        operation: Operation,
        message: String,
    },
}

/// Observer hook for engine events.
pub trait NullityObserver: Send + Sync {
    fn on_event(&self, event: &NullityEvent);
}

/// A simple stderr logger for engine events.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl StdErrObserver {
    /// The line written to stderr for `event`.
    pub fn format_event(event: &NullityEvent) -> String {
        match event {
            NullityEvent::RunFailed { operation, message } => {
                format!("[nullity][{operation}][failed] {message}")
            }
            NullityEvent::ColumnsDropped { operation, dropped } => {
                format!("[nullity][{operation}] dropped {dropped} column(s)")
            }
            other => format!("[nullity] {other:?}"),
        }
    }
}

impl NullityObserver for StdErrObserver {
    fn on_event(&self, event: &NullityEvent) {
        eprintln!("{}", Self::format_event(event));
    }
}

/// Forwards engine events to `tracing`.
///
/// Failures are logged at `warn`, everything else at `debug`. No subscriber is installed.
#[derive(Debug, Default)]
pub struct TracingObserver;

impl NullityObserver for TracingObserver {
    fn on_event(&self, event: &NullityEvent) {
        match event {
            NullityEvent::RunStarted {
                operation,
                rows,
                columns,
            } => tracing::debug!(%operation, rows, columns, "nullity run started"),
            NullityEvent::ColumnsDropped { operation, dropped } => {
                tracing::debug!(%operation, dropped, "nullity run dropped columns")
            }
            NullityEvent::RunFinished {
                operation,
                elapsed,
                metrics,
            } => tracing::debug!(%operation, ?elapsed, %metrics, "nullity run finished"),
            NullityEvent::RunFailed { operation, message } => {
                tracing::warn!(%operation, error = %message, "nullity run failed")
            }
        }
    }
}

/// An observer that fans out events to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn NullityObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn NullityObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl NullityObserver for CompositeObserver {
    fn on_event(&self, event: &NullityEvent) {
        for o in &self.observers {
            o.on_event(event);
        }
    }
}

/// Cumulative counters across every run of one engine.
///
/// Callers can snapshot them at any time.
pub struct EngineMetrics {
    runs_started: AtomicU64,
    runs_finished: AtomicU64,
    runs_failed: AtomicU64,
    columns_in: AtomicU64,
    columns_out: AtomicU64,
    last_elapsed_ns: AtomicU64,
}

impl EngineMetrics {
    pub fn new() -> Self {
        Self {
            runs_started: AtomicU64::new(0),
            runs_finished: AtomicU64::new(0),
            runs_failed: AtomicU64::new(0),
            columns_in: AtomicU64::new(0),
            columns_out: AtomicU64::new(0),
            last_elapsed_ns: AtomicU64::new(0),
        }
    }

    pub fn begin_run(&self, columns_in: usize) {
        let _ = self.runs_started.fetch_add(1, Ordering::SeqCst);
        let _ = self.columns_in.fetch_add(columns_in as u64, Ordering::SeqCst);
    }

    pub fn end_run(&self, columns_out: usize, elapsed: Duration) {
        let _ = self.runs_finished.fetch_add(1, Ordering::SeqCst);
        let _ = self.columns_out.fetch_add(columns_out as u64, Ordering::SeqCst);
        self.last_elapsed_ns
            .store(elapsed.as_nanos().min(u64::MAX as u128) as u64, Ordering::SeqCst);
    }

    pub fn fail_run(&self) {
        let _ = self.runs_failed.fetch_add(1, Ordering::SeqCst);
    }

    pub fn snapshot(&self) -> EngineMetricsSnapshot {
        let elapsed_ns = self.last_elapsed_ns.load(Ordering::SeqCst);
        EngineMetricsSnapshot {
            runs_started: self.runs_started.load(Ordering::SeqCst),
            runs_finished: self.runs_finished.load(Ordering::SeqCst),
            runs_failed: self.runs_failed.load(Ordering::SeqCst),
            columns_in: self.columns_in.load(Ordering::SeqCst),
            columns_out: self.columns_out.load(Ordering::SeqCst),
            last_elapsed: (elapsed_ns > 0).then(|| Duration::from_nanos(elapsed_ns)),
        }
    }
}

impl Default for EngineMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable snapshot of [`EngineMetrics`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineMetricsSnapshot {
    pub runs_started: u64,
    pub runs_finished: u64,
    pub runs_failed: u64,
    pub columns_in: u64,
    pub columns_out: u64,
    pub last_elapsed: Option<Duration>,
}

impl fmt::Display for EngineMetricsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "runs={}/{}, failed={}, columns_in={}, columns_out={}, last_elapsed={:?}",
            self.runs_finished,
            self.runs_started,
            self.runs_failed,
            self.columns_in,
            self.columns_out,
            self.last_elapsed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{NullityEvent, Operation, StdErrObserver};

    #[test]
    fn stderr_lines_name_the_operation() {
        let failed = NullityEvent::RunFailed {
            operation: Operation::Filter,
            message: "invalid argument: p".to_string(),
        };
        assert_eq!(
            StdErrObserver::format_event(&failed),
            "[nullity][filter][failed] invalid argument: p"
        );

        let dropped = NullityEvent::ColumnsDropped {
            operation: Operation::Filter,
            dropped: 2,
        };
        assert_eq!(
            StdErrObserver::format_event(&dropped),
            "[nullity][filter] dropped 2 column(s)"
        );

        let started = NullityEvent::RunStarted {
            operation: Operation::Sort,
            rows: 3,
            columns: 4,
        };
        assert!(StdErrObserver::format_event(&started).starts_with("[nullity] RunStarted"));
    }
}
