//! Execution engine for running nullity operations with a dedicated worker pool.
//!
//! This module sits "above" [`crate::processing`] and provides:
//!
//! - A sized `rayon` pool that per-column aggregates (e.g. [`crate::types::DataSet`] non-null
//!   counts) run on
//! - Observer hooks for logging each run
//! - Cumulative metrics for monitoring

mod observer;

use std::sync::Arc;
use std::time::Instant;

use rayon::{ThreadPool, ThreadPoolBuilder};
use serde::{Deserialize, Serialize};

use crate::error::{NullityError, NullityResult};
use crate::frame::NullityFrame;
use crate::processing::{
    nullity_filter_with, nullity_report, nullity_sort_with, FilterOptions, NullityReport,
    SortOptions,
};

pub use observer::{
    CompositeObserver, EngineMetrics, EngineMetricsSnapshot, NullityEvent, NullityObserver,
    Operation, StdErrObserver, TracingObserver,
};

/// Configuration for the [`NullityEngine`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineOptions {
    /// Number of worker threads used by the engine.
    ///
    /// If `None`, uses the platform's available parallelism.
    pub num_threads: Option<usize>,
}

impl Default for EngineOptions {
    fn default() -> Self {
        let n = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        Self {
            num_threads: Some(n),
        }
    }
}

/// Runs nullity operations on a dedicated pool and reports each run.
pub struct NullityEngine {
    pool: ThreadPool,
    observer: Option<Arc<dyn NullityObserver>>,
    metrics: Arc<EngineMetrics>,
}

impl NullityEngine {
    /// Create a new engine with the given options.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `num_threads == Some(0)`; `ThreadPool` if the pool cannot be built.
    pub fn new(opts: EngineOptions) -> NullityResult<Self> {
        if opts.num_threads == Some(0) {
            return Err(NullityError::invalid_argument(
                "num_threads must be > 0 when set",
            ));
        }

        let n_threads = opts
            .num_threads
            .unwrap_or_else(|| {
                std::thread::available_parallelism()
                    .map(|n| n.get())
                    .unwrap_or(1)
            })
            .max(1);

        let pool = ThreadPoolBuilder::new()
            .num_threads(n_threads)
            .thread_name(|i| format!("nullity-worker-{i}"))
            .build()?;

        Ok(Self {
            pool,
            observer: None,
            metrics: Arc::new(EngineMetrics::new()),
        })
    }

    /// Attach an observer for engine events.
    pub fn with_observer(mut self, observer: Arc<dyn NullityObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Get a handle to the engine's metrics.
    pub fn metrics(&self) -> Arc<EngineMetrics> {
        Arc::clone(&self.metrics)
    }

    /// Sort `frame` by nullity. See [`crate::processing::nullity_sort`].
    pub fn sort<F>(&self, frame: &F, options: &SortOptions) -> NullityResult<F>
    where
        F: NullityFrame + Send + Sync,
    {
        self.run(Operation::Sort, frame, F::column_count, || {
            nullity_sort_with(frame, options)
        })
    }

    /// Filter `frame` by completeness. See [`crate::processing::nullity_filter`].
    pub fn filter<F>(&self, frame: &F, options: &FilterOptions) -> NullityResult<F>
    where
        F: NullityFrame + Send + Sync,
    {
        self.run(Operation::Filter, frame, F::column_count, || {
            nullity_filter_with(frame, options)
        })
    }

    /// Compute per-column nullity statistics. See [`crate::processing::nullity_report`].
    pub fn report<F>(&self, frame: &F) -> NullityResult<NullityReport>
    where
        F: NullityFrame + Send + Sync,
    {
        self.run(
            Operation::Report,
            frame,
            |report: &NullityReport| report.columns.len(),
            || nullity_report(frame),
        )
    }

    fn run<F, T, W>(
        &self,
        operation: Operation,
        frame: &F,
        columns_out: impl Fn(&T) -> usize,
        work: W,
    ) -> NullityResult<T>
    where
        F: NullityFrame,
        T: Send,
        W: FnOnce() -> NullityResult<T> + Send,
    {
        let start = Instant::now();
        let columns_in = frame.column_count();
        self.metrics.begin_run(columns_in);
        self.emit(NullityEvent::RunStarted {
            operation,
            rows: frame.row_count(),
            columns: columns_in,
        });

        match self.pool.install(work) {
            Ok(out) => {
                let columns = columns_out(&out);
                if columns < columns_in {
                    self.emit(NullityEvent::ColumnsDropped {
                        operation,
                        dropped: columns_in - columns,
                    });
                }
                self.metrics.end_run(columns, start.elapsed());
                self.emit(NullityEvent::RunFinished {
                    operation,
                    elapsed: start.elapsed(),
                    metrics: self.metrics.snapshot(),
                });
                Ok(out)
            }
            Err(e) => {
                self.metrics.fail_run();
                self.emit(NullityEvent::RunFailed {
                    operation,
                    message: e.to_string(),
                });
                Err(e)
            }
        }
    }

    fn emit(&self, event: NullityEvent) {
        if let Some(obs) = &self.observer {
            obs.on_event(&event);
        }
    }
}
