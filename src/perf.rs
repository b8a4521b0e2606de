//! Handler timing instrumentation.
//!
//! Move events arrive for every pointer sample during a drag, so move
//! handlers must stay well under a frame. With the `profiling` feature,
//! [`profile_scope!`] wraps a handler in a [`ScopedTimer`] that warns through
//! `tracing` when the handler overruns its budget. Without the feature the
//! macro compiles to nothing.
//!
//! ```ignore
//! fn pointer_move(&mut self, position: ColumnPoint) -> bool {
//!     profile_scope!("pointer_move", MOVE_HANDLER_BUDGET_MS);
//!     // ...
//! }
//! ```

use std::time::Instant;
use tracing::warn;
#[cfg(feature = "profiling")]
use tracing::trace;

/// Default budget for handlers timed without an explicit threshold
pub const DEFAULT_BUDGET_MS: f64 = 4.0;

/// Time a scope. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $crate::perf::DEFAULT_BUDGET_MS);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

pub use profile_scope;

/// RAII timer for one handler invocation, checked against a budget on drop.
pub struct ScopedTimer {
    handler: &'static str,
    started: Instant,
    budget_ms: f64,
}

impl ScopedTimer {
    pub fn new(handler: &'static str, budget_ms: f64) -> Self {
        Self {
            handler,
            started: Instant::now(),
            budget_ms,
        }
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1000.0
    }

    /// True once the handler has run longer than its budget.
    pub fn exceeded(&self) -> bool {
        self.elapsed_ms() > self.budget_ms
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();
        if elapsed_ms <= self.budget_ms {
            #[cfg(feature = "profiling")]
            trace!(handler = self.handler, elapsed_ms, "Handler timing");
            return;
        }
        warn!(
            handler = self.handler,
            elapsed_ms,
            budget_ms = self.budget_ms,
            "Handler overran its budget"
        );
    }
}
