//! Process-wide logging state shared between the hot logging path and the
//! control handler
//!
//! The hot path reads the stderr threshold and verbosity through lock-free
//! atomics at arbitrary frequency; control writes go through short
//! `parking_lot` critical sections that the readers never take. The state is
//! created once at startup and injected explicitly wherever it is needed, so
//! tests can build isolated instances.

use crate::severity::Severity;
use parking_lot::RwLock;
use std::sync::Arc;
use std::sync::atomic::{AtomicI32, AtomicU8, Ordering};

/// Opaque per-module verbosity override owned by the surrounding logging
/// engine. The control plane never inspects it; it only re-applies the
/// currently active value when verbosity changes, so a verbosity-only update
/// cannot clear an active override.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModuleFilter(Option<Arc<str>>);

impl ModuleFilter {
    /// Wrap a raw filter specification handed over by the logging engine.
    pub fn new(spec: impl Into<Arc<str>>) -> Self {
        Self(Some(spec.into()))
    }

    /// Filter with no per-module overrides.
    pub fn none() -> Self {
        Self(None)
    }
}

/// Verbosity level and module filter, updated as one unit.
#[derive(Debug)]
struct VState {
    verbosity: i32,
    filter: ModuleFilter,
}

/// Shared mutable logging settings.
///
/// `stderr_threshold` and `verbosity` are single-word atomics so the logging
/// hot path never observes a torn value and never blocks on a control
/// request. The verbosity/filter pair additionally lives behind an `RwLock`
/// so the two always change together; the atomic mirror is stored inside
/// that critical section.
#[derive(Debug)]
pub struct LogState {
    stderr_threshold: AtomicU8,
    verbosity: AtomicI32,
    vstate: RwLock<VState>,
}

impl Default for LogState {
    fn default() -> Self {
        Self::new(Severity::Error, 0, ModuleFilter::none())
    }
}

impl LogState {
    /// Create state with the given initial settings.
    #[must_use]
    pub fn new(threshold: Severity, verbosity: i32, filter: ModuleFilter) -> Self {
        Self {
            stderr_threshold: AtomicU8::new(threshold.to_bits()),
            verbosity: AtomicI32::new(verbosity),
            vstate: RwLock::new(VState { verbosity, filter }),
        }
    }

    /// Current stderr mirroring threshold. Lock-free; safe to call from the
    /// hot path under unbounded concurrency.
    pub fn stderr_threshold(&self) -> Severity {
        // Only to_bits values are ever stored, so the reverse lookup is total here.
        Severity::from_bits(self.stderr_threshold.load(Ordering::Relaxed))
            .unwrap_or(Severity::Error)
    }

    /// Atomically replace the stderr threshold. Last writer wins.
    pub fn set_stderr_threshold(&self, threshold: Severity) {
        self.stderr_threshold
            .store(threshold.to_bits(), Ordering::Relaxed);
    }

    /// Current global verbosity. Lock-free.
    pub fn verbosity(&self) -> i32 {
        self.verbosity.load(Ordering::Relaxed)
    }

    /// Whether a diagnostic call at `level` is enabled. Hot-path accessor.
    pub fn v_enabled(&self, level: i32) -> bool {
        level <= self.verbosity()
    }

    /// Currently active module filter.
    pub fn module_filter(&self) -> ModuleFilter {
        self.vstate.read().filter.clone()
    }

    /// Consistent verbosity/filter pair as of a single point in time.
    pub fn vstate(&self) -> (i32, ModuleFilter) {
        let guard = self.vstate.read();
        (guard.verbosity, guard.filter.clone())
    }

    /// Install a new verbosity level together with a module filter as one
    /// logical update. The atomic mirror is stored while the write lock is
    /// held so a paired read never sees a level without its filter.
    pub fn set_vstate(&self, verbosity: i32, filter: ModuleFilter) {
        let mut guard = self.vstate.write();
        guard.verbosity = verbosity;
        guard.filter = filter;
        self.verbosity.store(verbosity, Ordering::Relaxed);
    }
}
