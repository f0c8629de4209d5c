use std::sync::atomic::{AtomicUsize, Ordering};

/// Refresh cadence of the clock, one tick per second.
pub const TICK_INTERVAL_MS: u32 = 1_000;

static ACTIVE_TICKERS: AtomicUsize = AtomicUsize::new(0);

struct ActiveGuard;

impl ActiveGuard {
    fn acquire() -> Self {
        ACTIVE_TICKERS.fetch_add(1, Ordering::SeqCst);
        ActiveGuard
    }
}

impl Drop for ActiveGuard {
    fn drop(&mut self) {
        ACTIVE_TICKERS.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Repeating timer handle. Dropping it cancels the underlying interval, so
/// the callback can never fire after its owner is gone.
#[cfg(target_arch = "wasm32")]
pub struct Ticker {
    _interval: gloo_timers::callback::Interval,
    _guard: ActiveGuard,
}

#[cfg(target_arch = "wasm32")]
impl Ticker {
    pub fn every(period_ms: u32, callback: impl FnMut() + 'static) -> Self {
        Self {
            _interval: gloo_timers::callback::Interval::new(period_ms, callback),
            _guard: ActiveGuard::acquire(),
        }
    }
}

/// Off-wasm (SSR and unit tests) there is no event loop to schedule against;
/// the ticker holds its callback and fires only when driven through `fire`.
#[cfg(not(target_arch = "wasm32"))]
pub struct Ticker {
    callback: Box<dyn FnMut()>,
    period_ms: u32,
    _guard: ActiveGuard,
}

#[cfg(not(target_arch = "wasm32"))]
impl Ticker {
    pub fn every(period_ms: u32, callback: impl FnMut() + 'static) -> Self {
        Self {
            callback: Box::new(callback),
            period_ms,
            _guard: ActiveGuard::acquire(),
        }
    }

    /// Simulate one firing of the interval.
    pub fn fire(&mut self) {
        (self.callback)();
    }

    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }
}

impl Ticker {
    /// Number of tickers currently live, across all owners.
    pub fn active_count() -> usize {
        ACTIVE_TICKERS.load(Ordering::SeqCst)
    }
}

// Tests that assert on the live-ticker count serialize through this lock so
// counts from concurrently running tests cannot interleave.
#[cfg(all(test, not(target_arch = "wasm32")))]
pub(crate) fn serial_lock() -> std::sync::MutexGuard<'static, ()> {
    use std::sync::{Mutex, OnceLock};
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}
