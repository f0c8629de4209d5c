use chrono::{DateTime, Local};
use leptos::*;

use crate::state::ticker::{Ticker, TICK_INTERVAL_MS};
use crate::utils::{locale, time};

/// Display-ready snapshot of the current wall-clock time, rendered with the
/// es-ES locale convention.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrentTime {
    pub time: String,
    pub date: String,
}

/// Owns the current-timestamp signal. The timestamp is seeded at construction
/// and replaced only by [`ClockSource::tick`]; the display strings are
/// derived on every read, never stored.
#[derive(Clone, Copy)]
pub struct ClockSource {
    now: RwSignal<DateTime<Local>>,
}

impl ClockSource {
    pub fn new() -> Self {
        Self {
            now: create_rw_signal(time::now_local()),
        }
    }

    /// Timer callback: overwrite the stored timestamp with a fresh reading.
    pub fn tick(&self) {
        self.now.set(time::now_local());
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.now.get()
    }

    pub fn read(&self) -> CurrentTime {
        let now = self.now.get();
        CurrentTime {
            time: locale::format_time(&now),
            date: locale::format_date(&now),
        }
    }
}

impl Default for ClockSource {
    fn default() -> Self {
        Self::new()
    }
}

/// Provides the current time as display-ready strings, refreshed once per
/// second.
///
/// We use store_value to keep the Ticker alive. It will be dropped (and its
/// interval cancelled) when the consuming component is unmounted.
pub fn use_current_time() -> Signal<CurrentTime> {
    let source = ClockSource::new();
    let _ticker = store_value(Ticker::every(TICK_INTERVAL_MS, move || source.tick()));

    Signal::derive(move || source.read())
}
