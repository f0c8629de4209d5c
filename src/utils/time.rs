use chrono::{DateTime, Local};

/// One reading of the host wall clock, in the host's local time zone.
pub fn now_local() -> DateTime<Local> {
    Local::now()
}
