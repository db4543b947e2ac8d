use chrono::Local;
use std::fmt;
use tracing_subscriber::fmt::time::FormatTime;

/// Time format for logging that only includes the time (HH:MM:SS.mmmmmm+00:00)
pub struct LocalTimeOnly;

impl FormatTime for LocalTimeOnly {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        write!(w, "{}", Local::now().format("%H:%M:%S%.6f%:z"))
    }
}
