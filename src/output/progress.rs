use indicatif::{ProgressState, ProgressStyle};

/// Progress style for status reports: one tick per probed host.
pub fn get_progress_style() -> ProgressStyle {
    match ProgressStyle::default_bar()
        .template("{spinner:.green} {msg} [{elapsed_ms}] [{bar:30.green/white}] {pos}/{len} hosts")
    {
        Ok(style) => style
            .with_key("elapsed_ms", elapsed_ms)
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "✓"])
            .progress_chars("=>-"),
        Err(_) => ProgressStyle::default_bar(),
    }
}

/// Elapsed time as MM:SS.mmm
fn elapsed_ms(state: &ProgressState, writer: &mut dyn std::fmt::Write) {
    let elapsed = state.elapsed();
    let secs = elapsed.as_secs();
    let _ = write!(writer, "{:02}:{:02}.{:03}", secs / 60, secs % 60, elapsed.subsec_millis());
}
