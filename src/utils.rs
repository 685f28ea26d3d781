//! Reporting helpers for search results.

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

use crate::instance::Instance;
use crate::solution::SolveResult;

/// Format a duration as hours, minutes, and seconds.
pub fn format_duration(duration: Duration) -> String {
    let total_seconds = duration.as_secs();
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}h {:02}m {:02}s", hours, minutes, seconds)
}

/// Write a plain-text report of the collected results.
pub fn save_results<P: AsRef<Path>>(
    results: &[SolveResult],
    instance: &Instance,
    path: P,
) -> std::io::Result<()> {
    let mut file = File::create(path)?;

    writeln!(file, "Results for instance: {}", instance.name())?;
    writeln!(file, "Size: {}", instance.size())?;
    writeln!(file)?;

    for (i, result) in results.iter().enumerate() {
        writeln!(file, "Run #{} [{}]", i + 1, result.algorithm)?;
        writeln!(file, "  Iterations: {}", result.iterations)?;
        writeln!(file, "  Elapsed: {}", format_duration(result.elapsed))?;
        writeln!(file, "  Length: {:.2}", result.length)?;
        writeln!(file, "  Path: {}", result.tour)?;
        writeln!(file)?;
    }

    Ok(())
}
