//! Plain-text collision report

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

pub const REPORT_HEADER: &str = "Collision report:";
pub const NO_COLLISIONS: &str = "No collisions during the simulation.";

/// Report text: a header plus one line per collision, or the no-collision line
pub fn format_collision_report<S: AsRef<str>>(lines: &[S]) -> String {
    if lines.is_empty() {
        return format!("{NO_COLLISIONS}\n");
    }

    let mut out = String::from(REPORT_HEADER);
    out.push('\n');
    for line in lines {
        out.push_str(line.as_ref());
        out.push('\n');
    }
    out
}

pub fn write_collision_report<S: AsRef<str>>(path: impl AsRef<Path>, lines: &[S]) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, format_collision_report(lines))
        .with_context(|| format!("failed to write collision report to {}", path.display()))
}
