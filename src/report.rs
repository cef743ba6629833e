use crate::error::ProgressError;
use crate::progress::ProgressReport;

const BANNER_WIDTH: usize = 50;
const BAR_WIDTH: usize = 40;

/// Number of filled bar cells for a percentage, floor-rounded and clamped to the bar.
fn filled_cells(percent: f64) -> usize {
    let cells = (BAR_WIDTH as f64 * percent / 100.0).floor();
    if cells <= 0.0 {
        0
    } else {
        (cells as usize).min(BAR_WIDTH)
    }
}

pub fn progress_bar(percent: f64) -> String {
    let filled = filled_cells(percent);
    "█".repeat(filled) + &"░".repeat(BAR_WIDTH - filled)
}

/// Human-readable report: banner, function and byte lines, and a progress bar.
pub fn render_text(report: &ProgressReport) -> String {
    let rule = "=".repeat(BANNER_WIDTH);
    let mut out = String::new();
    out.push('\n');
    out.push_str(&format!("{rule}\n  Decompilation Progress\n{rule}\n\n"));
    out.push_str(&format!(
        "  Functions: {:>5} / {:<5} ({:.1}%)\n",
        report.decompiled_functions, report.total_functions, report.function_percent
    ));
    out.push_str(&format!(
        "  Bytes:     {:>5} / {:<5} ({:.1}%)\n",
        report.decompiled_bytes, report.total_bytes, report.byte_percent
    ));
    out.push('\n');
    out.push_str(&format!(
        "  [{}] {:.1}%\n",
        progress_bar(report.function_percent),
        report.function_percent
    ));
    out.push('\n');
    out
}

/// Machine-readable report, pretty-printed with two-space indentation.
pub fn render_json(report: &ProgressReport) -> Result<String, ProgressError> {
    Ok(serde_json::to_string_pretty(report)?)
}
