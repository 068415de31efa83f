//! Plain-text rendering of simulation results.
//!
//! The engine only produces values; this module turns them into the
//! tables, metric lines and comparison bar charts shown to users.

use std::fmt;

use crate::history::ComparisonEntry;
use crate::models::{ProcessSnapshot, SimulationResult};
use crate::scheduler::ScheduleMetrics;

const HEADERS: [&str; 6] = [
    "Process ID",
    "Arrival Time",
    "Burst Time",
    "Completion Time",
    "Waiting Time",
    "Turnaround Time",
];

const BAR_WIDTH: usize = 40;

fn row(s: &ProcessSnapshot) -> [String; 6] {
    [
        s.id.to_string(),
        s.arrival_time.to_string(),
        s.burst_time.to_string(),
        s.completion_time.to_string(),
        s.waiting_time.to_string(),
        s.turnaround_time.to_string(),
    ]
}

/// Renders the snapshot table with right-aligned columns.
pub fn render_table(result: &SimulationResult) -> String {
    let rows: Vec<[String; 6]> = result.snapshots.iter().map(row).collect();

    let mut widths = HEADERS.map(str::len);
    for r in &rows {
        for (w, cell) in widths.iter_mut().zip(r) {
            *w = (*w).max(cell.len());
        }
    }

    let mut out = String::new();
    push_line(&mut out, HEADERS.iter().copied(), &widths);
    for r in &rows {
        push_line(&mut out, r.iter().map(String::as_str), &widths);
    }
    out
}

fn push_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line = cells
        .zip(widths)
        .map(|(cell, &w)| format!("{cell:>w$}"))
        .collect::<Vec<_>>()
        .join(" ");
    out.push_str(&line);
    out.push('\n');
}

/// Renders the metrics line with two decimals.
pub fn render_metrics(metrics: &ScheduleMetrics) -> String {
    format!(
        "CPU Utilization = {:.2}%, Average Waiting Time = {:.2}, Average Turnaround Time = {:.2}",
        metrics.cpu_utilization, metrics.avg_waiting_time, metrics.avg_turnaround_time
    )
}

/// Renders a horizontal bar chart of average waiting and turnaround times.
///
/// Bars are scaled so the largest value fills 1/1.1 of the bar width.
pub fn render_comparison(entries: &[ComparisonEntry]) -> String {
    if entries.is_empty() {
        return "No runs recorded.\n".to_string();
    }

    let max_value = entries
        .iter()
        .flat_map(|e| [e.avg_waiting_time, e.avg_turnaround_time])
        .fold(0.0_f64, f64::max);
    let scale = if max_value > 0.0 {
        BAR_WIDTH as f64 / (max_value * 1.1)
    } else {
        0.0
    };
    let label_width = entries.iter().map(|e| e.label.len()).max().unwrap_or(0);

    let bar = |value: f64| -> String {
        let len = ((value.max(0.0) * scale).round() as usize).min(BAR_WIDTH);
        format!("{:<width$}", "#".repeat(len), width = BAR_WIDTH)
    };

    let mut out = String::from("Comparison of Average Waiting Time and Turnaround Time\n");
    for e in entries {
        out.push_str(&format!(
            "{:<label_width$}  waiting    |{}| {:.2}\n",
            e.label,
            bar(e.avg_waiting_time),
            e.avg_waiting_time
        ));
        out.push_str(&format!(
            "{:<label_width$}  turnaround |{}| {:.2}\n",
            "",
            bar(e.avg_turnaround_time),
            e.avg_turnaround_time
        ));
    }
    out
}

impl fmt::Display for SimulationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\nMetrics: {}",
            render_table(self),
            render_metrics(&self.metrics)
        )
    }
}
