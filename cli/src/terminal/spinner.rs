use colored::*;
use indicatif::ProgressStyle;
use netkit_core::sweep::SweepProgress;
use tracing::Span;
use tracing_indicatif::span_ext::IndicatifSpanExt;

use crate::terminal::colors;

const TICKS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

/// Spinner for one-shot queries such as the gateway lookup.
pub fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.blue} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(TICKS)
}

pub fn sweep_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.blue} [{bar:32.green/black}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .tick_strings(TICKS)
        .progress_chars("━╸ ")
}

pub fn start_query(span: &Span, msg: &str) {
    span.pb_set_style(&spinner_style());
    span.pb_set_message(msg);
}

pub fn start_sweep(span: &Span, total: u128) {
    span.pb_set_style(&sweep_style());
    span.pb_set_length(u64::try_from(total).unwrap_or(u64::MAX));
}

pub fn report_sweep_progress(span: &Span, progress: SweepProgress) {
    span.pb_inc(1);
    span.pb_set_message(
        &format!(
            "{} alive so far",
            progress.alive.to_string().green().bold()
        )
        .color(colors::TEXT_DEFAULT)
        .to_string(),
    );
}
