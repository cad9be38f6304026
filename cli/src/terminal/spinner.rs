use std::sync::Arc;

use asnmap_core::batch::ProgressCallback;
use indicatif::ProgressStyle;
use tracing::{Span, info_span};
use tracing_indicatif::span_ext::IndicatifSpanExt;

const TICK_STRINGS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

/// Span that carries the progress bar for one batch run.
pub fn lookup_span(total: usize) -> Span {
    let span = info_span!("lookup", indicatif.pb_show = true);
    span.pb_set_style(&progress_style());
    span.pb_set_length(total as u64);
    span.pb_set_message("Querying registries");
    span
}

pub fn progress_callback(span: Span) -> ProgressCallback {
    Arc::new(move |_completed| span.pb_inc(1))
}

fn progress_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.blue} {msg} [{pos}/{len}]")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(TICK_STRINGS)
}
