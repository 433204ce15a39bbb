pub mod json;
pub mod text;

use clap::ValueEnum;

use crate::rank::RankedOutput;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportMode {
    Text,
    Json,
}

pub fn render_report(output: &RankedOutput, mode: ReportMode) -> Result<String, serde_json::Error> {
    match mode {
        ReportMode::Text => Ok(text::render_text(output)),
        ReportMode::Json => json::render_summary_json(output),
    }
}

pub fn bracketed<T: std::fmt::Display>(values: &[T]) -> String {
    let parts: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", parts.join(", "))
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/tests.rs"]
mod tests;
