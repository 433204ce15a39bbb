use serde::Serialize;

use crate::rank::{BRAVERY_THRESHOLD, BRAVEST_CAP, RankedOutput};

#[derive(Debug, Clone, Serialize)]
struct Summary<'a> {
    tool: &'static str,
    version: &'static str,
    n_records: usize,
    bravery_threshold: i64,
    bravest_cap: usize,
    #[serde(flatten)]
    output: &'a RankedOutput,
}

pub fn render_summary_json(output: &RankedOutput) -> Result<String, serde_json::Error> {
    let summary = Summary {
        tool: "bravery-rank",
        version: env!("CARGO_PKG_VERSION"),
        n_records: output.sorted_names.len(),
        bravery_threshold: BRAVERY_THRESHOLD,
        bravest_cap: BRAVEST_CAP,
        output,
    };
    let mut rendered = serde_json::to_string_pretty(&summary)?;
    rendered.push('\n');
    Ok(rendered)
}
