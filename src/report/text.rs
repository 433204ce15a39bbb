use crate::rank::RankedOutput;
use crate::report::bracketed;

/// Console format: both sorted views as bracketed lists, then the bravest
/// names one per line.
pub fn render_text(output: &RankedOutput) -> String {
    let mut out = String::new();
    out.push_str(&bracketed(&output.sorted_names));
    out.push('\n');
    out.push_str(&bracketed(&output.sorted_scores));
    out.push('\n');
    for name in &output.bravest {
        out.push_str(name);
        out.push('\n');
    }
    out
}
