//! Renders the scan result into the full index document.
//!
//! Pure: the same category map and config always produce byte-identical
//! text, which is what lets the readback step treat the rendered file as
//! the tool's only persisted state.

use crate::category::category_glyph;
use crate::config::Config;
use crate::notes::CategoryMap;

/// Renders the complete index document. Categories appear in map order;
/// categories with no surviving notes are listed in the overview but get no
/// section of their own.
pub fn render_index(categories: &CategoryMap, cfg: &Config) -> String {
    let total_notes: usize = categories.values().map(Vec::len).sum();
    let category_count = categories.len();

    let mut out = String::new();
    out.push_str("# Solution Notes\n\n");
    out.push_str(
        "Write-ups for data structure and algorithm problems, one topic folder per category.\n",
    );
    out.push_str("This file is regenerated from the notes; edit the notes, not the tables below.\n\n");

    if cfg.include_stats {
        let average = if category_count > 0 {
            total_notes as f64 / category_count as f64
        } else {
            0.0
        };
        out.push_str("## 📊 Progress\n\n");
        out.push_str("| Metric | Count |\n");
        out.push_str("|--------|-------|\n");
        out.push_str(&format!("| Total notes | {} |\n", total_notes));
        out.push_str(&format!("| Categories | {} |\n", category_count));
        out.push_str(&format!("| Average per category | {:.1} |\n", average));
        out.push('\n');
    }

    out.push_str("## Category Overview\n\n");
    out.push_str("| Category | Notes | Status |\n");
    out.push_str("|------|--------|--------|\n");
    for (name, notes) in categories {
        let glyph = category_glyph(name, &cfg.glyphs);
        let status = if notes.is_empty() { "0%" } else { "100%" };
        out.push_str(&format!("| {} {} | {} | {} |\n", glyph, name, notes.len(), status));
    }
    out.push('\n');

    out.push_str("Each category folder holds one file per problem, named `<id>.<title>.md`.\n\n");
    out.push_str("---\n\n");
    out.push_str("## 📂 Notes by Category\n\n");

    for (name, notes) in categories {
        if notes.is_empty() {
            continue;
        }
        let glyph = category_glyph(name, &cfg.glyphs);
        out.push_str(&format!("### {} {}\n\n", glyph, name));
        out.push_str("| # | Title | Solution |\n");
        out.push_str("|------|------|------|\n");
        for note in notes {
            out.push_str(&format!(
                "| {} | {} | [{}]({}) |\n",
                note.id, note.title, note.rel_path, note.rel_path
            ));
        }
        out.push('\n');
    }

    out.push_str("---\n\n");
    out.push_str("*Maintained by notedex; run `notedex update` after adding a note.*\n");
    out
}
