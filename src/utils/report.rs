use std::path::Path;

use crate::models::{Result, WalletScore};

/// Render the score table as a two-column CSV, one row per wallet, already
/// assumed to be in rank order.
pub fn render_score_table(scores: &[WalletScore]) -> String {
    let mut out = String::from("wallet_id,score\n");
    for row in scores {
        out.push_str(&row.wallet_id);
        out.push(',');
        out.push_str(&row.score.to_string());
        out.push('\n');
    }
    out
}

pub fn write_score_table<P: AsRef<Path>>(path: P, scores: &[WalletScore]) -> Result<()> {
    std::fs::write(path, render_score_table(scores))?;
    Ok(())
}

/// Plain-text preview of the highest-ranked rows for console output.
pub fn format_top_scores(scores: &[WalletScore], limit: usize) -> String {
    let width = scores
        .iter()
        .take(limit)
        .map(|row| row.wallet_id.len())
        .max()
        .unwrap_or(9)
        .max("wallet_id".len());

    let mut out = format!("{:<width$}  score\n", "wallet_id", width = width);
    for row in scores.iter().take(limit) {
        out.push_str(&format!(
            "{:<width$}  {:>5}\n",
            row.wallet_id,
            row.score,
            width = width
        ));
    }
    out
}
