//! Expense bar chart rendering
//!
//! Renders the expense-by-description dataset as an SVG bar chart under
//! the charts directory. Purely presentational; the dataset itself comes
//! from the query engine.

use std::fs;
use std::path::Path;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::error::{BudgetError, BudgetResult};

const BAR_WIDTH: u32 = 60;
const BAR_GAP: u32 = 24;
const PLOT_HEIGHT: u32 = 240;
const MARGIN_LEFT: u32 = 70;
const MARGIN_TOP: u32 = 50;
const MARGIN_BOTTOM: u32 = 60;

/// Write the expense chart to `path`, creating the parent directory on
/// first use
///
/// An empty dataset writes nothing and is not an error; the caller
/// decides whether that deserves a message.
pub fn render_expense_chart(data: &[(String, Decimal)], path: &Path) -> BudgetResult<()> {
    if data.is_empty() {
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            BudgetError::Io(format!(
                "Failed to create charts directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let svg = build_svg(data);
    fs::write(path, svg)
        .map_err(|e| BudgetError::Io(format!("Failed to write {}: {}", path.display(), e)))?;

    Ok(())
}

fn build_svg(data: &[(String, Decimal)]) -> String {
    let max = data
        .iter()
        .map(|(_, total)| total.to_f64().unwrap_or(0.0))
        .fold(0.0_f64, f64::max)
        .max(1.0);

    let width = MARGIN_LEFT + data.len() as u32 * (BAR_WIDTH + BAR_GAP) + BAR_GAP;
    let height = MARGIN_TOP + PLOT_HEIGHT + MARGIN_BOTTOM;
    let baseline = MARGIN_TOP + PLOT_HEIGHT;

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\">\n",
        width, height
    ));
    svg.push_str(&format!(
        "  <text x=\"{}\" y=\"24\" text-anchor=\"middle\" font-size=\"18\">Expense Chart</text>\n",
        width / 2
    ));
    svg.push_str(&format!(
        "  <text x=\"16\" y=\"{}\" font-size=\"12\" transform=\"rotate(-90 16 {})\" \
         text-anchor=\"middle\">Amount</text>\n",
        MARGIN_TOP + PLOT_HEIGHT / 2,
        MARGIN_TOP + PLOT_HEIGHT / 2
    ));

    // Axes
    svg.push_str(&format!(
        "  <line x1=\"{0}\" y1=\"{1}\" x2=\"{0}\" y2=\"{2}\" stroke=\"black\"/>\n",
        MARGIN_LEFT,
        MARGIN_TOP,
        baseline
    ));
    svg.push_str(&format!(
        "  <line x1=\"{0}\" y1=\"{1}\" x2=\"{2}\" y2=\"{1}\" stroke=\"black\"/>\n",
        MARGIN_LEFT,
        baseline,
        width - BAR_GAP
    ));

    for (i, (label, total)) in data.iter().enumerate() {
        let value = total.to_f64().unwrap_or(0.0).max(0.0);
        let bar_height = ((value / max) * PLOT_HEIGHT as f64).round() as u32;
        let x = MARGIN_LEFT + BAR_GAP + i as u32 * (BAR_WIDTH + BAR_GAP);
        let y = baseline - bar_height;

        svg.push_str(&format!(
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"steelblue\"/>\n",
            x, y, BAR_WIDTH, bar_height
        ));
        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" text-anchor=\"middle\" font-size=\"12\">{}</text>\n",
            x + BAR_WIDTH / 2,
            baseline + 16,
            escape_xml(label)
        ));
        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" text-anchor=\"middle\" font-size=\"11\">{}</text>\n",
            x + BAR_WIDTH / 2,
            y.saturating_sub(4),
            total
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
