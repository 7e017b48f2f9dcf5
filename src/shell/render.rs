//! Text presenter for listings and charts.
//!
//! Every function returns a `String`; the command handlers decide where it is
//! written. Charts are plain text: a ranked horizontal bar chart and a point
//! plot for time series.

use crate::{
    core::{order::ListedOrder, report::ClientStat},
    entities::{client, product},
    errors::Error,
};
use std::fmt::Write;

/// Short month names for the 12-month axis
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const BAR_WIDTH: usize = 40;
const PLOT_HEIGHT: usize = 10;

/// Formats a money amount with two decimals.
#[must_use]
pub fn format_money(amount: f64) -> String {
    format!("{amount:.2}")
}

/// Message shown to the user for a failed command.
///
/// Validation errors are listed one per line; everything else uses its
/// `Display` text.
#[must_use]
pub fn error_message(error: &Error) -> String {
    match error {
        Error::Validation { errors } => {
            let mut message = String::from("Invalid input:");
            for violation in errors {
                // write! is infallible when writing to String
                let _ = write!(message, "\n  - {violation}");
            }
            message
        }
        other => other.to_string(),
    }
}

/// Client table with aligned columns.
#[must_use]
pub fn render_clients(clients: &[&client::Model]) -> String {
    let headers = ["Name", "Email", "Phone", "Address"];
    let rows: Vec<[&str; 4]> = clients
        .iter()
        .map(|c| [c.name.as_str(), c.email.as_str(), c.phone.as_str(), c.address.as_str()])
        .collect();

    let mut widths = headers.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &headers, &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[&str; 4], widths: &[usize; 4]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

/// Product lines: `id) name - price (category)`.
#[must_use]
pub fn render_products(products: &[product::Model]) -> String {
    products
        .iter()
        .map(|p| {
            format!(
                "{}) {} - {} ({})\n",
                p.id,
                p.name,
                format_money(p.price),
                p.category
            )
        })
        .collect()
}

/// Numbered order lines: `n) date | client | total`.
///
/// `n` is the order's stored position, whatever the slice order.
#[must_use]
pub fn render_orders(orders: &[ListedOrder]) -> String {
    orders
        .iter()
        .map(|o| {
            format!(
                "{}) {} | {} | {}\n",
                o.position,
                o.record.date,
                o.record.client,
                format_money(o.record.total)
            )
        })
        .collect()
}

/// Client statistics listing: `client: n orders, total`.
#[must_use]
pub fn render_client_stats(stats: &[ClientStat]) -> String {
    stats
        .iter()
        .map(|s| {
            format!(
                "{}: {} orders, {} total\n",
                s.client,
                s.order_count,
                format_money(s.total)
            )
        })
        .collect()
}

/// Horizontal bar chart, one bar per entry, longest bar scaled to full width.
#[must_use]
pub fn render_bar_chart(title: &str, entries: &[(String, usize)]) -> String {
    let mut out = format!("{title}\n");
    let label_width = entries
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);
    let max = entries.iter().map(|(_, value)| *value).max().unwrap_or(0).max(1);

    for (label, value) in entries {
        let filled = value * BAR_WIDTH / max;
        let _ = writeln!(
            out,
            "{label:<label_width$} | {}{} {value}",
            "█".repeat(filled),
            " ".repeat(BAR_WIDTH - filled)
        );
    }
    out
}

/// Point plot of a series, one column per label, zero at the bottom row.
///
/// The y-axis runs from zero to the series maximum; each value is drawn as
/// `*` on the row nearest to it.
#[must_use]
pub fn render_line_chart(title: &str, labels: &[String], values: &[f64]) -> String {
    let max = values.iter().copied().fold(0.0_f64, f64::max);
    let scale = if max > 0.0 { max } else { 1.0 };
    let column_width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(1) + 1;

    // value/scale stays within 0..=1 and the plot height is small.
    // Negative values clamp to the bottom row.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let levels: Vec<usize> = values
        .iter()
        .map(|v| ((v.max(0.0) / scale) * (PLOT_HEIGHT - 1) as f64).round() as usize)
        .collect();

    let axis_label = format_money(max);
    let axis_width = axis_label.len().max(4);

    let mut out = format!("{title}\n");
    for row in (0..PLOT_HEIGHT).rev() {
        let tick = match row {
            r if r == PLOT_HEIGHT - 1 => axis_label.clone(),
            0 => "0".to_string(),
            _ => String::new(),
        };
        let mut line = format!("{tick:>axis_width$} |");
        for level in &levels {
            let mark = if *level == row { "*" } else { " " };
            let _ = write!(line, "{mark:>column_width$}");
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }

    let _ = writeln!(
        out,
        "{} +{}",
        " ".repeat(axis_width),
        "-".repeat(column_width * levels.len())
    );
    let mut label_line = format!("{}  ", " ".repeat(axis_width));
    for label in labels {
        let _ = write!(label_line, "{label:>column_width$}");
    }
    out.push_str(label_line.trim_end());
    out.push('\n');
    out
}
