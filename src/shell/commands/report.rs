//! Report commands - client statistics, top clients, monthly and daily trends.
//!
//! "No data" outcomes are printed as information and the command still
//! succeeds.

use crate::{
    core::{
        order,
        report::{self, DAYS_IN_WINDOW, Report, ReportWindow},
    },
    errors::{Error, Result},
    shell::{ShellData, args::ReportKind, render},
};
use std::io::Write;

const NO_DATA: &str = "No data for analysis";

/// Runs a report.
pub async fn run(data: &ShellData, kind: ReportKind, out: &mut dyn Write) -> Result<()> {
    let orders = order::load_orders(&data.database).await?;
    tracing::debug!(orders = orders.len(), ?kind, "Running report");

    match kind {
        ReportKind::Clients => {
            let stats = report::client_stats(&orders);
            if stats.is_empty() {
                writeln!(out, "{NO_DATA}")?;
            } else {
                write!(out, "{}", render::render_client_stats(&stats))?;
            }
        }
        ReportKind::Top { limit } => {
            let limit = limit.unwrap_or(data.config.reports.top_clients);
            if limit == 0 {
                return Err(Error::Validation {
                    errors: vec!["Top limit must be at least 1".to_string()],
                });
            }
            let top = report::top_clients(&report::client_stats(&orders), limit);
            if top.is_empty() {
                writeln!(out, "{NO_DATA}")?;
            } else {
                let entries: Vec<(String, usize)> =
                    top.into_iter().map(|s| (s.client, s.order_count)).collect();
                let title = format!("Top {limit} clients by number of orders");
                write!(out, "{}", render::render_bar_chart(&title, &entries))?;
            }
        }
        ReportKind::Monthly => match report::monthly_sales(&orders) {
            Report::Ready(sales) => {
                let labels: Vec<String> = render::MONTH_LABELS
                    .iter()
                    .map(ToString::to_string)
                    .collect();
                let chart = render::render_line_chart(
                    "Total sales by month",
                    &labels,
                    &sales.twelve_month_axis(),
                );
                write!(out, "{chart}")?;
            }
            Report::NoData(reason) => writeln!(out, "{reason}")?,
        },
        ReportKind::Daily { year, month } => {
            let window = ReportWindow::new(
                year.unwrap_or(data.config.reports.window_year),
                month.unwrap_or(data.config.reports.window_month),
            )?;
            match report::daily_order_counts(&orders, window) {
                Report::Ready(daily) => {
                    let labels: Vec<String> =
                        (1..=DAYS_IN_WINDOW).map(|day| day.to_string()).collect();
                    // Counts are tiny, so the conversion to f64 is exact
                    #[allow(clippy::cast_precision_loss)]
                    let values: Vec<f64> = daily.counts().iter().map(|c| *c as f64).collect();
                    let title = format!("Orders per day, {window}");
                    write!(out, "{}", render::render_line_chart(&title, &labels, &values))?;
                }
                Report::NoData(reason) => writeln!(out, "{reason}")?,
            }
        }
    }
    Ok(())
}
