//! Report generation business logic.
//!
//! Pure functions over loaded [`OrderRecord`]s: per-client statistics with a
//! top-N ranking, monthly sales sums, and daily order counts inside a one-month
//! window. Nothing here touches the store or formats output; the shell loads
//! the records and the presenter draws the results.
//!
//! An empty dataset is not an error. The date-based reports return
//! [`Report::NoData`] with the reason, and the caller tells the user.

use crate::{
    core::record::OrderRecord,
    errors::{Error, Result},
};
use chrono::{Datelike, NaiveDate};
use std::{collections::BTreeMap, fmt};

/// Number of day buckets in a daily report.
///
/// Always 31, whatever the length of the month: short months simply end
/// with buckets that can never be filled.
pub const DAYS_IN_WINDOW: usize = 31;

/// Outcome of a report that may have nothing to show.
#[derive(Debug, Clone, PartialEq)]
pub enum Report<T> {
    /// The report was computed
    Ready(T),
    /// There was nothing to compute; informational, not a failure
    NoData(NoDataReason),
}

impl<T> Report<T> {
    /// The computed value, if any.
    #[must_use]
    pub fn ready(self) -> Option<T> {
        match self {
            Self::Ready(value) => Some(value),
            Self::NoData(_) => None,
        }
    }
}

/// Why a report came back empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoDataReason {
    /// There are no orders at all
    NoOrders,
    /// There are orders, but none has a date that parses
    NoDatedOrders,
    /// There are orders, but none inside the requested window
    NoOrdersInWindow(ReportWindow),
}

impl fmt::Display for NoDataReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoOrders => write!(f, "No data: there are no orders"),
            Self::NoDatedOrders => write!(f, "No data: no orders with a usable date"),
            Self::NoOrdersInWindow(window) => write!(f, "No orders for {window}"),
        }
    }
}

/// A calendar month that a daily report is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportWindow {
    year: i32,
    month: u32,
}

impl ReportWindow {
    /// Creates a window for `year`/`month`.
    ///
    /// # Errors
    /// Returns [`Error::Validation`] if `month` is not between 1 and 12.
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::Validation {
                errors: vec![format!("Month must be between 1 and 12, got {month}")],
            });
        }
        Ok(Self { year, month })
    }

    /// Calendar year
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Month number, 1-12
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Whether `date` falls inside this window.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for ReportWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Order count and spend for one client.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientStat {
    /// Client name as stored on the orders
    pub client: String,
    /// Number of orders
    pub order_count: usize,
    /// Sum of order totals
    pub total: f64,
}

/// Groups orders by client name.
///
/// Groups come back in ascending order of client name. Clients without
/// orders do not appear; empty input gives an empty result.
#[must_use]
pub fn client_stats(orders: &[OrderRecord]) -> Vec<ClientStat> {
    let mut groups: BTreeMap<&str, (usize, f64)> = BTreeMap::new();
    for order in orders {
        let entry = groups.entry(order.client.as_str()).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += order.total;
    }

    groups
        .into_iter()
        .map(|(client, (order_count, total))| ClientStat {
            client: client.to_string(),
            order_count,
            total,
        })
        .collect()
}

/// Picks the `limit` clients with the most orders.
///
/// The sort is stable, so clients with equal counts keep their order from
/// `stats`.
#[must_use]
pub fn top_clients(stats: &[ClientStat], limit: usize) -> Vec<ClientStat> {
    let mut ranked = stats.to_vec();
    ranked.sort_by(|a, b| b.order_count.cmp(&a.order_count));
    ranked.truncate(limit);
    ranked
}

/// Sales totals keyed by month number.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MonthlySales {
    by_month: BTreeMap<u32, f64>,
}

impl MonthlySales {
    /// Total for `month`, or `None` if no order fell in it.
    #[must_use]
    pub fn get(&self, month: u32) -> Option<f64> {
        self.by_month.get(&month).copied()
    }

    /// Months that have orders, ascending, with their totals.
    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.by_month.iter().map(|(month, total)| (*month, *total))
    }

    /// Number of months with orders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_month.len()
    }

    /// Whether no month has orders.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_month.is_empty()
    }

    /// Totals for January..=December, zero where a month has no orders.
    #[must_use]
    pub fn twelve_month_axis(&self) -> [f64; 12] {
        let mut axis = [0.0; 12];
        for (slot, month) in axis.iter_mut().zip(1..=12) {
            *slot = self.get(month).unwrap_or(0.0);
        }
        axis
    }
}

/// Sums order totals per calendar month.
///
/// Orders whose date does not parse are dropped with a warning. Months of
/// different years share a bucket.
#[must_use]
pub fn monthly_sales(orders: &[OrderRecord]) -> Report<MonthlySales> {
    if orders.is_empty() {
        tracing::info!("Monthly sales: the order table is empty");
        return Report::NoData(NoDataReason::NoOrders);
    }

    let dated = dated_orders(orders);
    if dated.is_empty() {
        tracing::info!("Monthly sales: no orders with a usable date");
        return Report::NoData(NoDataReason::NoDatedOrders);
    }

    let mut sales = MonthlySales::default();
    for (date, order) in dated {
        *sales.by_month.entry(date.month()).or_insert(0.0) += order.total;
    }
    Report::Ready(sales)
}

/// Order counts for each day of a [`ReportWindow`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyCounts {
    window: ReportWindow,
    counts: [usize; DAYS_IN_WINDOW],
}

impl DailyCounts {
    /// The month these counts cover
    #[must_use]
    pub const fn window(&self) -> ReportWindow {
        self.window
    }

    /// Count for day `day` (1-based); zero outside `1..=31`.
    #[must_use]
    pub fn count(&self, day: u32) -> usize {
        usize::try_from(day)
            .ok()
            .and_then(|day| day.checked_sub(1))
            .and_then(|index| self.counts.get(index))
            .copied()
            .unwrap_or(0)
    }

    /// All buckets, index 0 being day 1.
    #[must_use]
    pub const fn counts(&self) -> &[usize; DAYS_IN_WINDOW] {
        &self.counts
    }

    /// Number of orders inside the window.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Counts orders per day inside `window`.
///
/// Filtering to the window happens before bucketing, and every day from 1 to
/// 31 is present, zero-filled. Orders whose date does not parse are dropped
/// with a warning.
#[must_use]
pub fn daily_order_counts(orders: &[OrderRecord], window: ReportWindow) -> Report<DailyCounts> {
    if orders.is_empty() {
        tracing::info!("Daily orders: the order table is empty");
        return Report::NoData(NoDataReason::NoOrders);
    }

    let dated = dated_orders(orders);
    if dated.is_empty() {
        tracing::info!("Daily orders: no orders with a usable date");
        return Report::NoData(NoDataReason::NoDatedOrders);
    }

    let in_window: Vec<NaiveDate> = dated
        .into_iter()
        .map(|(date, _)| date)
        .filter(|date| window.contains(*date))
        .collect();
    if in_window.is_empty() {
        tracing::info!(%window, "Daily orders: nothing inside the window");
        return Report::NoData(NoDataReason::NoOrdersInWindow(window));
    }

    let mut counts = [0; DAYS_IN_WINDOW];
    for date in in_window {
        // day() is 1..=31, so the index is always in range
        if let Some(slot) = counts.get_mut(date.day0() as usize) {
            *slot += 1;
        }
    }
    Report::Ready(DailyCounts { window, counts })
}

fn dated_orders(orders: &[OrderRecord]) -> Vec<(NaiveDate, &OrderRecord)> {
    orders
        .iter()
        .filter_map(|order| match order.parsed_date() {
            Some(date) => Some((date, order)),
            None => {
                tracing::warn!(client = %order.client, date = %order.date, "Dropping order with unparseable date");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::core::record::ProductList;

    fn order(client: &str, date: &str, total: f64) -> OrderRecord {
        OrderRecord {
            client: client.to_string(),
            products: ProductList::EmptyDefault,
            date: date.to_string(),
            total,
        }
    }

    fn sample_orders() -> Vec<OrderRecord> {
        vec![
            order("Dave", "2025-08-01", 40.0),
            order("Alice", "2025-08-01", 100.0),
            order("Bob", "2025-08-15", 200.0),
            order("Alice", "2025-07-31", 150.0),
            order("Carol", "2025-08-31", 10.0),
            order("Bob", "2024-08-02", 5.0),
            order("Dave", "someday", 60.0),
            order("Carol", "2025-01-20 09:15:00", 30.0),
        ]
    }

    fn window(year: i32, month: u32) -> ReportWindow {
        ReportWindow::new(year, month).unwrap()
    }

    #[test]
    fn test_client_stats_example() {
        let orders = vec![
            order("Alice", "2025-08-01", 100.0),
            order("Bob", "2025-08-02", 200.0),
            order("Alice", "2025-08-03", 150.0),
        ];
        let stats = client_stats(&orders);

        assert_eq!(
            stats,
            vec![
                ClientStat {
                    client: "Alice".to_string(),
                    order_count: 2,
                    total: 250.0,
                },
                ClientStat {
                    client: "Bob".to_string(),
                    order_count: 1,
                    total: 200.0,
                },
            ]
        );
    }

    #[test]
    fn test_client_stats_empty() {
        assert!(client_stats(&[]).is_empty());
    }

    #[test]
    fn test_client_stats_preserves_count_and_sum() {
        let orders = sample_orders();
        let stats = client_stats(&orders);

        let count: usize = stats.iter().map(|s| s.order_count).sum();
        assert_eq!(count, orders.len());

        let grouped_total: f64 = stats.iter().map(|s| s.total).sum();
        let input_total: f64 = orders.iter().map(|o| o.total).sum();
        assert_eq!(grouped_total, input_total);
    }

    #[test]
    fn test_client_stats_exact_key_match() {
        let orders = vec![order("alice", "2025-08-01", 1.0), order("Alice", "2025-08-01", 1.0)];
        assert_eq!(client_stats(&orders).len(), 2);
    }

    #[test]
    fn test_top_clients_limit_and_ranking() {
        let stats = client_stats(&sample_orders());
        let top = top_clients(&stats, 2);

        assert_eq!(top.len(), 2);
        let min_returned = top.iter().map(|s| s.order_count).min().unwrap();
        for stat in stats.iter().filter(|s| !top.contains(s)) {
            assert!(stat.order_count <= min_returned);
        }
    }

    #[test]
    fn test_top_clients_ties_keep_grouping_order() {
        // Every client in the sample has exactly two orders
        let stats = client_stats(&sample_orders());
        let top = top_clients(&stats, 3);
        let names: Vec<&str> = top.iter().map(|s| s.client.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
    }

    #[test]
    fn test_top_clients_limit_larger_than_input() {
        let stats = client_stats(&[order("Alice", "2025-08-01", 1.0)]);
        assert_eq!(top_clients(&stats, 5).len(), 1);
        assert!(top_clients(&stats, 0).is_empty());
    }

    #[test]
    fn test_monthly_sales_only_present_months() {
        let sales = monthly_sales(&sample_orders()).ready().unwrap();

        // July, August (two years combined) and January
        assert_eq!(sales.len(), 3);
        assert_eq!(sales.get(8), Some(355.0));
        assert_eq!(sales.get(7), Some(150.0));
        assert_eq!(sales.get(1), Some(30.0));
        assert_eq!(sales.get(2), None);

        let months: Vec<u32> = sales.iter().map(|(month, _)| month).collect();
        assert_eq!(months, vec![1, 7, 8]);
    }

    #[test]
    fn test_monthly_sales_twelve_month_axis() {
        let sales = monthly_sales(&sample_orders()).ready().unwrap();
        let axis = sales.twelve_month_axis();

        assert_eq!(axis[0], 30.0);
        assert_eq!(axis[1], 0.0);
        assert_eq!(axis[6], 150.0);
        assert_eq!(axis[7], 355.0);
        assert_eq!(axis[11], 0.0);
    }

    #[test]
    fn test_monthly_sales_no_data() {
        assert_eq!(monthly_sales(&[]), Report::NoData(NoDataReason::NoOrders));

        // Nothing left once bad dates are dropped
        let orders = vec![order("Alice", "garbage", 10.0)];
        assert_eq!(
            monthly_sales(&orders),
            Report::NoData(NoDataReason::NoDatedOrders)
        );
    }

    #[test]
    fn test_daily_counts_fixed_width() {
        let daily = daily_order_counts(&sample_orders(), window(2025, 8))
            .ready()
            .unwrap();

        assert_eq!(daily.counts().len(), DAYS_IN_WINDOW);
        assert_eq!(daily.count(1), 2);
        assert_eq!(daily.count(15), 1);
        assert_eq!(daily.count(31), 1);
        assert_eq!(daily.count(2), 0);
        assert_eq!(daily.count(0), 0);
        assert_eq!(daily.count(32), 0);
        // 2024-08-02 and 2025-07-31 are outside the window
        assert_eq!(daily.total(), 4);
        assert_eq!(daily.window(), window(2025, 8));
    }

    #[test]
    fn test_daily_counts_short_month_keeps_31_buckets() {
        let orders = vec![order("Alice", "2025-02-28", 1.0)];
        let daily = daily_order_counts(&orders, window(2025, 2)).ready().unwrap();

        assert_eq!(daily.counts().len(), 31);
        assert_eq!(daily.count(28), 1);
        assert_eq!(daily.count(29), 0);
        assert_eq!(daily.count(31), 0);
    }

    #[test]
    fn test_daily_counts_no_data() {
        assert_eq!(
            daily_order_counts(&[], window(2025, 8)),
            Report::NoData(NoDataReason::NoOrders)
        );
        assert_eq!(
            daily_order_counts(&sample_orders(), window(2023, 3)),
            Report::NoData(NoDataReason::NoOrdersInWindow(window(2023, 3)))
        );
        assert_eq!(
            daily_order_counts(&[order("Alice", "garbage", 10.0)], window(2025, 8)),
            Report::NoData(NoDataReason::NoDatedOrders)
        );
    }

    #[test]
    fn test_report_window_validation() {
        assert!(ReportWindow::new(2025, 0).is_err());
        assert!(ReportWindow::new(2025, 13).is_err());
        assert_eq!(window(2025, 8).to_string(), "2025-08");
    }

    #[test]
    fn test_no_data_reason_messages() {
        assert_eq!(NoDataReason::NoOrders.to_string(), "No data: there are no orders");
        assert_eq!(
            NoDataReason::NoDatedOrders.to_string(),
            "No data: no orders with a usable date"
        );
        assert_eq!(
            NoDataReason::NoOrdersInWindow(window(2025, 8)).to_string(),
            "No orders for 2025-08"
        );
    }
}
