//! Daily totals and the chart series derived from them.
//!
//! Totals are keyed by the exact date string of each transaction. No date
//! normalization happens here: `2024-01-01` and `2024-1-1` are two different
//! days. Parsing into calendar dates only happens when the series is laid
//! out on a time axis.

use std::collections::HashMap;

use chrono::{Days, NaiveDate};

use super::{Transaction, transaction::parse_date};

/// Upper bound on the number of day slots produced for a time axis.
///
/// Ranges wider than this are laid out without filling empty days.
pub const MAX_DAY_SLOTS: usize = 366;

// ============================================================================
// Daily Totals
// ============================================================================

/// Summed amounts per date string, in first-appearance order of each date.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailyTotals {
    entries: Vec<(String, f64)>,
}

impl DailyTotals {
    /// Sums transaction amounts per exact date string.
    #[must_use]
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let mut positions: HashMap<&str, usize> = HashMap::new();
        let mut entries: Vec<(String, f64)> = Vec::new();

        for txn in transactions {
            match positions.get(txn.date.as_str()) {
                Some(&i) => entries[i].1 += txn.amount,
                None => {
                    positions.insert(txn.date.as_str(), entries.len());
                    entries.push((txn.date.clone(), txn.amount));
                }
            }
        }

        Self { entries }
    }

    /// `(date, total)` entries in first-appearance order.
    #[must_use]
    pub fn entries(&self) -> &[(String, f64)] {
        &self.entries
    }

    /// Total for one date string.
    #[cfg(test)]
    #[must_use]
    pub fn get(&self, date: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(d, _)| d == date)
            .map(|(_, total)| *total)
    }

    #[cfg(test)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders the totals as `date,total` lines.
    #[must_use]
    pub fn to_csv(&self) -> String {
        let mut out = String::from("date,total\n");
        for (date, total) in &self.entries {
            out.push_str(date);
            out.push(',');
            out.push_str(&super::format_amount(*total));
            out.push('\n');
        }
        out
    }
}

// ============================================================================
// Chart Series
// ============================================================================

/// One point of the chart series.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    /// Raw date string from the dataset.
    pub label: String,
    /// Parsed calendar date, `None` when the label is not a valid date.
    pub date: Option<NaiveDate>,
    /// Summed amount for the day.
    pub total: f64,
}

/// A slot on the day-granular time axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DaySlot {
    /// Calendar day of the slot.
    pub date: NaiveDate,
    /// Total for the day, `None` for days without transactions.
    pub total: Option<f64>,
}

/// Parallel labels and values for the bar chart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSeries {
    points: Vec<ChartPoint>,
}

impl ChartSeries {
    /// Projects daily totals into chart points, keeping their order.
    #[must_use]
    pub fn from_totals(totals: &DailyTotals) -> Self {
        let points = totals
            .entries()
            .iter()
            .map(|(label, total)| ChartPoint {
                label: label.clone(),
                date: parse_date(label),
                total: *total,
            })
            .collect();
        Self { points }
    }

    #[cfg(test)]
    #[must_use]
    pub fn points(&self) -> &[ChartPoint] {
        &self.points
    }

    #[cfg(test)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[cfg(test)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Labels of the points that cannot be placed on a time axis.
    pub fn undated_labels(&self) -> impl Iterator<Item = &str> {
        self.points
            .iter()
            .filter(|point| point.date.is_none())
            .map(|point| point.label.as_str())
    }

    /// Lays the series out on a day-granular time axis.
    ///
    /// Slots are sorted by date. Days between the first and last date that
    /// have no total become empty slots, unless the range exceeds
    /// [`MAX_DAY_SLOTS`]. Points without a calendar date are dropped.
    #[must_use]
    pub fn day_slots(&self) -> Vec<DaySlot> {
        let mut dated: Vec<(NaiveDate, f64)> = self
            .points
            .iter()
            .filter_map(|point| point.date.map(|date| (date, point.total)))
            .collect();
        dated.sort_by_key(|(date, _)| *date);
        // Distinct labels such as `2024-1-1` and `2024-01-01` share a day.
        dated.dedup_by(|(date, total), (kept_date, kept_total)| {
            if date == kept_date {
                *kept_total += *total;
                true
            } else {
                false
            }
        });

        let (Some(&(first, _)), Some(&(last, _))) = (dated.first(), dated.last()) else {
            return Vec::new();
        };

        let span = (last - first).num_days() as usize + 1;
        if span > MAX_DAY_SLOTS {
            return dated
                .into_iter()
                .map(|(date, total)| DaySlot {
                    date,
                    total: Some(total),
                })
                .collect();
        }

        let mut slots = Vec::with_capacity(span);
        let mut day = first;
        let mut next = dated.into_iter().peekable();
        while day <= last {
            let total = match next.peek() {
                Some(&(date, total)) if date == day => {
                    next.next();
                    Some(total)
                }
                _ => None,
            };
            slots.push(DaySlot { date: day, total });
            match day.checked_add_days(Days::new(1)) {
                Some(following) => day = following,
                None => break,
            }
        }
        slots
    }
}

/// Builds the chart series for a selected customer's transactions.
#[must_use]
pub fn chart_series(transactions: &[Transaction]) -> ChartSeries {
    ChartSeries::from_totals(&DailyTotals::from_transactions(transactions))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> Vec<Transaction> {
        vec![
            Transaction::new(1, "2024-01-01", 10.0),
            Transaction::new(1, "2024-01-01", 5.0),
            Transaction::new(1, "2024-01-02", 3.0),
        ]
    }

    #[test]
    fn test_daily_totals_sum_per_date() {
        let totals = DailyTotals::from_transactions(&sample());

        assert_eq!(totals.len(), 2);
        assert_eq!(totals.get("2024-01-01"), Some(15.0));
        assert_eq!(totals.get("2024-01-02"), Some(3.0));
    }

    #[test]
    fn test_series_keeps_totals_order() {
        let series = chart_series(&sample());

        assert_eq!(series.len(), 2);
        assert_eq!(series.points()[0].label, "2024-01-01");
        assert_eq!(series.points()[0].date, Some(ymd(2024, 1, 1)));
        assert_eq!(series.points()[0].total, 15.0);
        assert_eq!(series.points()[1].label, "2024-01-02");
        assert_eq!(series.points()[1].total, 3.0);
    }

    #[test]
    fn test_totals_first_appearance_order() {
        let txns = vec![
            Transaction::new(1, "2024-03-05", 1.0),
            Transaction::new(1, "2024-03-01", 2.0),
            Transaction::new(1, "2024-03-05", 4.0),
        ];
        let totals = DailyTotals::from_transactions(&txns);
        assert_eq!(
            totals.entries(),
            &[("2024-03-05".to_string(), 5.0), ("2024-03-01".to_string(), 2.0)]
        );
    }

    #[test]
    fn test_no_date_normalization() {
        let txns = vec![
            Transaction::new(1, "2024-01-01", 1.0),
            Transaction::new(1, "2024-1-1", 2.0),
        ];
        let totals = DailyTotals::from_transactions(&txns);
        assert_eq!(totals.len(), 2);
    }

    #[test]
    fn test_empty_selection_produces_empty_series() {
        let series = chart_series(&[]);
        assert!(series.is_empty());
        assert!(series.day_slots().is_empty());
    }

    #[test]
    fn test_day_slots_sorted_and_gap_filled() {
        let txns = vec![
            Transaction::new(1, "2024-01-04", 4.0),
            Transaction::new(1, "2024-01-01", 1.0),
        ];
        let slots = chart_series(&txns).day_slots();

        assert_eq!(slots.len(), 4);
        assert_eq!(slots[0], DaySlot { date: ymd(2024, 1, 1), total: Some(1.0) });
        assert_eq!(slots[1].total, None);
        assert_eq!(slots[2].total, None);
        assert_eq!(slots[3], DaySlot { date: ymd(2024, 1, 4), total: Some(4.0) });
    }

    #[test]
    fn test_day_slots_drop_unparseable_dates() {
        let txns = vec![
            Transaction::new(1, "not-a-date", 9.0),
            Transaction::new(1, "2024-01-02", 2.0),
        ];
        let series = chart_series(&txns);
        assert_eq!(series.len(), 2);
        assert_eq!(series.points()[0].date, None);

        let slots = series.day_slots();
        assert_eq!(slots, vec![DaySlot { date: ymd(2024, 1, 2), total: Some(2.0) }]);
        assert_eq!(series.undated_labels().collect::<Vec<_>>(), ["not-a-date"]);
    }

    #[test]
    fn test_day_slots_merge_labels_of_same_day() {
        let txns = vec![
            Transaction::new(1, "2024-01-01", 1.0),
            Transaction::new(1, "2024-1-1", 2.0),
            Transaction::new(1, "2024-01-02", 4.0),
        ];
        let slots = chart_series(&txns).day_slots();
        assert_eq!(
            slots,
            vec![
                DaySlot { date: ymd(2024, 1, 1), total: Some(3.0) },
                DaySlot { date: ymd(2024, 1, 2), total: Some(4.0) },
            ]
        );
    }

    #[test]
    fn test_wide_range_is_not_gap_filled() {
        let txns = vec![
            Transaction::new(1, "2020-01-01", 1.0),
            Transaction::new(1, "2024-01-01", 2.0),
        ];
        let slots = chart_series(&txns).day_slots();
        assert_eq!(slots.len(), 2);
        assert!(slots.iter().all(|s| s.total.is_some()));
    }

    #[test]
    fn test_to_csv() {
        let totals = DailyTotals::from_transactions(&sample());
        assert_eq!(totals.to_csv(), "date,total\n2024-01-01,15\n2024-01-02,3\n");
    }
}
