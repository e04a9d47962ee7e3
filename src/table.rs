//! Tabular rendering of assets
//!
//! Column widths are computed across the header and every row, cells are
//! left-justified and joined by two spaces. Rows are listed by office then
//! purchase date and tagged with a lifecycle class the caller turns into a
//! display color.

use crate::asset::{Asset, Column};
use crate::types::COLUMN_COUNT;
use chrono::{Duration, Months, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator between table cells
pub const COLUMN_SEPARATOR: &str = "  ";

/// Header labels in column order
pub fn headers() -> [&'static str; COLUMN_COUNT] {
    Column::ALL.map(|column| column.header())
}

/// How close an asset is to its end of life
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Lifecycle {
    /// End of life within the critical window, or already past it
    Critical,
    /// End of life within the warning window
    Warning,
    /// Plenty of life left
    Fresh,
}

impl fmt::Display for Lifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lifecycle::Critical => write!(f, "critical"),
            Lifecycle::Warning => write!(f, "warning"),
            Lifecycle::Fresh => write!(f, "fresh"),
        }
    }
}

/// End-of-life thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifecyclePolicy {
    /// Service life counted from the purchase date
    pub lifetime_months: u32,
    /// Days before end of life at which an asset becomes critical
    pub critical_days: u32,
    /// Days before end of life at which an asset needs attention
    pub warning_days: u32,
}

impl Default for LifecyclePolicy {
    fn default() -> Self {
        Self {
            lifetime_months: 36,
            critical_days: 90,
            warning_days: 180,
        }
    }
}

impl LifecyclePolicy {
    /// End-of-life instant (midnight) for an asset. `None` past the calendar range.
    pub fn end_of_life(&self, asset: &Asset) -> Option<NaiveDateTime> {
        asset
            .purchase_date()
            .checked_add_months(Months::new(self.lifetime_months))
            .map(|eol| eol.and_time(NaiveTime::MIN))
    }

    /// Classify an asset relative to `now`. Boundaries fall in the stricter class.
    pub fn classify(&self, asset: &Asset, now: NaiveDateTime) -> Lifecycle {
        let eol = match self.end_of_life(asset) {
            Some(eol) => eol,
            None => return Lifecycle::Fresh,
        };
        let remaining = eol - now;

        if remaining <= Duration::days(i64::from(self.critical_days)) {
            Lifecycle::Critical
        } else if remaining <= Duration::days(i64::from(self.warning_days)) {
            Lifecycle::Warning
        } else {
            Lifecycle::Fresh
        }
    }
}

/// Lifecycle class under the default three-year policy
pub fn lifecycle_class(asset: &Asset, now: NaiveDateTime) -> Lifecycle {
    LifecyclePolicy::default().classify(asset, now)
}

/// Per-column widths: the longest of the header and every rendered field
pub fn column_widths(headers: &[&str; COLUMN_COUNT], rows: &[Asset]) -> [usize; COLUMN_COUNT] {
    let mut widths = (*headers).map(|header| header.chars().count());
    for asset in rows {
        for column in Column::ALL {
            let len = column.render(asset).chars().count();
            let slot = &mut widths[column.index()];
            if len > *slot {
                *slot = len;
            }
        }
    }
    log::debug!("Computed column widths {:?} over {} rows", widths, rows.len());
    widths
}

fn join_cells<I, S>(cells: I, widths: &[usize; COLUMN_COUNT]) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    cells
        .into_iter()
        .zip(widths.iter())
        .map(|(cell, width)| format!("{:<width$}", cell.as_ref(), width = *width))
        .collect::<Vec<_>>()
        .join(COLUMN_SEPARATOR)
}

/// Header line, each label padded to its column
pub fn render_header(headers: &[&str; COLUMN_COUNT], widths: &[usize; COLUMN_COUNT]) -> String {
    join_cells(headers.iter(), widths)
}

/// Dashed underline matching the column widths
pub fn render_underline(widths: &[usize; COLUMN_COUNT]) -> String {
    join_cells(widths.iter().map(|width| "-".repeat(*width)), widths)
}

/// One asset row, each field padded to its column
pub fn render_row(asset: &Asset, widths: &[usize; COLUMN_COUNT]) -> String {
    join_cells(asset.fields(), widths)
}

/// Assets in display order: office ignoring case (exact text breaks ties),
/// then purchase date. Stable for equal keys.
pub fn sort_for_display(assets: &[Asset]) -> Vec<&Asset> {
    let mut sorted: Vec<&Asset> = assets.iter().collect();
    sorted.sort_by_cached_key(|asset| {
        (
            asset.office().to_lowercase(),
            asset.office().to_string(),
            asset.purchase_date(),
        )
    });
    sorted
}

/// A rendered table row with its display hint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub lifecycle: Lifecycle,
    pub text: String,
}

/// Formatter for a fixed set of assets
#[derive(Debug, Clone)]
pub struct TableFormatter<'a> {
    headers: [&'static str; COLUMN_COUNT],
    widths: [usize; COLUMN_COUNT],
    rows: Vec<&'a Asset>,
    policy: LifecyclePolicy,
}

impl<'a> TableFormatter<'a> {
    /// Create a formatter with the standard headers and default lifecycle policy
    pub fn new(assets: &'a [Asset]) -> Self {
        let headers = headers();
        Self {
            widths: column_widths(&headers, assets),
            headers,
            rows: sort_for_display(assets),
            policy: LifecyclePolicy::default(),
        }
    }

    /// Use a different lifecycle policy
    pub fn with_policy(mut self, policy: LifecyclePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn widths(&self) -> &[usize; COLUMN_COUNT] {
        &self.widths
    }

    pub fn header_line(&self) -> String {
        render_header(&self.headers, &self.widths)
    }

    pub fn underline(&self) -> String {
        render_underline(&self.widths)
    }

    /// Rows in display order, classified against `now`
    pub fn rows(&self, now: NaiveDateTime) -> Vec<TableRow> {
        self.rows
            .iter()
            .map(|asset| TableRow {
                lifecycle: self.policy.classify(asset, now),
                text: render_row(asset, &self.widths),
            })
            .collect()
    }
}
