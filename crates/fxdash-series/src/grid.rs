//! Grid filtering and column sorting.

use fxdash_types::DateRange;
use std::cmp::Ordering;
use std::str::FromStr;

use crate::FlattenedRow;

/// Rows per grid page.
pub const GRID_PAGE_SIZE: usize = 20;

/// Row predicate for the grid view. Unset criteria match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowFilter {
    code: Option<String>,
    min_rate: Option<f64>,
    max_rate: Option<f64>,
    min_change: Option<f64>,
    max_change: Option<f64>,
    dates: Option<DateRange>,
}

impl RowFilter {
    /// Creates a filter that accepts every row.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps rows whose code contains `term`, ignoring case. Blank terms are ignored.
    #[must_use]
    pub fn with_code(mut self, term: impl AsRef<str>) -> Self {
        let term = term.as_ref().trim();
        self.code = (!term.is_empty()).then(|| term.to_ascii_uppercase());
        self
    }

    /// Keeps rows with `rate >= min`.
    #[must_use]
    pub const fn with_min_rate(mut self, min: f64) -> Self {
        self.min_rate = Some(min);
        self
    }

    /// Keeps rows with `rate <= max`.
    #[must_use]
    pub const fn with_max_rate(mut self, max: f64) -> Self {
        self.max_rate = Some(max);
        self
    }

    /// Keeps rows with a change of at least `min` percent.
    ///
    /// Rows without a change value fail either change bound.
    #[must_use]
    pub const fn with_min_change(mut self, min: f64) -> Self {
        self.min_change = Some(min);
        self
    }

    /// Keeps rows with a change of at most `max` percent.
    #[must_use]
    pub const fn with_max_change(mut self, max: f64) -> Self {
        self.max_change = Some(max);
        self
    }

    /// Keeps rows dated within `range`.
    #[must_use]
    pub const fn with_dates(mut self, range: DateRange) -> Self {
        self.dates = Some(range);
        self
    }

    /// Returns true if `row` passes every criterion.
    #[must_use]
    pub fn matches(&self, row: &FlattenedRow) -> bool {
        self.code
            .as_ref()
            .is_none_or(|term| row.code.to_ascii_uppercase().contains(term))
            && self.min_rate.is_none_or(|min| row.rate >= min)
            && self.max_rate.is_none_or(|max| row.rate <= max)
            && self
                .min_change
                .is_none_or(|min| row.change_percent.is_some_and(|c| c >= min))
            && self
                .max_change
                .is_none_or(|max| row.change_percent.is_some_and(|c| c <= max))
            && self.dates.is_none_or(|range| range.contains(row.date))
    }

    /// Returns the rows that pass, in their original order.
    #[must_use]
    pub fn apply(&self, rows: &[FlattenedRow]) -> Vec<FlattenedRow> {
        rows.iter().filter(|row| self.matches(row)).cloned().collect()
    }
}

/// Sortable grid column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridColumn {
    /// Pair code.
    Code,
    /// Rate.
    Rate,
    /// Observation date.
    Date,
    /// Percent change.
    Change,
}

impl GridColumn {
    /// Lowercase column name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::Rate => "rate",
            Self::Date => "date",
            Self::Change => "change",
        }
    }
}

impl std::fmt::Display for GridColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GridColumn {
    type Err = GridColumnParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "code" | "pair" => Ok(Self::Code),
            "rate" => Ok(Self::Rate),
            "date" => Ok(Self::Date),
            "change" | "change_percent" => Ok(Self::Change),
            _ => Err(GridColumnParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an unknown grid column name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridColumnParseError(String);

impl std::fmt::Display for GridColumnParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown grid column '{}', expected one of: code, rate, date, change",
            self.0
        )
    }
}

impl std::error::Error for GridColumnParseError {}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    /// Smallest first.
    Ascending,
    /// Largest first.
    #[default]
    Descending,
}

/// Column sort for the grid.
///
/// Rows without a change value always sort after rows with one, whatever
/// the direction. The sort is stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSort {
    /// Column to sort by.
    pub column: GridColumn,
    /// Direction.
    pub direction: SortDirection,
}

impl Default for GridSort {
    fn default() -> Self {
        Self {
            column: GridColumn::Date,
            direction: SortDirection::Descending,
        }
    }
}

impl GridSort {
    /// Creates a sort on `column`.
    #[must_use]
    pub const fn new(column: GridColumn, direction: SortDirection) -> Self {
        Self { column, direction }
    }

    /// Sorts `rows` in place.
    pub fn apply(&self, rows: &mut [FlattenedRow]) {
        rows.sort_by(|a, b| self.compare(a, b));
    }

    fn compare(&self, a: &FlattenedRow, b: &FlattenedRow) -> Ordering {
        let ordering = match self.column {
            GridColumn::Code => a.code.cmp(&b.code),
            GridColumn::Rate => a.rate.total_cmp(&b.rate),
            GridColumn::Date => a.date.cmp(&b.date),
            GridColumn::Change => match (a.change_percent, b.change_percent) {
                (Some(x), Some(y)) => x.total_cmp(&y),
                (Some(_), None) => return Ordering::Less,
                (None, Some(_)) => return Ordering::Greater,
                (None, None) => return Ordering::Equal,
            },
        };
        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}
