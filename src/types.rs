//! Core types and constants

use chrono::NaiveDate;

/// Price type (using f64, as entered by the user)
pub type Price = f64;

/// Purchase date, calendar day only
pub type PurchaseDate = NaiveDate;

/// Date format used for input, display and records (`MM/dd/yyyy`)
pub const DATE_FORMAT: &str = "%m/%d/%Y";

/// Number of displayed/exported asset fields
pub const COLUMN_COUNT: usize = 8;

/// Default export file name
pub const DEFAULT_OUTPUT: &str = "assets.csv";
