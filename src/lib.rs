//! # Asset Tracker
//!
//! Inventory tracking for company hardware (computers and phones).
//!
//! Each asset's office decides its display currency; the USD purchase price
//! is converted with a static rate. Assets are exported to a flat delimited
//! file in the order they were entered, and shown as an aligned table
//! sorted by office and purchase date, with each row classified by how close
//! the asset is to its three-year end of life.
//!
//! ## Example
//!
//! ```rust
//! use asset_tracker::prelude::*;
//! use chrono::NaiveDate;
//!
//! let mut inventory = Inventory::new();
//! inventory.push(Asset::computer(
//!     "Dell",
//!     "XPS",
//!     "Sweden",
//!     NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
//!     1000.0,
//! ));
//!
//! let table = inventory.table();
//! println!("{}", table.header_line());
//! println!("{}", table.underline());
//! for row in table.rows(chrono::Local::now().naive_local()) {
//!     println!("{}", row.text);
//! }
//! ```

pub mod asset;
pub mod config;
pub mod currency;
pub mod error;
pub mod format;
pub mod input;
pub mod inventory;
pub mod store;
pub mod table;
pub mod types;

pub mod prelude {
    //! Commonly used types and traits
    pub use crate::asset::{Asset, AssetKind, Column};
    pub use crate::config::TrackerConfig;
    pub use crate::currency::{currency_for_office, rate_for_currency, Currency};
    pub use crate::error::{Result, TrackerError};
    pub use crate::input::InputCollector;
    pub use crate::inventory::Inventory;
    pub use crate::store::RecordStore;
    pub use crate::table::{Lifecycle, LifecyclePolicy, TableFormatter, TableRow};
    pub use crate::types::*;
}
