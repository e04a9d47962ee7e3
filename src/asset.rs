//! Asset representations

use crate::currency::{currency_for_office, Currency};
use crate::error::{Result, TrackerError};
use crate::format::{format_date, grouped_integer};
use crate::types::{Price, PurchaseDate, COLUMN_COUNT};
use std::fmt;

/// Width of the blank spacer field written after the kind in each record
pub const RECORD_SPACER_WIDTH: usize = 10;

/// Type of tracked hardware
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    /// Laptop or desktop computer
    Computer,
    /// Mobile phone
    Phone,
}

impl AssetKind {
    /// Label used in tables and records
    pub fn label(&self) -> &'static str {
        match self {
            AssetKind::Computer => "Computer",
            AssetKind::Phone => "Phone",
        }
    }

    /// Parse a kind name, ignoring case and surrounding whitespace
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim().to_lowercase().as_str() {
            "computer" => Some(AssetKind::Computer),
            "phone" => Some(AssetKind::Phone),
            _ => None,
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Displayed/exported asset fields, in their fixed order.
///
/// Each column pairs a header label with the extractor that renders the
/// field, so adding a column means touching every match below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Kind,
    Brand,
    Model,
    Office,
    PurchaseDate,
    PriceUsd,
    Currency,
    LocalPrice,
}

impl Column {
    /// All columns in display order
    pub const ALL: [Column; COLUMN_COUNT] = [
        Column::Kind,
        Column::Brand,
        Column::Model,
        Column::Office,
        Column::PurchaseDate,
        Column::PriceUsd,
        Column::Currency,
        Column::LocalPrice,
    ];

    /// Column at an ordinal position
    pub fn from_index(index: usize) -> Option<Column> {
        Self::ALL.get(index).copied()
    }

    /// Ordinal position of this column
    pub fn index(&self) -> usize {
        match self {
            Column::Kind => 0,
            Column::Brand => 1,
            Column::Model => 2,
            Column::Office => 3,
            Column::PurchaseDate => 4,
            Column::PriceUsd => 5,
            Column::Currency => 6,
            Column::LocalPrice => 7,
        }
    }

    /// Table header label
    pub fn header(&self) -> &'static str {
        match self {
            Column::Kind => "Type",
            Column::Brand => "Brand",
            Column::Model => "Model",
            Column::Office => "Office",
            Column::PurchaseDate => "Purchase Date",
            Column::PriceUsd => "Price in USD",
            Column::Currency => "Currency",
            Column::LocalPrice => "Local price today",
        }
    }

    /// Header label in the exported file
    pub fn record_header(&self) -> &'static str {
        match self {
            Column::LocalPrice => "Local Price",
            other => other.header(),
        }
    }

    /// Render this column's field for an asset
    pub fn render(&self, asset: &Asset) -> String {
        match self {
            Column::Kind => asset.kind.label().to_string(),
            Column::Brand => asset.brand.clone(),
            Column::Model => asset.model.clone(),
            Column::Office => asset.office.clone(),
            Column::PurchaseDate => format_date(asset.purchase_date),
            Column::PriceUsd => grouped_integer(asset.price_usd),
            Column::Currency => asset.currency.code().to_string(),
            Column::LocalPrice => grouped_integer(asset.local_price()),
        }
    }
}

/// One tracked hardware unit.
///
/// Purchase facts are fixed at construction. The currency is derived from
/// the office once, here, and has no setter.
#[derive(Debug, Clone, PartialEq)]
pub struct Asset {
    kind: AssetKind,
    brand: String,
    model: String,
    office: String,
    purchase_date: PurchaseDate,
    price_usd: Price,
    currency: Currency,
}

impl Asset {
    /// Create a new asset. Inputs are assumed to be validated by the caller.
    pub fn new(
        kind: AssetKind,
        brand: impl Into<String>,
        model: impl Into<String>,
        office: impl Into<String>,
        purchase_date: PurchaseDate,
        price_usd: Price,
    ) -> Self {
        let office = office.into();
        let currency = currency_for_office(&office);
        Self {
            kind,
            brand: brand.into(),
            model: model.into(),
            office,
            purchase_date,
            price_usd,
            currency,
        }
    }

    /// Create a computer asset
    pub fn computer(
        brand: impl Into<String>,
        model: impl Into<String>,
        office: impl Into<String>,
        purchase_date: PurchaseDate,
        price_usd: Price,
    ) -> Self {
        Self::new(AssetKind::Computer, brand, model, office, purchase_date, price_usd)
    }

    /// Create a phone asset
    pub fn phone(
        brand: impl Into<String>,
        model: impl Into<String>,
        office: impl Into<String>,
        purchase_date: PurchaseDate,
        price_usd: Price,
    ) -> Self {
        Self::new(AssetKind::Phone, brand, model, office, purchase_date, price_usd)
    }

    pub fn kind(&self) -> AssetKind {
        self.kind
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn office(&self) -> &str {
        &self.office
    }

    pub fn purchase_date(&self) -> PurchaseDate {
        self.purchase_date
    }

    pub fn price_usd(&self) -> Price {
        self.price_usd
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Purchase price converted into the office currency
    pub fn local_price(&self) -> Price {
        self.currency.convert(self.price_usd)
    }

    /// Rendered field at an ordinal position (0..=7)
    pub fn field_at(&self, index: usize) -> Result<String> {
        Column::from_index(index)
            .map(|column| column.render(self))
            .ok_or(TrackerError::OutOfRange {
                index,
                max: COLUMN_COUNT - 1,
            })
    }

    /// All rendered fields in column order
    pub fn fields(&self) -> [String; COLUMN_COUNT] {
        Column::ALL.map(|column| column.render(self))
    }

    /// Record fields, with the blank spacer after the kind
    pub fn record_fields(&self) -> Vec<String> {
        let mut fields = Vec::with_capacity(COLUMN_COUNT + 1);
        for column in Column::ALL {
            fields.push(column.render(self));
            if column == Column::Kind {
                fields.push(" ".repeat(RECORD_SPACER_WIDTH));
            }
        }
        fields
    }

    /// One comma-separated record line (no terminator, no quoting)
    pub fn to_record(&self) -> String {
        self.record_fields().join(",")
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} @ {} ({})",
            self.kind, self.brand, self.model, self.office, self.currency
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_asset_creation() {
        let asset = Asset::computer("Dell", "XPS", "Sweden", date(2023, 1, 1), 1000.0);
        assert_eq!(asset.kind(), AssetKind::Computer);
        assert_eq!(asset.brand(), "Dell");
        assert_eq!(asset.model(), "XPS");
        assert_eq!(asset.office(), "Sweden");
        assert_eq!(asset.purchase_date(), date(2023, 1, 1));
        assert_eq!(asset.price_usd(), 1000.0);
        assert_eq!(asset.currency(), Currency::SEK);
    }

    #[test]
    fn test_currency_does_not_depend_on_kind() {
        let computer = Asset::computer("Lenovo", "X1", "Spain", date(2022, 3, 1), 500.0);
        let phone = Asset::phone("Samsung", "S23", "Spain", date(2022, 3, 1), 500.0);
        assert_eq!(computer.currency(), phone.currency());
        assert_relative_eq!(computer.local_price(), phone.local_price());
    }

    #[test]
    fn test_local_price() {
        let eur = Asset::phone("Apple", "iPhone", "Europe", date(2023, 1, 1), 1000.0);
        let sek = Asset::phone("Apple", "iPhone", "Sweden", date(2023, 1, 1), 1000.0);
        let usd = Asset::phone("Apple", "iPhone", "USA", date(2023, 1, 1), 1000.0);
        assert_relative_eq!(eur.local_price(), 920.0, epsilon = 1e-9);
        assert_relative_eq!(sek.local_price(), 10630.0, epsilon = 1e-9);
        assert_relative_eq!(usd.local_price(), 1000.0);
        // repeated calls stay stable
        assert_eq!(sek.local_price(), sek.local_price());
    }

    #[test]
    fn test_field_at() {
        let asset = Asset::computer("Dell", "XPS", "Sweden", date(2023, 1, 1), 1000.0);
        let expected = [
            "Computer", "Dell", "XPS", "Sweden", "01/01/2023", "1,000", "SEK", "10,630",
        ];
        for (index, value) in expected.iter().enumerate() {
            assert_eq!(asset.field_at(index).unwrap(), *value);
        }
        assert_eq!(asset.fields(), expected.map(String::from));
    }

    #[test]
    fn test_field_at_out_of_range() {
        let asset = Asset::phone("Apple", "iPhone", "USA", date(2023, 6, 15), 800.0);
        for index in [8, 9, 100, usize::MAX] {
            match asset.field_at(index) {
                Err(TrackerError::OutOfRange { index: got, max }) => {
                    assert_eq!(got, index);
                    assert_eq!(max, 7);
                }
                other => panic!("expected OutOfRange, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_column_order() {
        for (position, column) in Column::ALL.iter().enumerate() {
            assert_eq!(column.index(), position);
            assert_eq!(Column::from_index(position), Some(*column));
        }
        assert_eq!(Column::from_index(COLUMN_COUNT), None);
    }

    #[test]
    fn test_to_record() {
        let asset = Asset::computer("Dell", "XPS", "Sweden", date(2023, 1, 1), 1000.0);
        assert_eq!(
            asset.to_record(),
            "Computer,          ,Dell,XPS,Sweden,01/01/2023,1,000,SEK,10,630"
        );
        assert_eq!(asset.record_fields().len(), COLUMN_COUNT + 1);
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!(AssetKind::parse("computer"), Some(AssetKind::Computer));
        assert_eq!(AssetKind::parse("COMPUTER"), Some(AssetKind::Computer));
        assert_eq!(AssetKind::parse(" Phone\n"), Some(AssetKind::Phone));
        assert_eq!(AssetKind::parse("tablet"), None);
        assert_eq!(AssetKind::parse("done"), None);
    }

    #[test]
    fn test_asset_display() {
        let asset = Asset::phone("Apple", "iPhone", "USA", date(2023, 6, 15), 800.0);
        assert_eq!(format!("{}", asset), "Phone Apple iPhone @ USA (USD)");
    }
}
