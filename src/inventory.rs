//! The in-memory asset collection for one run

use crate::asset::Asset;
use crate::error::Result;
use crate::store::RecordStore;
use crate::table::TableFormatter;

/// Ordered collection of assets, in the order they were entered
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    assets: Vec<Asset>,
}

impl Inventory {
    /// Create an empty inventory
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an asset at the end
    pub fn push(&mut self, asset: Asset) {
        log::debug!("Added asset: {}", asset);
        self.assets.push(asset);
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Asset> {
        self.assets.iter()
    }

    /// Assets in insertion order
    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    /// Export every asset through `store`, in insertion order
    pub fn export(&self, store: &RecordStore) -> Result<()> {
        store.save(&self.assets)
    }

    /// Table over the current assets
    pub fn table(&self) -> TableFormatter<'_> {
        TableFormatter::new(&self.assets)
    }
}

impl From<Vec<Asset>> for Inventory {
    fn from(assets: Vec<Asset>) -> Self {
        Self { assets }
    }
}

impl FromIterator<Asset> for Inventory {
    fn from_iter<I: IntoIterator<Item = Asset>>(iter: I) -> Self {
        Self {
            assets: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a Asset;
    type IntoIter = std::slice::Iter<'a, Asset>;

    fn into_iter(self) -> Self::IntoIter {
        self.assets.iter()
    }
}
