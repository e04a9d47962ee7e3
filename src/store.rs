//! Flat-file export of asset records
//!
//! Records are written unquoted: grouped prices keep their thousands
//! separators exactly as displayed, and the blank spacer after the kind is
//! preserved for compatibility with existing consumers of the file.

use crate::asset::{Asset, Column};
use crate::error::Result;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Writes asset collections as delimited records
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    /// Create a store targeting `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Target file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Header fields of the exported file
    pub fn header() -> Vec<&'static str> {
        Column::ALL.iter().map(|column| column.record_header()).collect()
    }

    /// Write the header and one record per asset, in the given order
    pub fn export<W: Write>(assets: &[Asset], sink: W) -> Result<()> {
        let mut writer = WriterBuilder::new()
            .quote_style(QuoteStyle::Never)
            .terminator(Terminator::Any(b'\n'))
            .flexible(true)
            .from_writer(sink);

        writer.write_record(Self::header())?;
        for asset in assets {
            writer.write_record(asset.record_fields())?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Create (or truncate) the target file and export into it
    pub fn save(&self, assets: &[Asset]) -> Result<()> {
        let file = File::create(&self.path)?;
        Self::export(assets, file)?;
        log::info!("Exported {} assets to {}", assets.len(), self.path.display());
        Ok(())
    }
}
