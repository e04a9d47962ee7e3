//! Line-based interactive collection of asset records
//!
//! Each record is prompted field by field. Dates and prices are re-asked
//! until they parse, so only well-formed values reach [`Asset::new`].
//! End of input is treated like `done`; a record cut short is dropped.

use crate::asset::{Asset, AssetKind};
use crate::error::Result;
use crate::format::{parse_date, parse_price};
use crate::inventory::Inventory;
use std::io::{BufRead, Write};

pub const KIND_PROMPT: &str = "Add a new asset (Computer/Phone) or type 'done' to finish:";
pub const KIND_RETRY: &str = "Unknown asset type. Please enter Computer, Phone or 'done':";
pub const BRAND_PROMPT: &str = "Enter brand:";
pub const MODEL_PROMPT: &str = "Enter model:";
pub const OFFICE_PROMPT: &str = "Enter office location:";
pub const DATE_PROMPT: &str = "Enter purchase date (MM/dd/yyyy):";
pub const DATE_RETRY: &str = "Invalid date format. Please enter the purchase date (MM/dd/yyyy):";
pub const PRICE_PROMPT: &str = "Enter price in USD:";
pub const PRICE_RETRY: &str = "Invalid input. Please enter the price in USD:";

const DONE: &str = "done";

/// Prompts on `output` and reads answers from `input`
pub struct InputCollector<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> InputCollector<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn prompt(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message)?;
        self.output.flush()?;
        Ok(())
    }

    /// Next trimmed line, `None` at end of input. Invalid UTF-8 is replaced
    /// rather than failing the whole session.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
    }

    fn ask(&mut self, message: &str) -> Result<Option<String>> {
        self.prompt(message)?;
        self.read_line()
    }

    fn ask_kind(&mut self) -> Result<Option<AssetKind>> {
        let mut message = KIND_PROMPT;
        loop {
            let answer = match self.ask(message)? {
                Some(answer) => answer,
                None => return Ok(None),
            };
            if answer.eq_ignore_ascii_case(DONE) {
                return Ok(None);
            }
            if let Some(kind) = AssetKind::parse(&answer) {
                return Ok(Some(kind));
            }
            log::debug!("Rejected asset type '{}'", answer);
            message = KIND_RETRY;
        }
    }

    /// Ask until `parse` accepts the answer
    fn ask_until<T>(
        &mut self,
        first: &str,
        retry: &str,
        parse: impl Fn(&str) -> Result<T>,
    ) -> Result<Option<T>> {
        let mut message = first;
        loop {
            let answer = match self.ask(message)? {
                Some(answer) => answer,
                None => return Ok(None),
            };
            match parse(&answer) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => log::debug!("{}", e),
            }
            message = retry;
        }
    }

    /// Prompt for one asset. `Ok(None)` once the user is done.
    pub fn next_asset(&mut self) -> Result<Option<Asset>> {
        let kind = match self.ask_kind()? {
            Some(kind) => kind,
            None => return Ok(None),
        };

        let (brand, model, office) = match (
            self.ask(BRAND_PROMPT)?,
            self.ask(MODEL_PROMPT)?,
            self.ask(OFFICE_PROMPT)?,
        ) {
            (Some(brand), Some(model), Some(office)) => (brand, model, office),
            _ => return Ok(None),
        };

        let purchase_date = match self.ask_until(DATE_PROMPT, DATE_RETRY, parse_date)? {
            Some(date) => date,
            None => return Ok(None),
        };
        let price_usd = match self.ask_until(PRICE_PROMPT, PRICE_RETRY, parse_price)? {
            Some(price) => price,
            None => return Ok(None),
        };
        if price_usd < 0.0 {
            log::warn!("Accepted negative price {} for {} {}", price_usd, brand, model);
        }

        Ok(Some(Asset::new(kind, brand, model, office, purchase_date, price_usd)))
    }

    /// Collect assets until the user types `done` or input ends
    pub fn collect(&mut self) -> Result<Inventory> {
        let mut inventory = Inventory::new();
        while let Some(asset) = self.next_asset()? {
            inventory.push(asset);
        }
        log::info!("Collected {} assets", inventory.len());
        Ok(inventory)
    }
}
