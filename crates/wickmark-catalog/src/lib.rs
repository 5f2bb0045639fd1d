//! Built-in candlestick pattern catalog for the wickmark icon generator.
//!
//! This crate provides the documented candle patterns, keyed by the file
//! stem their icon is written under.
//!
//! # Example
//!
//! ```
//! use wickmark_catalog::CandleCatalog;
//!
//! let catalog = CandleCatalog::global();
//!
//! if let Some(definition) = catalog.get("evening_star") {
//!     println!("{} ticks", definition.expand().len());
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/wickmark/wickmark/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

use std::collections::BTreeMap;
use std::sync::OnceLock;

use wickmark_types::CandleDefinition;

/// The pattern definitions embedded at compile time.
const CANDLES_JSON: &str = include_str!("../data/candles.json");

/// Global catalog instance.
static CATALOG: OnceLock<CandleCatalog> = OnceLock::new();

/// Named candle definitions.
#[derive(Debug, Clone, Default)]
pub struct CandleCatalog {
    candles: BTreeMap<String, CandleDefinition>,
}

impl CandleCatalog {
    /// Returns the built-in catalog.
    ///
    /// The catalog is parsed lazily on first access.
    #[must_use]
    pub fn global() -> &'static Self {
        CATALOG.get_or_init(|| Self::from_json(CANDLES_JSON).expect("Invalid candles.json"))
    }

    /// Parses a catalog from a JSON object mapping names to definitions.
    ///
    /// Names are stored upper-cased.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a definition is invalid.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let raw: BTreeMap<String, CandleDefinition> = serde_json::from_str(json)?;
        let candles = raw
            .into_iter()
            .map(|(name, definition)| (name.to_uppercase(), definition))
            .collect();
        Ok(Self { candles })
    }

    /// Looks up a definition by name (case-insensitive).
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CandleDefinition> {
        self.candles.get(&name.to_uppercase())
    }

    /// Returns all entries, sorted by name.
    pub fn all(&self) -> impl Iterator<Item = (&str, &CandleDefinition)> {
        self.candles.iter().map(|(name, def)| (name.as_str(), def))
    }

    /// Returns all names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.candles.keys().map(String::as_str)
    }

    /// Returns the number of definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.candles.len()
    }

    /// Returns true if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }
}
