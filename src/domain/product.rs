//! Product identifiers and the symbol table.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Exchange-internal numeric identifier for a tradable instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    /// Create a product id from its raw value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Raw numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Static mapping from uppercase symbol to product id.
///
/// Keys are normalized to uppercase at construction so lookups are
/// case-insensitive. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    entries: BTreeMap<String, ProductId>,
}

impl SymbolTable {
    /// Build a table from `(symbol, product id)` pairs.
    ///
    /// # Errors
    ///
    /// Returns an error if a symbol is empty or padded with whitespace, a
    /// product id is zero, or two symbols collide after case normalization.
    pub fn from_entries<I, S>(entries: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (S, u64)>,
        S: AsRef<str>,
    {
        let mut table = BTreeMap::new();
        for (symbol, id) in entries {
            let symbol = symbol.as_ref();
            let key = symbol.to_uppercase();
            if key.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "symbols",
                    reason: "symbol must not be empty".to_string(),
                });
            }
            // lookups do not trim, so a padded key could never match
            if key.trim() != key {
                return Err(ConfigError::InvalidValue {
                    field: "symbols",
                    reason: format!("symbol {symbol:?} has surrounding whitespace"),
                });
            }
            if id == 0 {
                return Err(ConfigError::InvalidValue {
                    field: "symbols",
                    reason: format!("product id for {symbol} must be greater than 0"),
                });
            }
            if table.insert(key, ProductId::new(id)).is_some() {
                return Err(ConfigError::InvalidValue {
                    field: "symbols",
                    reason: format!("duplicate symbol {symbol}"),
                });
            }
        }
        Ok(Self { entries: table })
    }

    /// Look up the product id for a symbol, ignoring case.
    #[must_use]
    pub fn get(&self, symbol: &str) -> Option<ProductId> {
        self.entries.get(&symbol.to_uppercase()).copied()
    }

    /// Supported symbols in sorted order.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> SymbolTable {
        SymbolTable::from_entries([("BTC", 1), ("eth", 2)]).unwrap()
    }

    #[test]
    fn lookup_ignores_case() {
        let table = table();
        assert_eq!(table.get("btc"), Some(ProductId::new(1)));
        assert_eq!(table.get("BTC"), table.get("bTc"));
        assert_eq!(table.get("ETH"), Some(ProductId::new(2)));
    }

    #[test]
    fn unknown_symbol_is_absent() {
        assert_eq!(table().get("DOGE"), None);
    }

    #[test]
    fn symbols_are_sorted_and_uppercase() {
        let table = table();
        let symbols: Vec<_> = table.symbols().collect();
        assert_eq!(symbols, vec!["BTC", "ETH"]);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn rejects_case_collisions() {
        let result = SymbolTable::from_entries([("btc", 1), ("BTC", 4)]);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue {
                field: "symbols",
                ..
            })
        ));
    }

    #[test]
    fn rejects_padded_symbols() {
        for padded in [" BTC", "ETH ", "\tBNB"] {
            assert!(matches!(
                SymbolTable::from_entries([(padded, 1)]),
                Err(ConfigError::InvalidValue {
                    field: "symbols",
                    ..
                })
            ));
        }
    }

    #[test]
    fn rejects_zero_product_id() {
        assert!(SymbolTable::from_entries([("BTC", 0)]).is_err());
    }

    #[test]
    fn product_id_displays_raw_value() {
        assert_eq!(ProductId::new(42).to_string(), "42");
    }
}
