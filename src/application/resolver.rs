//! Symbol resolution.

use crate::domain::product::{ProductId, SymbolTable};
use crate::error::TradeError;

/// Maps trading symbols to product ids using a static table.
///
/// Pure: no I/O and no state beyond the table.
#[derive(Debug, Clone)]
pub struct SymbolResolver {
    table: SymbolTable,
}

impl SymbolResolver {
    #[must_use]
    pub const fn new(table: SymbolTable) -> Self {
        Self { table }
    }

    /// Resolve a symbol, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`TradeError::UnsupportedSymbol`] carrying the symbol exactly
    /// as given when it is not in the table.
    pub fn resolve(&self, symbol: &str) -> Result<ProductId, TradeError> {
        self.table
            .get(symbol)
            .ok_or_else(|| TradeError::UnsupportedSymbol {
                symbol: symbol.to_string(),
            })
    }

    #[must_use]
    pub const fn table(&self) -> &SymbolTable {
        &self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> SymbolResolver {
        SymbolResolver::new(SymbolTable::from_entries([("BTC", 1), ("ETH", 2)]).unwrap())
    }

    #[test]
    fn resolve_is_case_insensitive() {
        let resolver = resolver();
        assert_eq!(resolver.resolve("btc").unwrap(), resolver.resolve("BTC").unwrap());
        assert_eq!(resolver.resolve("Eth").unwrap(), ProductId::new(2));
    }

    #[test]
    fn resolve_is_deterministic() {
        let resolver = resolver();
        let first = resolver.resolve("ETH").unwrap();
        for _ in 0..10 {
            assert_eq!(resolver.resolve("ETH").unwrap(), first);
        }
    }

    #[test]
    fn unknown_symbol_keeps_original_casing() {
        let err = resolver().resolve("dOGe").unwrap_err();
        assert_eq!(
            err,
            TradeError::UnsupportedSymbol {
                symbol: "dOGe".to_string()
            }
        );
    }
}
