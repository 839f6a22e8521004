//! Canonical test configurations.
//!
//! Single source of truth for the exchange config and symbol table used
//! across tests.

use crate::domain::exchange::{ContractAddresses, ExchangeConfig, UnitScales};
use crate::domain::product::SymbolTable;

/// Well-known Anvil/Hardhat development key #0. Never holds real funds.
pub const DEV_PRIVATE_KEY: &str =
    "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

/// opBNB mainnet deployment with a development wallet.
pub fn exchange_config() -> ExchangeConfig {
    ExchangeConfig {
        chain_name: "OPBNB".to_string(),
        chain_id: 204,
        rpc_url: "http://127.0.0.1:8545".to_string(),
        contracts: ContractAddresses::default(),
        execution_fee: 7_000_000_000_000,
        gas_limit: 500_000,
        units: UnitScales::default(),
        wallet_address: None,
        signing_key: Some(DEV_PRIVATE_KEY.to_string()),
    }
}

/// BTC=1, ETH=2, BNB=3. DOGE is deliberately absent.
pub fn symbol_table() -> SymbolTable {
    SymbolTable::from_entries([("BTC", 1), ("ETH", 2), ("BNB", 3)])
        .expect("static symbol table is valid")
}
