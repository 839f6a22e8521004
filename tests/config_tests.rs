use std::io::Write;

use perpwire::domain::ProductId;
use perpwire::error::{ConfigError, Error};
use perpwire::infrastructure::config::settings::Config;
use rust_decimal_macros::dec;

fn write_temp_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp config");
    file.write_all(contents.as_bytes()).expect("write temp config");
    file
}

#[test]
fn loads_full_config_from_file() {
    let file = write_temp_config(
        r#"
[exchange]
chain_name = "OPBNB"
chain_id = 204
rpc_url = "https://opbnb-mainnet-rpc.bnbchain.org"
execution_fee = 7000000000000
gas_limit = 600000

[exchange.contracts]
market = "0xa02d433868C7Ad58C8A2A820d6C3FF8a15536ACc"

[exchange.units]
price_decimals = 18
margin_decimals = 18
leverage_decimals = 0

[trading]
slippage = 0.01

[symbols]
BTC = 1
ETH = 2

[logging]
level = "debug"
format = "json"
"#,
    );

    let config = Config::load(file.path()).expect("config should load");
    assert_eq!(config.exchange.gas_limit, 600_000);
    assert_eq!(config.exchange.units.leverage_decimals, 0);
    assert_eq!(config.trading.slippage, dec!(0.01));
    assert!(config.logging.is_json());

    let table = config.symbol_table().unwrap();
    assert_eq!(table.get("eth"), Some(ProductId::new(2)));

    let exchange = config.exchange_config();
    assert_eq!(exchange.execution_fee, 7_000_000_000_000);
    // unspecified contracts keep the deployment defaults
    assert_eq!(
        exchange.contracts.vault,
        "0xA2E2F3726DF754C1848C8fd1CbeA6aAFF84FC5B2"
    );
}

#[test]
fn missing_file_is_read_error() {
    match Config::load("/nonexistent/perpwire.toml") {
        Err(Error::Config(ConfigError::ReadFile(_))) => {}
        other => panic!("expected read error, got {other:?}"),
    }
}

#[test]
fn malformed_toml_is_parse_error() {
    let file = write_temp_config("[exchange\nchain_id = ");
    match Config::load(file.path()) {
        Err(Error::Config(ConfigError::Parse(_))) => {}
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn rejects_negative_slippage() {
    let file = write_temp_config("[trading]\nslippage = -0.1\n");
    match Config::load(file.path()) {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "slippage",
            ..
        })) => {}
        other => panic!("expected invalid slippage, got {other:?}"),
    }
}

#[test]
fn rejects_empty_symbol_table() {
    let file = write_temp_config("[symbols]\n");
    match Config::load(file.path()) {
        Err(Error::Config(ConfigError::MissingField { field: "symbols" })) => {}
        other => panic!("expected missing symbols, got {other:?}"),
    }
}

#[test]
fn rejects_invalid_rpc_url() {
    let file = write_temp_config("[exchange]\nrpc_url = \"not a url\"\n");
    match Config::load(file.path()) {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "rpc_url",
            ..
        })) => {}
        other => panic!("expected invalid rpc_url, got {other:?}"),
    }
}

#[test]
fn rejects_symbol_with_surrounding_whitespace() {
    let file = write_temp_config("[symbols]\n\" BTC\" = 1\n");
    match Config::load(file.path()) {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "symbols",
            ..
        })) => {}
        other => panic!("expected invalid symbols, got {other:?}"),
    }
}
