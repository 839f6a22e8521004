//! Infrastructure configuration modules.

pub mod exchange;
pub mod http;
pub mod logging;
pub mod settings;
pub mod trading;
pub mod wallet;
