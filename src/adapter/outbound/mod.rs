//! Outbound adapters (driven side).

#[cfg(feature = "kiloex")]
pub mod kiloex;
