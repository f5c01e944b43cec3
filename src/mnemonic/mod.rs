//! Mnemonic stories and AI generation
//!
//! Mnemonics come from two places: author-provided defaults in the catalog,
//! and the external generation backend (a thin proxy in front of an image /
//! text model). Generated stories and illustrations are persisted per
//! character.

mod client;
mod error;
mod store;

pub use client::{FALLBACK_MNEMONIC, GeneratorClient};
pub use error::GenerateError;
pub use store::MnemonicStore;
