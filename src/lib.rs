//! Niwa - a kanji garden in your terminal
//!
//! Niwa teaches the Genki kanji through short guided lessons, scored daily
//! review, and free-study flashcards, and grows a little garden as you
//! learn.

pub mod app;
pub mod catalog;
pub mod config;
pub mod garden;
pub mod learn;
pub mod mnemonic;
pub mod review;
pub mod storage;
pub mod theme;
pub mod ui;

pub use app::App;
pub use catalog::Catalog;
pub use config::Config;
pub use theme::Theme;
