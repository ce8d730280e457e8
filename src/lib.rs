//! # Calmaria - Wellness Catalog TUI
//!
//! A terminal browser for a small wellness catalog, built with Rust and Ratatui.
//! The home screen pairs a search bar with a horizontally scrolling row of
//! body-focus exercises and a two-row grid of favorite collections; a bottom
//! navigation bar switches between the home and profile screens.
//!
//! ## Architecture Overview
//!
//! The crate is organized around components driven by an action channel:
//!
//! - **Catalog** (`catalog`): Immutable item catalogs and the search filter
//! - **Resources** (`resources`): Locale-aware string and glyph lookup
//! - **Actions** (`action`): Events that can change component state
//! - **Components** (`components`): Screens that update on actions and render
//! - **Router** (`router`): Named-route navigation with back-stack clearing
//!
//! All state changes flow through [`Action`](action::Action) values drained by
//! the [`App`](app::App) event loop, so every keystroke that edits the search
//! query re-renders the filtered catalog on the same pass.
//!
//! ## Modules
//!
//! - [`catalog`] - Item catalogs and filtering
//! - [`resources`] - Locale-dependent resource lookup
//! - [`components`] - UI components
//! - [`widgets`] - Stateless render widgets
//! - [`config`] - Configuration management

pub mod action;
pub mod app;
pub mod catalog;
pub mod cli;
pub mod components;
pub mod config;
pub mod mode;
pub mod resources;
pub mod router;
pub mod tui;
pub mod utils;
pub mod widgets;

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
