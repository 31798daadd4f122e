//! # CLI Module
//!
//! This module provides the terminal presentation layer of TuneCast. The
//! original experience is a three-screen mobile app; here the same screens are
//! drawn on the terminal:
//!
//! - **Welcome** - banner and a prompt to start
//! - **Loading** - a spinner while location, weather and playlists are fetched
//! - **Results** - the weather box and a numbered playlist grid whose entries
//!   open in the browser
//!
//! ## Commands
//!
//! - [`start`] - Runs a full session
//! - [`search`] - Live playlist search for a given condition, with fallback
//! - [`fallback`] - Prints the offline playlists for a condition
//! - [`mood`] - Prints the search term a condition maps to
//!
//! ## Architecture Design
//!
//! ```text
//! CLI Layer (render, prompts)
//!     ↓
//! Session Layer (app: Screen, Orchestrator)
//!     ↓
//! Client Layer (location, weather, spotify)
//!     ↓
//! Network Layer (HTTP Requests)
//! ```
//!
//! Nothing in this layer decides what to show: the orchestrator publishes
//! [`crate::types::Recommendations`] and the CLI renders them as they are.

mod mood;
mod playlists;
pub mod render;
mod session;

pub use mood::mood;
pub use playlists::fallback;
pub use playlists::search;
pub use session::SessionOptions;
pub use session::start;
