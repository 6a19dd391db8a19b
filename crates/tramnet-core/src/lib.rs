//! Tramnet Core Library
//!
//! Graph layer, transit network model and query interpreter for the
//! tramnet query engine.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod network;
pub mod query;
