//! roam-alfred core library
//!
//! Turns org-roam database rows into launcher result lists: property parsing,
//! node construction, matching and ranking, and projection into launcher items.
//! The history store, OS automation and the smaller helper tools live here too
//! so the binary stays a thin dispatch layer.

pub mod alfred;
pub mod automation;
pub mod capture;
pub mod config;
pub mod db;
pub mod error;
pub mod history;
pub mod link;
pub mod logging;
pub mod node;
pub mod projector;
pub mod props;
pub mod query;
pub mod translit;
