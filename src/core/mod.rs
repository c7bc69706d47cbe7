// ElementExplorer - core/mod.rs
//
// Core business logic layer.
// Must NOT depend on: app, platform, or config handling.

pub mod criteria;
pub mod dataset;
pub mod export;
pub mod filter;
pub mod model;
