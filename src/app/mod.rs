// ElementExplorer - app/mod.rs
//
// Application layer: state management and text presentation.
// Dependencies: core layer.
// Must NOT depend on: platform specifics.

pub mod report;
pub mod state;
