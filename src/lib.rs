// Library entry so integration tests and external tools can reference
// internal modules. The binary (`main.rs`) uses the same modules.
pub mod commands;
pub mod constants;
pub mod handler;
pub mod lifecycle;
pub mod model;
pub mod notify;
pub mod store;
pub mod ui;

pub use model::AppState;
