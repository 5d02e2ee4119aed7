//! One module per command. Each exposes a `run_prefix` entry point invoked
//! from the dispatcher, plus pure argument parsers the tests exercise
//! directly.

pub mod add_service;
pub mod add_subscription;
pub mod services;
