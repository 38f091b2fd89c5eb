#![warn(rust_2018_idioms)]

pub mod app;
pub mod config;
pub mod error;
pub mod handler;
pub mod healthcheck;
pub mod severity;
pub mod snapshot;
pub mod state;

pub use healthcheck::{healthcheck, healthcheck_with_port};
pub use severity::Severity;
pub use snapshot::Snapshot;
pub use state::{LogState, ModuleFilter};
