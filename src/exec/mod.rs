// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`request`] holds the immutable description of what to run.
//! - [`environment`] computes the child's search path.
//! - [`launcher`] provides the `ProcessLauncher` trait and the
//!   `RealProcessLauncher` used in production, which tests can replace with
//!   a recording fake.

pub mod environment;
pub mod launcher;
pub mod request;

pub use environment::{default_bin_dir, path_with_binary};
pub use launcher::{ProcessLauncher, RealProcessLauncher};
pub use request::ExecutionRequest;
