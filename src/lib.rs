//! FOSSify library
//!
//! Bootloop-protected removal of Android bloatware over adb: a static package
//! catalog, a mode-gated safety policy, and a sequential executor driving a
//! device channel.

pub mod catalog;
pub mod cli;
pub mod command_runner;
pub mod config;
pub mod confirm;
pub mod console;
pub mod device;
pub mod error;
pub mod executor;
pub mod policy;
pub mod process_guard;
pub mod types;

// Re-export main types for convenience
pub use catalog::{Catalog, PackageGroup, PackageRecord};
pub use config::Settings;
pub use confirm::{Confirm, ConfirmOutcome, LineConfirm};
pub use console::ConsoleReporter;
pub use device::{AdbChannel, DeviceChannel};
pub use error::{FossifyError, Result};
pub use executor::{Executor, PackageOutcome, PackageStatus, RunObserver, RunReport, RunTally};
pub use policy::{Action, PackageList, Plan};
pub use process_guard::{CommandProcessGroup, InFlight};
pub use types::{Classification, Mode};
