//! # ptrwalk common
//!
//! Models and helpers shared by every crate in the workspace.
//!
//! * **[`network`]**: subnet mask analysis, host ranges and host records.
//! * **[`error`]**: typed failures raised by the models and resolvers.
//! * **[`config`]**: runtime settings collected by the CLI.
//! * **[`utils`]**: small IP helpers.

pub mod config;
pub mod error;
pub mod network;
pub mod utils;

#[doc(hidden)]
pub use tracing as __tracing;

/// Target used for raw terminal output. Events on it are written without decoration.
pub const PRINT_TARGET: &str = "ptrwalk::print";

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::__tracing::info!(target: "ptrwalk", $($arg)*)
    };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::__tracing::info!(target: "ptrwalk::success", $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::__tracing::warn!(target: "ptrwalk", $($arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::__tracing::error!(target: "ptrwalk", $($arg)*)
    };
}
