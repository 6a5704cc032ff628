//! 設定モジュール

mod cli;
mod constants;
mod env;

pub use cli::Cli;
pub use constants::{DEFAULT_HOST, DEFAULT_LANGUAGE, DEFAULT_PORT, DEFAULT_WORKERS};
pub use env::{Config, vars};
