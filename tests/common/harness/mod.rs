//! Test harness for CLI integration tests.
//!
//! Provides isolated vault environments and CLI assertion helpers built on
//! `assert_cmd`.

mod command;
mod env;

#[allow(unused_imports)]
pub use command::AlmanacCommand;
#[allow(unused_imports)]
pub use env::TestVault;
