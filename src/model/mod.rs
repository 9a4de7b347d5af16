pub mod catalog;
pub mod config;
pub mod ledger;

pub use config::*;
pub use ledger::*;
