#![no_std]

mod config;
mod engine;
mod errors;
mod events;
mod governance;
mod ledger;
mod registry;
mod timelock;
mod types;
mod wallet;


pub use crate::errors::WalletError;
pub use crate::types::{ExecutionPolicy, OwnerChange, Transaction};
pub use crate::wallet::{MultisigWallet, MultisigWalletClient};
