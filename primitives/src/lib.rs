#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod access;
pub mod ecosystem;
pub mod ledger;
pub mod token;

pub use access::*;
pub use ecosystem::*;
pub use ledger::*;
pub use token::*;
