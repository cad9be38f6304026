//! Types shared by every layer of asnmap: the lookup models, the per-host
//! error taxonomy, runtime configuration and IP address helpers.

pub mod config;
pub mod error;
pub mod lookup;
pub mod network;
pub mod utils;
