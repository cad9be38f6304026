//! # asnmap core
//!
//! The concurrent batch lookup engine. Three pieces, leaf first:
//!
//! * **[`resolver`]**: turns a host string into an address, touching DNS only
//!   for names.
//! * **[`lookup`]**: asks the registries who owns an address.
//! * **[`batch`]**: runs both over many hosts with a fixed worker pool and
//!   hands back one result per host, in input order.
//!
//! Higher layers should depend on the [`resolver::NameLookup`] and
//! [`lookup::LookupClient`] traits rather than on the concrete network
//! implementations, so the engine can be driven by mocks in tests.

pub mod batch;
pub mod lookup;
pub mod network;
pub mod resolver;
