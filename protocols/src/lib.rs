//! Wire formats spoken by asnmap's registry collaborators.
//!
//! Everything in here is pure: building request payloads and decoding
//! responses. Sockets and HTTP live in `asnmap-core`.

pub mod cymru;
pub mod rdap;
