//! # Lookup Result Model
//!
//! What a batch run hands to the presenters: one [`LookupResult`] per input
//! host, either the registry record for its address or the reason it failed.

use std::net::IpAddr;

use crate::error::{LookupError, LookupFailure};

/// Ownership metadata extracted from the registries.
///
/// Every field is optional. A value the registry omitted, left blank or
/// marked as `NA` is stored as `None`; the two cases are not distinguished.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WhoisRecord {
    pub asn: Option<u32>,
    pub as_name: Option<String>,
    /// Two letter ISO country code of the AS, upper case.
    pub country: Option<String>,
    /// Allocated network block(s), joined with `", "` when there are several.
    pub cidr: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupResult {
    Success {
        host: String,
        ip: IpAddr,
        record: WhoisRecord,
    },
    Failure {
        host: String,
        error: LookupFailure,
    },
}

impl LookupResult {
    pub fn success(host: impl Into<String>, ip: IpAddr, record: WhoisRecord) -> Self {
        Self::Success {
            host: host.into(),
            ip,
            record,
        }
    }

    pub fn failure(host: impl Into<String>, error: impl Into<LookupFailure>) -> Self {
        Self::Failure {
            host: host.into(),
            error: error.into(),
        }
    }

    /// Result for a host whose worker went away before reporting back.
    pub fn abandoned(host: impl Into<String>) -> Self {
        Self::failure(host, LookupError::new("lookup task terminated before completing"))
    }

    /// The input string exactly as the caller supplied it.
    pub fn host(&self) -> &str {
        match self {
            Self::Success { host, .. } | Self::Failure { host, .. } => host,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Normalizes a raw registry value into the "missing means `None`" convention.
pub fn known_value(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("NA") {
        None
    } else {
        Some(trimmed.to_string())
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
