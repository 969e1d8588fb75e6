//! Pipeline stage and validation check status enums.
//!
//! `Stage` serializes with the exact Salesforce picklist labels (spaces and
//! hyphens included). `CheckStatus` serializes in upper case to match the
//! validation report contract. Both provide `as_str()` and `Display` mirrors
//! of their serde form.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Stage
// ---------------------------------------------------------------------------

/// Pipeline stage of an opportunity.
///
/// This is a flat enumeration: any stage may follow any other. There is no
/// transition graph — stage changes are validated for membership only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Stage {
    Pending,
    Outreach,
    Engaged,
    Proposal,
    #[serde(rename = "Quote Follow-Up")]
    QuoteFollowUp,
    Finalizing,
    #[serde(rename = "Closed Won")]
    ClosedWon,
    #[serde(rename = "Closed Lost")]
    ClosedLost,
}

impl Stage {
    /// All valid stages, in pipeline order.
    pub const ALL: [Self; 8] = [
        Self::Pending,
        Self::Outreach,
        Self::Engaged,
        Self::Proposal,
        Self::QuoteFollowUp,
        Self::Finalizing,
        Self::ClosedWon,
        Self::ClosedLost,
    ];

    /// The Salesforce picklist label for this stage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Outreach => "Outreach",
            Self::Engaged => "Engaged",
            Self::Proposal => "Proposal",
            Self::QuoteFollowUp => "Quote Follow-Up",
            Self::Finalizing => "Finalizing",
            Self::ClosedWon => "Closed Won",
            Self::ClosedLost => "Closed Lost",
        }
    }

    /// Parse an exact picklist label. Case and whitespace variants are
    /// rejected — `"closed won"` and `" Closed Won "` are not stages.
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.as_str() == label)
    }

    /// The stage labels as a list, for read-mode responses and error bodies.
    #[must_use]
    pub fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|s| s.as_str()).collect()
    }

    /// Whether this stage marks a lost/cancelled deal.
    #[must_use]
    pub const fn is_lost(self) -> bool {
        matches!(self, Self::ClosedLost)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// CheckStatus
// ---------------------------------------------------------------------------

/// Outcome of a single renewal validation check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum CheckStatus {
    Pass,
    Fail,
    Warning,
    Skip,
    Info,
}

impl CheckStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Fail => "FAIL",
            Self::Warning => "WARNING",
            Self::Skip => "SKIP",
            Self::Info => "INFO",
        }
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
