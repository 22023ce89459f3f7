//! # Status Vocabulary and Normalizer
//!
//! The canonical five-value lifecycle status enum, plus the single
//! normalization boundary where free-form legacy status strings become
//! typed values.
//!
//! ## Invariant
//!
//! Every status written by this workspace goes through [`RegulationStatus`];
//! raw strings only exist read-side, where stored documents may carry
//! Title Case, snake_case, or legacy spellings. Normalization is
//! three-tiered: exact case-insensitive match, then separator-insensitive
//! match, then substring heuristics on the tokens `pending`, `review`,
//! `publish`, `revision`, `reject`, `approv`.
//!
//! [`StatusBucket::classify`] is the total fallback for read-side
//! grouping — pure, never panics, defaults to [`StatusBucket::Other`].

use serde::{Deserialize, Serialize};

/// The closed set of canonical lifecycle statuses.
///
/// `Published` is terminal. `NeedsRevision` is re-entrant: resubmission
/// returns the document to `PendingReview`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegulationStatus {
    /// Being authored, not yet submitted.
    Draft,
    /// Submitted, awaiting a reviewer decision.
    PendingReview,
    /// Sent back by a reviewer with a mandatory revision deadline.
    NeedsRevision,
    /// Approved by a reviewer, awaiting admin publication.
    PendingPublish,
    /// Published (terminal).
    Published,
}

impl RegulationStatus {
    /// All five canonical statuses, in lifecycle order.
    pub const ALL: [RegulationStatus; 5] = [
        Self::Draft,
        Self::PendingReview,
        Self::NeedsRevision,
        Self::PendingPublish,
        Self::Published,
    ];

    /// The legacy display spelling stored in documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::PendingReview => "Pending Review",
            Self::NeedsRevision => "Needs Revision",
            Self::PendingPublish => "Pending Publish",
            Self::Published => "Published",
        }
    }

    /// Whether this status is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Published)
    }

    /// Whether a reviewer decision is legal from this status.
    pub fn is_reviewable(&self) -> bool {
        matches!(self, Self::PendingReview | Self::NeedsRevision)
    }

    /// Map a free-form status string to a canonical status.
    ///
    /// Tier 1: case-insensitive exact match. Tier 2: match ignoring
    /// spaces, underscores, and hyphens (`pending_review`,
    /// `Pending-Review`). Tier 3: substring heuristics, including legacy
    /// spellings like `Pending Approval` and `under review`. Returns
    /// `None` only when no tier matches.
    pub fn normalize(raw: &str) -> Option<Self> {
        let folded = raw.trim().to_lowercase();
        let squeezed: String = folded
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect();

        // Tiers 1 and 2 collapse into one match once separators are gone.
        match squeezed.as_str() {
            "draft" => return Some(Self::Draft),
            "pendingreview" | "underreview" | "inreview" => return Some(Self::PendingReview),
            "needsrevision" | "revisionrequested" => return Some(Self::NeedsRevision),
            "pendingpublish" | "pendingapproval" | "approved" => {
                return Some(Self::PendingPublish)
            }
            "published" => return Some(Self::Published),
            _ => {}
        }

        // Tier 3: token heuristics. Revision and rejection outrank the
        // pending checks so "pending revision" lands on NeedsRevision.
        if squeezed.contains("revision") || squeezed.contains("reject") {
            Some(Self::NeedsRevision)
        } else if squeezed.contains("pending") && squeezed.contains("review") {
            Some(Self::PendingReview)
        } else if squeezed.contains("pending")
            && (squeezed.contains("publish") || squeezed.contains("approv"))
        {
            Some(Self::PendingPublish)
        } else if squeezed.contains("publish") {
            Some(Self::Published)
        } else if squeezed.contains("approv") {
            Some(Self::PendingPublish)
        } else if squeezed.contains("review") {
            Some(Self::PendingReview)
        } else if squeezed.contains("draft") {
            Some(Self::Draft)
        } else {
            None
        }
    }
}

impl std::fmt::Display for RegulationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// Persisted as the legacy display spelling; deserialization runs the
// normalizer so heterogeneous historical spellings decode cleanly.
impl Serialize for RegulationStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RegulationStatus {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::normalize(&raw).ok_or_else(|| {
            serde::de::Error::custom(format!("unrecognized regulation status: {raw:?}"))
        })
    }
}

/// Coarse read-side grouping bucket for dashboard queries.
///
/// Unlike [`RegulationStatus::normalize`], classification is total:
/// anything unrecognizable lands in [`StatusBucket::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusBucket {
    /// Awaiting a reviewer decision.
    NeedsReview,
    /// Sent back or rejected by a reviewer.
    Rejected,
    /// Awaiting admin action (publication).
    PendingAdmin,
    /// Fully published.
    Completed,
    /// Draft or unrecognized.
    Other,
}

impl StatusBucket {
    /// Classify any status string into a grouping bucket. Total and pure.
    pub fn classify(raw: &str) -> Self {
        match RegulationStatus::normalize(raw) {
            Some(RegulationStatus::PendingReview) => Self::NeedsReview,
            Some(RegulationStatus::NeedsRevision) => Self::Rejected,
            Some(RegulationStatus::PendingPublish) => Self::PendingAdmin,
            Some(RegulationStatus::Published) => Self::Completed,
            Some(RegulationStatus::Draft) | None => Self::Other,
        }
    }
}

impl std::fmt::Display for StatusBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::NeedsReview => "needs_review",
            Self::Rejected => "rejected",
            Self::PendingAdmin => "pending_admin",
            Self::Completed => "completed",
            Self::Other => "other",
        };
        f.write_str(s)
    }
}
