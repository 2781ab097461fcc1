/*!
Structured per-route diagnostics.

Anomalies found while resolving a snapshot are accumulated as records
rather than printed, so callers and tests can assert on them directly; the
pipeline additionally logs each one as it is recorded.
*/
use crate::error::ParserError;
use crate::models::Asn;
use crate::origin::UnresolvedReason;
use std::fmt::{Display, Formatter};

/// One route that contributed nothing (or a conflict) to the table.
#[derive(Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Prefix exactly as the speaker announced it.
    pub prefix: String,
    pub kind: DiagnosticKind,
}

#[derive(Debug, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// The prefix string itself is not valid CIDR notation.
    InvalidPrefix(String),
    /// The route's attributes or AS_PATH payload could not be decoded.
    DecodeFailed(ParserError),
    /// Attributes decoded fine but produced no origin ASN.
    Unresolved(UnresolvedReason),
    /// The prefix resolved a second time within one snapshot.
    DuplicatePrefix { kept: Asn, dropped: Asn },
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DiagnosticKind::InvalidPrefix(detail) => {
                write!(f, "{}: invalid prefix: {}", self.prefix, detail)
            }
            DiagnosticKind::DecodeFailed(e) => {
                write!(f, "{}: attribute decode failed: {}", self.prefix, e)
            }
            DiagnosticKind::Unresolved(reason) => {
                write!(f, "{}: origin unresolved: {}", self.prefix, reason)
            }
            DiagnosticKind::DuplicatePrefix { kept, dropped } => {
                write!(
                    f,
                    "{}: duplicate prefix, keeping AS{} and ignoring AS{}",
                    self.prefix, kept, dropped
                )
            }
        }
    }
}
