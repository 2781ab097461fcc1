/*!
Origin-ASN selection over a decoded AS path.
*/
use crate::models::{AsPath, Asn};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

/// Which segment of the path supplies the origin ASN.
///
/// `FirstSegment` reads the segment nearest the local speaker and reports
/// its last ASN. That is what this tool has always written and what
/// downstream consumers of its CSV expect, even though the route's actual
/// originator is the last ASN of the *last* segment -- AS paths list ASes
/// nearest-first. Pick `LastSegment` for the conventional reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OriginPolicy {
    #[default]
    FirstSegment,
    LastSegment,
}

/// An origin policy token outside the supported set.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid origin policy {0:?}, available: first-segment, last-segment")]
pub struct InvalidOriginPolicy(pub String);

impl FromStr for OriginPolicy {
    type Err = InvalidOriginPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first-segment" => Ok(OriginPolicy::FirstSegment),
            "last-segment" => Ok(OriginPolicy::LastSegment),
            other => Err(InvalidOriginPolicy(other.to_string())),
        }
    }
}

impl Display for OriginPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            OriginPolicy::FirstSegment => write!(f, "first-segment"),
            OriginPolicy::LastSegment => write!(f, "last-segment"),
        }
    }
}

/// Why a route yielded no origin ASN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UnresolvedReason {
    /// The route carries no AS_PATH attribute at all.
    #[error("no AS path attribute present")]
    MissingAsPath,
    /// The attribute decoded into zero segments.
    #[error("AS path has no segments")]
    NoSegments,
    /// The inspected segment holds zero ASNs.
    #[error("AS path segment holds no ASNs")]
    EmptySegment,
}

/// Select the origin ASN of a decoded path under the given policy.
///
/// Within the inspected segment the last ASN wins; a single-ASN segment
/// yields that ASN. Set segments are unordered, so "last" is whatever
/// position the speaker stored them in -- stable for a given snapshot.
pub fn resolve_origin(path: &AsPath, policy: OriginPolicy) -> Result<Asn, UnresolvedReason> {
    let segment = match policy {
        OriginPolicy::FirstSegment => path.segments.first(),
        OriginPolicy::LastSegment => path.segments.last(),
    }
    .ok_or(UnresolvedReason::NoSegments)?;

    segment
        .as_ref()
        .last()
        .copied()
        .ok_or(UnresolvedReason::EmptySegment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AsPathSegment;

    #[test]
    fn test_single_asn_segment() {
        let path = AsPath::from_segments(vec![AsPathSegment::sequence([64512])]);
        assert_eq!(
            resolve_origin(&path, OriginPolicy::FirstSegment),
            Ok(Asn::new(64512))
        );
    }

    #[test]
    fn test_multiple_asns_take_last_of_first_segment() {
        let path = AsPath::from_segments(vec![AsPathSegment::sequence([64512, 64513, 64514])]);
        assert_eq!(
            resolve_origin(&path, OriginPolicy::FirstSegment),
            Ok(Asn::new(64514))
        );
    }

    #[test]
    fn test_policies_diverge_across_segments() {
        let path = AsPath::from_segments(vec![
            AsPathSegment::sequence([64512, 64513]),
            AsPathSegment::sequence([64514, 64515]),
        ]);
        assert_eq!(
            resolve_origin(&path, OriginPolicy::FirstSegment),
            Ok(Asn::new(64513))
        );
        assert_eq!(
            resolve_origin(&path, OriginPolicy::LastSegment),
            Ok(Asn::new(64515))
        );
    }

    #[test]
    fn test_empty_path() {
        assert_eq!(
            resolve_origin(&AsPath::new(), OriginPolicy::FirstSegment),
            Err(UnresolvedReason::NoSegments)
        );
    }

    #[test]
    fn test_empty_segment_is_surfaced() {
        let path = AsPath::from_segments(vec![AsPathSegment::sequence([])]);
        assert_eq!(
            resolve_origin(&path, OriginPolicy::FirstSegment),
            Err(UnresolvedReason::EmptySegment)
        );
    }

    #[test]
    fn test_policy_tokens() {
        assert_eq!("first-segment".parse(), Ok(OriginPolicy::FirstSegment));
        assert_eq!("last-segment".parse(), Ok(OriginPolicy::LastSegment));
        assert_eq!(OriginPolicy::default(), OriginPolicy::FirstSegment);
        assert!("origin".parse::<OriginPolicy>().is_err());
    }
}
