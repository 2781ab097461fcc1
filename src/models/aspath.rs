use crate::models::Asn;
use itertools::Itertools;
use std::fmt::{Display, Formatter};

/// Enum of AS path segment.
///
/// Sequence segments are ordered; set segments are unordered aggregates.
/// Segment kinds 1 and 2 are defined by RFC 4271, the confederation kinds 3
/// and 4 by RFC 5065.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AsPathSegment {
    AsSequence(Vec<Asn>),
    AsSet(Vec<Asn>),
    ConfedSequence(Vec<Asn>),
    ConfedSet(Vec<Asn>),
}

impl AsPathSegment {
    /// Shorthand for creating an `AsSequence` segment.
    pub fn sequence<S: AsRef<[u32]>>(seq: S) -> Self {
        AsPathSegment::AsSequence(seq.as_ref().iter().copied().map_into().collect())
    }

    /// Shorthand for creating an `AsSet` segment.
    pub fn set<S: AsRef<[u32]>>(seq: S) -> Self {
        AsPathSegment::AsSet(seq.as_ref().iter().copied().map_into().collect())
    }

    /// Number of ASNs within this segment.
    pub fn len(&self) -> usize {
        self.as_ref().len()
    }

    /// Returns true if this segment has a length of 0.
    pub fn is_empty(&self) -> bool {
        self.as_ref().is_empty()
    }
}

impl AsRef<[Asn]> for AsPathSegment {
    fn as_ref(&self) -> &[Asn] {
        let (AsPathSegment::AsSequence(x)
        | AsPathSegment::AsSet(x)
        | AsPathSegment::ConfedSequence(x)
        | AsPathSegment::ConfedSet(x)) = self;
        x
    }
}

/// An ordered list of path segments, the segment nearest the local speaker
/// first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AsPath {
    pub segments: Vec<AsPathSegment>,
}

impl AsPath {
    pub fn new() -> AsPath {
        AsPath {
            segments: Vec::new(),
        }
    }

    pub fn from_segments(segments: Vec<AsPathSegment>) -> AsPath {
        AsPath { segments }
    }

    /// Adds a new segment to the end of the path.
    pub fn append_segment(&mut self, segment: AsPathSegment) {
        self.segments.push(segment);
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl Display for AsPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (index, segment) in self.segments.iter().enumerate() {
            if index != 0 {
                write!(f, " ")?;
            }

            match segment {
                AsPathSegment::AsSequence(v) | AsPathSegment::ConfedSequence(v) => {
                    write!(f, "{}", v.iter().join(" "))?;
                }
                AsPathSegment::AsSet(v) | AsPathSegment::ConfedSet(v) => {
                    write!(f, "{{{}}}", v.iter().join(","))?;
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_helpers() {
        let segment = AsPathSegment::sequence([64496, 64497]);
        assert_eq!(segment.len(), 2);
        assert!(!segment.is_empty());
        assert_eq!(segment.as_ref(), &[Asn::new(64496), Asn::new(64497)]);

        assert!(AsPathSegment::sequence([]).is_empty());
    }

    #[test]
    fn test_display() {
        let path = AsPath::from_segments(vec![
            AsPathSegment::sequence([64496, 64497]),
            AsPathSegment::set([64511, 64510]),
        ]);
        assert_eq!(path.to_string(), "64496 64497 {64511,64510}");
    }
}
