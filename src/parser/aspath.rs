use crate::error::ParserError;
use crate::models::{AsPath, AsPathSegment, AsnLength};
use bytes::{Buf, Bytes};

use crate::parser::ReadUtils;

const AS_PATH_AS_SET: u8 = 1;
const AS_PATH_AS_SEQUENCE: u8 = 2;
// https://datatracker.ietf.org/doc/html/rfc5065
const AS_PATH_CONFED_SEQUENCE: u8 = 3;
const AS_PATH_CONFED_SET: u8 = 4;

/// Decode an AS_PATH attribute value into its segments.
///
/// The caller must already have matched the attribute's type tag; this
/// function cannot tell an unrelated payload apart from a corrupted AS_PATH.
///
/// An empty value decodes into an empty path and a zero-count segment
/// decodes into an empty segment. Classifying either is origin-resolution
/// policy, not a parse failure.
pub fn parse_as_path(mut input: Bytes, asn_len: AsnLength) -> Result<AsPath, ParserError> {
    let mut path = AsPath::new();
    while input.remaining() > 0 {
        let segment = parse_as_path_segment(&mut input, asn_len)?;
        path.append_segment(segment);
    }

    Ok(path)
}

fn parse_as_path_segment(
    input: &mut Bytes,
    asn_len: AsnLength,
) -> Result<AsPathSegment, ParserError> {
    let segment_type = input.read_u8()?;
    let count = input.read_u8()? as usize;
    let asns = input.read_asns(asn_len, count)?;
    match segment_type {
        AS_PATH_AS_SET => Ok(AsPathSegment::AsSet(asns)),
        AS_PATH_AS_SEQUENCE => Ok(AsPathSegment::AsSequence(asns)),
        AS_PATH_CONFED_SEQUENCE => Ok(AsPathSegment::ConfedSequence(asns)),
        AS_PATH_CONFED_SET => Ok(AsPathSegment::ConfedSet(asns)),
        t => Err(ParserError::InvalidSegmentType(t)),
    }
}
