/*!
error module defines the error types used while decoding path attributes.
*/
use thiserror::Error;

/// Errors raised while decoding a route's path attributes.
///
/// These are always scoped to a single route: the snapshot pipeline records
/// them as per-prefix diagnostics and moves on to the next route.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParserError {
    /// The attribute data ended before the declared structure did.
    #[error("unexpected end of attribute data")]
    NotEnoughBytes,

    /// An attribute header declared a value length larger than the bytes
    /// actually present.
    #[error("attribute value length {declared} overruns the {remaining} remaining bytes")]
    InvalidAttrLength { declared: usize, remaining: usize },

    /// An AS path segment carried a type code outside RFC 4271/RFC 5065.
    #[error("invalid AS path segment type: {0}")]
    InvalidSegmentType(u8),

    /// Data left over after the declared end of an attribute value.
    #[error("{0} trailing bytes after attribute value")]
    TrailingBytes(usize),
}
