use crate::error::ParserError;
use crate::models::{AttrFlags, AttrType, AttributeBlob};
use bytes::{Buf, Bytes};
use log::debug;

use crate::parser::ReadUtils;

/// Split one encoded path attribute into its typed header and value.
///
/// Layout per RFC 4271 section 4.3: flags(1), type(1), then a one-byte value
/// length, or a two-byte length when the extended-length flag is set.
pub fn parse_attribute(mut data: Bytes) -> Result<AttributeBlob, ParserError> {
    let flags = AttrFlags::from_bits_retain(data.read_u8()?);
    let attr_type = AttrType::from(data.read_u8()?);
    let length = match flags.contains(AttrFlags::EXTENDED) {
        false => data.read_u8()? as usize,
        true => data.read_u16()? as usize,
    };

    debug!(
        "reading attribute: type -- {:?}, length -- {}",
        attr_type, length
    );

    if data.remaining() < length {
        return Err(ParserError::InvalidAttrLength {
            declared: length,
            remaining: data.remaining(),
        });
    }
    let value = data.split_to(length);
    if data.has_remaining() {
        return Err(ParserError::TrailingBytes(data.remaining()));
    }

    Ok(AttributeBlob {
        flags,
        attr_type,
        value,
    })
}

/// Materialize a route's full attribute list, one encoded attribute per
/// input element.
///
/// A single bad header fails the whole route; the caller decides whether
/// that is fatal.
pub fn parse_attributes(raw: &[Bytes]) -> Result<Vec<AttributeBlob>, ParserError> {
    raw.iter().cloned().map(parse_attribute).collect()
}

/// Find the AS_PATH attribute wherever it sits in the list.
///
/// Attribute order on the wire is not guaranteed, so lookup goes by type
/// tag, never by position. `None` covers both an empty list and a list
/// without an AS_PATH; filtered or locally originated routes legitimately
/// carry none.
pub fn find_as_path(attributes: &[AttributeBlob]) -> Option<&AttributeBlob> {
    attributes.iter().find(|a| a.attr_type == AttrType::AS_PATH)
}
