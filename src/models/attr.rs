use bitflags::bitflags;
use bytes::Bytes;
use num_enum::{FromPrimitive, IntoPrimitive};

bitflags! {
    /// Attribute flags octet.
    ///
    /// <https://datatracker.ietf.org/doc/html/rfc4271#section-4.3>
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct AttrFlags: u8 {
        const OPTIONAL = 0b1000_0000;
        const TRANSITIVE = 0b0100_0000;
        const PARTIAL = 0b0010_0000;
        const EXTENDED = 0b0001_0000;
    }
}

/// Path attribute type codes.
///
/// Only the codes a RIB export can reasonably carry are spelled out; any
/// other code lands in `Unknown` and is carried around undecoded. Full
/// registry:
/// <https://www.iana.org/assignments/bgp-parameters/bgp-parameters.xhtml#bgp-parameters-2>
#[allow(non_camel_case_types)]
#[derive(Debug, FromPrimitive, IntoPrimitive, PartialEq, Eq, Hash, Copy, Clone)]
#[repr(u8)]
pub enum AttrType {
    ORIGIN = 1,
    AS_PATH = 2,
    NEXT_HOP = 3,
    MULTI_EXIT_DISCRIMINATOR = 4,
    LOCAL_PREFERENCE = 5,
    ATOMIC_AGGREGATE = 6,
    AGGREGATOR = 7,
    COMMUNITIES = 8,
    ORIGINATOR_ID = 9,
    CLUSTER_LIST = 10,
    MP_REACHABLE_NLRI = 14,
    MP_UNREACHABLE_NLRI = 15,
    EXTENDED_COMMUNITIES = 16,
    AS4_PATH = 17,
    AS4_AGGREGATOR = 18,
    LARGE_COMMUNITIES = 32,

    /// Catch-all type for unassigned, deprecated, or reserved codes
    #[num_enum(catch_all)]
    Unknown(u8),
}

/// A single path attribute as handed over by the speaker: a type tag plus
/// the still-encoded value bytes.
///
/// The value is only meaningful to a decoder that has checked `attr_type`
/// first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeBlob {
    pub flags: AttrFlags,
    pub attr_type: AttrType,
    pub value: Bytes,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attr_type_from_code() {
        assert_eq!(AttrType::from(2), AttrType::AS_PATH);
        assert_eq!(AttrType::from(17), AttrType::AS4_PATH);
        assert_eq!(AttrType::from(251), AttrType::Unknown(251));
        assert_eq!(u8::from(AttrType::AS_PATH), 2);
    }
}
