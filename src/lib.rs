/*!
prefix2asn pulls the routing table of a BGP speaker over its gRPC API and
resolves every announced prefix to the origin ASN found in its AS_PATH
attribute, producing a flat `network,asn` CSV for network-topology and
traffic-attribution tooling.

The decoding core is usable on its own, without the speaker client:

```
use bytes::Bytes;
use prefix2asn::models::AsnLength;
use prefix2asn::origin::{resolve_origin, OriginPolicy};
use prefix2asn::parser::parse_as_path;

// one sequence segment, 2-octet encoding: 64496 64497
let payload = Bytes::from_static(&[2, 2, 0xfb, 0xf0, 0xfb, 0xf1]);
let path = parse_as_path(payload, AsnLength::Bits16)?;
let origin = resolve_origin(&path, OriginPolicy::FirstSegment)?;
assert_eq!(u32::from(origin), 64497);
# Ok::<(), Box<dyn std::error::Error>>(())
```
*/
pub mod csv;
pub mod error;
pub mod models;
pub mod origin;
pub mod parser;
pub mod report;
pub mod snapshot;
#[cfg(feature = "client")]
pub mod speaker;
pub mod table;

pub use crate::error::ParserError;
