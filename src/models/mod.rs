/*!
Typed entities shared by the parser and the snapshot pipeline.
*/
mod asn;
mod aspath;
mod attr;
mod family;

pub use asn::*;
pub use aspath::*;
pub use attr::*;
pub use family::*;
