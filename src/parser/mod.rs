/*!
Wire-format decoding of path attributes and the AS_PATH payload.
*/
mod aspath;
mod attributes;
mod utils;

pub use aspath::parse_as_path;
pub use attributes::{find_as_path, parse_attribute, parse_attributes};
pub use utils::ReadUtils;
