/*!
Prefix-to-origin-ASN accumulation for one snapshot.
*/
use crate::models::Asn;
use ipnet::IpNet;
use std::collections::HashMap;
use thiserror::Error;

/// Duplicate announcement of a prefix within one snapshot.
///
/// The table keeps the first value it saw and hands the conflict back to the
/// caller to report; a snapshot is expected to list each prefix once, so a
/// repeat is a data-integrity problem, never something to overwrite over.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("prefix {prefix} already mapped to AS{kept}, ignoring AS{dropped}")]
pub struct DuplicatePrefix {
    pub prefix: IpNet,
    pub kept: Asn,
    pub dropped: Asn,
}

/// Mapping from announced prefix to origin ASN with insertion-ordered
/// iteration.
///
/// First-seen order is preserved so a deterministic snapshot always
/// serializes to identical bytes.
#[derive(Debug, Default)]
pub struct PrefixAsnTable {
    entries: Vec<(IpNet, Asn)>,
    index: HashMap<IpNet, Asn>,
}

impl PrefixAsnTable {
    pub fn new() -> PrefixAsnTable {
        PrefixAsnTable::default()
    }

    /// Insert a resolved prefix. A prefix seen before is left untouched and
    /// the conflict is returned instead.
    pub fn insert(&mut self, prefix: IpNet, asn: Asn) -> Result<(), DuplicatePrefix> {
        if let Some(&kept) = self.index.get(&prefix) {
            return Err(DuplicatePrefix {
                prefix,
                kept,
                dropped: asn,
            });
        }
        self.index.insert(prefix, asn);
        self.entries.push((prefix, asn));
        Ok(())
    }

    pub fn get(&self, prefix: &IpNet) -> Option<Asn> {
        self.index.get(prefix).copied()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (IpNet, Asn)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn net(s: &str) -> IpNet {
        s.parse().unwrap()
    }

    #[test]
    fn test_duplicate_keeps_first_value() {
        let mut table = PrefixAsnTable::new();
        table.insert(net("10.0.0.0/24"), Asn::new(100)).unwrap();

        let err = table.insert(net("10.0.0.0/24"), Asn::new(200)).unwrap_err();
        assert_eq!(
            err,
            DuplicatePrefix {
                prefix: net("10.0.0.0/24"),
                kept: Asn::new(100),
                dropped: Asn::new(200),
            }
        );
        assert_eq!(table.get(&net("10.0.0.0/24")), Some(Asn::new(100)));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_iteration_is_insertion_ordered() {
        let mut table = PrefixAsnTable::new();
        table.insert(net("192.0.2.0/24"), Asn::new(3)).unwrap();
        table.insert(net("10.0.0.0/8"), Asn::new(1)).unwrap();
        table.insert(net("2001:db8::/32"), Asn::new(2)).unwrap();

        let entries: Vec<_> = table.iter().collect();
        assert_eq!(
            entries,
            vec![
                (net("192.0.2.0/24"), Asn::new(3)),
                (net("10.0.0.0/8"), Asn::new(1)),
                (net("2001:db8::/32"), Asn::new(2)),
            ]
        );
    }
}
