/*!
Per-route origin resolution over a materialized RIB snapshot.
*/
use crate::models::{Asn, AsnLength};
use crate::origin::{resolve_origin, OriginPolicy, UnresolvedReason};
use crate::parser::{find_as_path, parse_as_path, parse_attributes};
use crate::report::{Diagnostic, DiagnosticKind};
use crate::table::PrefixAsnTable;
use bytes::Bytes;
use ipnet::IpNet;
use log::warn;

/// One announced prefix with the still-encoded path attributes of its
/// best path, as returned by the speaker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteUpdate {
    pub prefix: String,
    pub attributes: Vec<Bytes>,
}

/// Outcome of resolving one snapshot: the table plus every route that was
/// left out of it and why.
#[derive(Debug)]
pub struct SnapshotReport {
    pub table: PrefixAsnTable,
    pub diagnostics: Vec<Diagnostic>,
}

/// Resolve every route of a snapshot into the prefix table.
///
/// A route that cannot be resolved degrades the result set, never the run.
/// Routes are processed in input order, so the table and anything
/// serialized from it are deterministic for a given snapshot.
pub fn resolve_snapshot(routes: &[RouteUpdate], policy: OriginPolicy) -> SnapshotReport {
    let mut table = PrefixAsnTable::new();
    let mut diagnostics = Vec::new();

    for route in routes {
        let kind = match resolve_route(route, policy) {
            Ok((prefix, asn)) => match table.insert(prefix, asn) {
                Ok(()) => continue,
                Err(dup) => DiagnosticKind::DuplicatePrefix {
                    kept: dup.kept,
                    dropped: dup.dropped,
                },
            },
            Err(kind) => kind,
        };

        let diagnostic = Diagnostic {
            prefix: route.prefix.clone(),
            kind,
        };
        warn!("{}", diagnostic);
        diagnostics.push(diagnostic);
    }

    SnapshotReport { table, diagnostics }
}

fn resolve_route(route: &RouteUpdate, policy: OriginPolicy) -> Result<(IpNet, Asn), DiagnosticKind> {
    let prefix: IpNet = route
        .prefix
        .parse()
        .map_err(|e: ipnet::AddrParseError| DiagnosticKind::InvalidPrefix(e.to_string()))?;

    let attributes = parse_attributes(&route.attributes).map_err(DiagnosticKind::DecodeFailed)?;
    let blob = find_as_path(&attributes)
        .ok_or(DiagnosticKind::Unresolved(UnresolvedReason::MissingAsPath))?;

    // the speaker's RIB export always carries 4-octet ASNs
    let path = parse_as_path(blob.value.clone(), AsnLength::Bits32)
        .map_err(DiagnosticKind::DecodeFailed)?;
    let asn = resolve_origin(&path, policy).map_err(DiagnosticKind::Unresolved)?;

    Ok((prefix, asn))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParserError;

    /// Well-known transitive AS_PATH attribute with one sequence segment of
    /// 4-octet ASNs.
    fn as_path_attribute(asns: &[u32]) -> Bytes {
        let mut value = vec![2, asns.len() as u8];
        for asn in asns {
            value.extend_from_slice(&asn.to_be_bytes());
        }
        let mut data = vec![0x40, 2, value.len() as u8];
        data.extend_from_slice(&value);
        Bytes::from(data)
    }

    fn route(prefix: &str, attributes: Vec<Bytes>) -> RouteUpdate {
        RouteUpdate {
            prefix: prefix.to_string(),
            attributes,
        }
    }

    #[test]
    fn test_decode_failure_is_isolated() {
        let routes = vec![
            // declared length overruns the payload
            route("10.0.1.0/24", vec![Bytes::from_static(&[0x40, 2, 9, 2])]),
            route("10.0.2.0/24", vec![as_path_attribute(&[65001])]),
        ];

        let report = resolve_snapshot(&routes, OriginPolicy::FirstSegment);
        assert_eq!(report.table.len(), 1);
        assert_eq!(
            report.table.get(&"10.0.2.0/24".parse().unwrap()),
            Some(Asn::new(65001))
        );
        assert_eq!(report.diagnostics.len(), 1);
        assert_eq!(report.diagnostics[0].prefix, "10.0.1.0/24");
        assert!(matches!(
            report.diagnostics[0].kind,
            DiagnosticKind::DecodeFailed(ParserError::InvalidAttrLength { .. })
        ));
    }

    #[test]
    fn test_missing_as_path_is_reported() {
        let routes = vec![route("2001:db8::/32", vec![])];
        let report = resolve_snapshot(&routes, OriginPolicy::FirstSegment);
        assert!(report.table.is_empty());
        assert_eq!(
            report.diagnostics[0].kind,
            DiagnosticKind::Unresolved(UnresolvedReason::MissingAsPath)
        );
    }

    #[test]
    fn test_duplicate_prefix_keeps_first() {
        let routes = vec![
            route("10.0.0.0/24", vec![as_path_attribute(&[100])]),
            route("10.0.0.0/24", vec![as_path_attribute(&[200])]),
        ];

        let report = resolve_snapshot(&routes, OriginPolicy::FirstSegment);
        assert_eq!(
            report.table.get(&"10.0.0.0/24".parse().unwrap()),
            Some(Asn::new(100))
        );
        assert_eq!(
            report.diagnostics[0].kind,
            DiagnosticKind::DuplicatePrefix {
                kept: Asn::new(100),
                dropped: Asn::new(200),
            }
        );
    }

    #[test]
    fn test_invalid_prefix_is_reported() {
        let routes = vec![route("not-a-prefix", vec![as_path_attribute(&[100])])];
        let report = resolve_snapshot(&routes, OriginPolicy::FirstSegment);
        assert!(report.table.is_empty());
        assert!(matches!(
            report.diagnostics[0].kind,
            DiagnosticKind::InvalidPrefix(_)
        ));
    }

    #[test]
    fn test_empty_segment_is_reported() {
        // AS_PATH whose only segment declares zero ASNs
        let attr = Bytes::from_static(&[0x40, 2, 2, 2, 0]);
        let routes = vec![route("10.0.0.0/24", vec![attr])];
        let report = resolve_snapshot(&routes, OriginPolicy::FirstSegment);
        assert_eq!(
            report.diagnostics[0].kind,
            DiagnosticKind::Unresolved(UnresolvedReason::EmptySegment)
        );
    }
}
