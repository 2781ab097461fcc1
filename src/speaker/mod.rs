/*!
Client boundary to the BGP speaker.

The speaker is a black box that serves a fully materialized RIB snapshot
for one address family; everything downstream of this module is plain
synchronous decoding.
*/
pub mod proto;

use crate::models::AddressFamily;
use crate::snapshot::RouteUpdate;
use log::debug;
use proto::gobgp_api_client::GobgpApiClient;
use std::time::Duration;
use thiserror::Error;
use tonic::transport::{Channel, Endpoint};

/// Upper bound on the whole snapshot transfer.
const RPC_TIMEOUT: Duration = Duration::from_secs(1000);

/// Failure to reach the speaker or to pull the snapshot. Fatal to the run;
/// retrying is the transport operator's call, not ours.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("unable to reach BGP speaker: {0}")]
    Connect(#[from] tonic::transport::Error),
    #[error("RIB snapshot request failed: {0}")]
    Rpc(#[from] tonic::Status),
}

/// Simplified wrapper around the gRPC stub that hides the request
/// boilerplate.
pub struct SpeakerClient {
    inner: GobgpApiClient<Channel>,
}

impl SpeakerClient {
    /// Connect to a speaker endpoint. A bare `host:port` is accepted and
    /// treated as `http://host:port`.
    pub async fn connect(endpoint: &str) -> Result<SpeakerClient, FetchError> {
        let uri = match endpoint.contains("://") {
            true => endpoint.to_string(),
            false => format!("http://{}", endpoint),
        };
        let channel = Endpoint::from_shared(uri)?
            .timeout(RPC_TIMEOUT)
            .connect()
            .await?;
        Ok(SpeakerClient {
            inner: GobgpApiClient::new(channel),
        })
    }

    /// Pull the full RIB snapshot for one address family, materialized in
    /// the order the speaker streams it.
    ///
    /// Each route carries the attributes of the path the speaker marks as
    /// best, falling back to the first listed path. A destination without
    /// any path yields a route with no attributes; the snapshot pipeline
    /// classifies it like any other route lacking an AS_PATH.
    pub async fn list_rib(&mut self, family: AddressFamily) -> Result<Vec<RouteUpdate>, FetchError> {
        let request = proto::ListPathRequest {
            table_type: proto::TableType::Global as i32,
            name: String::new(),
            family: Some(family.into()),
            enable_only_binary: true,
        };

        let mut stream = self.inner.list_path(request).await?.into_inner();
        let mut routes = Vec::new();
        while let Some(response) = stream.message().await? {
            let destination = match response.destination {
                Some(d) => d,
                None => continue,
            };
            let attributes = best_path(&destination.paths)
                .map(|p| p.pattrs_binary.clone())
                .unwrap_or_default();
            routes.push(RouteUpdate {
                prefix: destination.prefix,
                attributes,
            });
        }

        debug!("materialized {} routes for {}", routes.len(), family);
        Ok(routes)
    }
}

fn best_path(paths: &[proto::Path]) -> Option<&proto::Path> {
    paths.iter().find(|p| p.best).or_else(|| paths.first())
}

impl From<AddressFamily> for proto::Family {
    fn from(family: AddressFamily) -> Self {
        let afi = match family {
            AddressFamily::Ipv4Unicast => proto::Afi::Ip,
            AddressFamily::Ipv6Unicast => proto::Afi::Ip6,
        };
        proto::Family {
            afi: afi as i32,
            safi: proto::Safi::Unicast as i32,
        }
    }
}
