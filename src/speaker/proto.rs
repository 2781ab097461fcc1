/*!
Hand-maintained mirror of the slice of the GoBGP v3 `apipb` API this tool
consumes: `ListPath` over the global RIB with binary path attributes
enabled. Field tags track `api/gobgp.proto` of the GoBGP tree; unknown
fields are skipped by the protobuf codec, so the messages only spell out
what is actually read.
*/

#[derive(Clone, Copy, Debug, PartialEq, Eq, ::prost::Enumeration)]
#[repr(i32)]
pub enum Afi {
    Unknown = 0,
    Ip = 1,
    Ip6 = 2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ::prost::Enumeration)]
#[repr(i32)]
pub enum Safi {
    Unknown = 0,
    Unicast = 1,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ::prost::Enumeration)]
#[repr(i32)]
pub enum TableType {
    Global = 0,
    Local = 1,
    AdjIn = 2,
    AdjOut = 3,
    Vrf = 4,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Family {
    #[prost(enumeration = "Afi", tag = "1")]
    pub afi: i32,
    #[prost(enumeration = "Safi", tag = "2")]
    pub safi: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListPathRequest {
    #[prost(enumeration = "TableType", tag = "1")]
    pub table_type: i32,
    #[prost(string, tag = "2")]
    pub name: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "3")]
    pub family: ::core::option::Option<Family>,
    #[prost(bool, tag = "7")]
    pub enable_only_binary: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListPathResponse {
    #[prost(message, optional, tag = "1")]
    pub destination: ::core::option::Option<Destination>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Destination {
    #[prost(string, tag = "1")]
    pub prefix: ::prost::alloc::string::String,
    #[prost(message, repeated, tag = "2")]
    pub paths: ::prost::alloc::vec::Vec<Path>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Path {
    #[prost(bool, tag = "4")]
    pub best: bool,
    #[prost(bytes = "bytes", repeated, tag = "22")]
    pub pattrs_binary: ::prost::alloc::vec::Vec<::prost::bytes::Bytes>,
}

/// Generated-style client for the `apipb.GobgpApi` service.
pub mod gobgp_api_client {
    #![allow(unused_variables, dead_code, missing_docs, clippy::wildcard_imports)]
    use tonic::codegen::*;

    #[derive(Debug, Clone)]
    pub struct GobgpApiClient<T> {
        inner: tonic::client::Grpc<T>,
    }

    impl GobgpApiClient<tonic::transport::Channel> {
        /// Attempt to create a new client by connecting to a given endpoint.
        pub async fn connect<D>(dst: D) -> Result<Self, tonic::transport::Error>
        where
            D: TryInto<tonic::transport::Endpoint>,
            D::Error: Into<StdError>,
        {
            let conn = tonic::transport::Endpoint::new(dst)?.connect().await?;
            Ok(Self::new(conn))
        }
    }

    impl<T> GobgpApiClient<T>
    where
        T: tonic::client::GrpcService<tonic::body::BoxBody>,
        T::Error: Into<StdError>,
        T::ResponseBody: Body<Data = Bytes> + std::marker::Send + 'static,
        <T::ResponseBody as Body>::Error: Into<StdError> + std::marker::Send,
    {
        pub fn new(inner: T) -> Self {
            let inner = tonic::client::Grpc::new(inner);
            Self { inner }
        }

        pub async fn list_path(
            &mut self,
            request: impl tonic::IntoRequest<super::ListPathRequest>,
        ) -> std::result::Result<
            tonic::Response<tonic::codec::Streaming<super::ListPathResponse>>,
            tonic::Status,
        > {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/apipb.GobgpApi/ListPath");
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("apipb.GobgpApi", "ListPath"));
            self.inner.server_streaming(req, path, codec).await
        }
    }
}
