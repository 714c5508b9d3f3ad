//! Client for the external search service

use crate::config::SearchServiceConfig;
use crate::directory::wire::{self, AGGREGATIONS_PATH, SEARCH_PATH};
use async_trait::async_trait;
use std::time::Duration;
use tonic::client::Grpc;
use tonic::codec::ProstCodec;
use tonic::codegen::http::uri::PathAndQuery;
use tonic::transport::{Channel, ClientTlsConfig, Endpoint};
use tonic::{Request, Status};

/// Request/response boundary to the search service
#[async_trait]
pub trait SearchServiceClient: Send + Sync {
    async fn search(&self, request: wire::SearchRequest) -> Result<wire::SearchResponse, Status>;

    async fn aggregations(
        &self,
        request: wire::AggregationsRequest,
    ) -> Result<wire::AggregationsResponse, Status>;
}

/// tonic-backed search service client
#[derive(Debug, Clone)]
pub struct GrpcSearchClient {
    inner: Grpc<Channel>,
    request_timeout: Duration,
}

impl GrpcSearchClient {
    /// Connect to the configured endpoint
    pub async fn connect(config: &SearchServiceConfig) -> Result<Self, tonic::transport::Error> {
        let channel = endpoint(config)?.connect().await?;

        tracing::info!(endpoint = %config.endpoint, "Connected to search service");

        Ok(Self::new(
            channel,
            Duration::from_secs(config.request_timeout_secs),
        ))
    }

    pub fn new(channel: Channel, request_timeout: Duration) -> Self {
        Self {
            inner: Grpc::new(channel),
            request_timeout,
        }
    }

    async fn unary<Req, Resp>(&self, path: &'static str, message: Req) -> Result<Resp, Status>
    where
        Req: prost::Message + Send + Sync + 'static,
        Resp: prost::Message + Default + Send + Sync + 'static,
    {
        let mut grpc = self.inner.clone();
        grpc.ready()
            .await
            .map_err(|e| Status::unavailable(format!("search service not ready: {}", e)))?;

        let mut request = Request::new(message);
        request.set_timeout(self.request_timeout);

        let codec: ProstCodec<Req, Resp> = ProstCodec::default();
        let response = grpc
            .unary(request, PathAndQuery::from_static(path), codec)
            .await?;

        Ok(response.into_inner())
    }
}

/// Endpoint for the configured address; `https` endpoints use TLS with system roots
fn endpoint(config: &SearchServiceConfig) -> Result<Endpoint, tonic::transport::Error> {
    let endpoint = Endpoint::from_shared(config.endpoint.clone())?
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs));

    if endpoint.uri().scheme_str() == Some("https") {
        return endpoint.tls_config(ClientTlsConfig::new());
    }
    Ok(endpoint)
}

#[async_trait]
impl SearchServiceClient for GrpcSearchClient {
    async fn search(&self, request: wire::SearchRequest) -> Result<wire::SearchResponse, Status> {
        self.unary(SEARCH_PATH, request).await
    }

    async fn aggregations(
        &self,
        request: wire::AggregationsRequest,
    ) -> Result<wire::AggregationsResponse, Status> {
        self.unary(AGGREGATIONS_PATH, request).await
    }
}
