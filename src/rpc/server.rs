//! gRPC server implementation for the item service.

use std::panic::AssertUnwindSafe;

use futures_util::FutureExt;
use tonic::{Request, Response, Status};

use crate::item::translate;
use crate::upstream::UpstreamClient;

/// Generated protobuf types.
pub mod proto {
    pub mod item {
        pub mod v1 {
            tonic::include_proto!("item.v1");
        }
    }
}

use proto::item::v1::{
    item_service_server::{ItemService, ItemServiceServer},
    GetItemRequest, ItemResponse,
};

/// gRPC service implementation backed by the upstream client.
pub struct ItemServiceImpl {
    upstream: UpstreamClient,
}

impl ItemServiceImpl {
    pub fn new(upstream: UpstreamClient) -> Self {
        Self { upstream }
    }
}

#[tonic::async_trait]
impl ItemService for ItemServiceImpl {
    async fn get_item(
        &self,
        request: Request<GetItemRequest>,
    ) -> Result<Response<ItemResponse>, Status> {
        let item_id = request.into_inner().item_id;
        tracing::info!(item_id, "rpc item lookup");

        // The method contract is Ok for every outcome: upstream failures are
        // data in the `error` field, and a panic while composing the response
        // is downgraded to the same field at this boundary.
        let compose = AssertUnwindSafe(self.compose_response(item_id)).catch_unwind();
        let response = match compose.await {
            Ok(response) => response,
            Err(panic) => {
                let detail = panic_detail(panic.as_ref());
                tracing::error!(item_id, error = %detail, "rpc handler panicked");
                ItemResponse {
                    error: format!("internal error: {}", detail),
                    ..Default::default()
                }
            }
        };

        Ok(Response::new(response))
    }
}

impl ItemServiceImpl {
    async fn compose_response(&self, item_id: i32) -> ItemResponse {
        let outcome = self.upstream.fetch_item(item_id).await;
        match translate(outcome) {
            Ok(item) => {
                tracing::info!(item_id, "rpc item fetched");
                ItemResponse {
                    id: item.id,
                    title: item.title,
                    body: item.body,
                    user_id: item.owner_id,
                    error: String::new(),
                }
            }
            Err(err) => {
                tracing::error!(item_id, error = %err, "rpc item lookup failed");
                ItemResponse {
                    error: err.to_string(),
                    ..Default::default()
                }
            }
        }
    }
}

fn panic_detail(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Create an item service server with the given upstream client.
pub fn make_item_service(upstream: UpstreamClient) -> ItemServiceServer<ItemServiceImpl> {
    ItemServiceServer::new(ItemServiceImpl::new(upstream))
}
