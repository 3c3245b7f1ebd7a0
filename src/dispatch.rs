//! Dispatch of synthetic requests against the handler registry

use std::sync::Arc;

use tracing::{debug, warn};

use crate::channel::{HandlerResponse, SyntheticChannel};
use crate::errors::DispatchError;
use crate::registry::HandlerRegistry;
use crate::request::SyntheticRequest;

#[derive(Clone)]
pub struct Dispatcher {
    registry: Arc<dyn HandlerRegistry>,
}

impl Dispatcher {
    pub fn new(registry: Arc<dyn HandlerRegistry>) -> Self {
        Self { registry }
    }

    /// Resolves the handler for `request` and runs it against a fresh
    /// synthetic channel.
    ///
    /// Exactly one result comes back per call: the delivered response, the
    /// handler's own error if it failed before responding, or a diagnostic
    /// when no handler is registered or the handler finished without ever
    /// delivering.
    pub async fn dispatch(
        &self,
        request: SyntheticRequest,
    ) -> Result<HandlerResponse, DispatchError> {
        let method = request.method().clone();
        let path = request.path().to_string();

        let Some(handler) = self.registry.resolve(&method, &path) else {
            warn!(method = %method, path = %path, "dispatch target is not registered");
            return Err(DispatchError::unregistered_route(method, path));
        };

        debug!(method = %method, path = %path, "dispatching synthetic request");

        let (channel, receiver) = SyntheticChannel::new();
        handler.handle(request, channel).await?;

        match receiver.await {
            Ok(result) => result,
            Err(_) => {
                warn!(method = %method, path = %path, "handler finished without responding");
                Err(DispatchError::MissingResponse)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use bytes::Bytes;
    use http::{HeaderMap, Method, StatusCode};

    use super::Dispatcher;
    use crate::channel::{HandlerResponse, SyntheticChannel};
    use crate::errors::DispatchError;
    use crate::registry::{RouteHandler, RouteTable};
    use crate::request::{build_request, SyntheticRequest};

    struct FailsBeforeResponding;

    #[async_trait]
    impl RouteHandler for FailsBeforeResponding {
        async fn handle(
            &self,
            _request: SyntheticRequest,
            _channel: SyntheticChannel,
        ) -> Result<(), DispatchError> {
            Err(DispatchError::handler_failed(
                "backing_store_down",
                "backing store is unreachable",
            ))
        }
    }

    struct ForgetsToRespond;

    #[async_trait]
    impl RouteHandler for ForgetsToRespond {
        async fn handle(
            &self,
            _request: SyntheticRequest,
            _channel: SyntheticChannel,
        ) -> Result<(), DispatchError> {
            Ok(())
        }
    }

    struct RespondsFromSpawnedTask;

    #[async_trait]
    impl RouteHandler for RespondsFromSpawnedTask {
        async fn handle(
            &self,
            _request: SyntheticRequest,
            channel: SyntheticChannel,
        ) -> Result<(), DispatchError> {
            tokio::spawn(async move {
                tokio::task::yield_now().await;
                channel.deliver(HandlerResponse {
                    status: StatusCode::OK,
                    body: Bytes::from_static(b"deferred"),
                });
            });
            Ok(())
        }
    }

    fn dispatcher_with(path: &str, handler: Arc<dyn RouteHandler>) -> Dispatcher {
        let mut table = RouteTable::new();
        table.register(Method::GET, path, handler);
        Dispatcher::new(Arc::new(table))
    }

    #[tokio::test]
    async fn unregistered_route_fails_without_panicking() {
        let dispatcher = Dispatcher::new(Arc::new(RouteTable::new()));
        let request = build_request(Method::GET, "/items/_search", Bytes::new(), &HeaderMap::new());

        let error = dispatcher
            .dispatch(request)
            .await
            .expect_err("missing handler must fail");

        assert!(error.to_string().contains("no handler registered"));
        assert!(error.to_string().contains("/items/_search"));
    }

    #[tokio::test]
    async fn handler_error_before_delivery_becomes_the_result() {
        let dispatcher = dispatcher_with("/items", Arc::new(FailsBeforeResponding));
        let request = build_request(Method::GET, "/items", Bytes::new(), &HeaderMap::new());

        let error = dispatcher
            .dispatch(request)
            .await
            .expect_err("handler error must surface");

        assert!(matches!(error, DispatchError::HandlerFailed { .. }));
        assert!(error.to_string().contains("backing store is unreachable"));
    }

    #[tokio::test]
    async fn handler_that_never_responds_yields_missing_response() {
        let dispatcher = dispatcher_with("/items", Arc::new(ForgetsToRespond));
        let request = build_request(Method::GET, "/items", Bytes::new(), &HeaderMap::new());

        let error = dispatcher
            .dispatch(request)
            .await
            .expect_err("dropped channel must fail");

        assert!(matches!(error, DispatchError::MissingResponse));
    }

    #[tokio::test]
    async fn asynchronous_delivery_still_completes() {
        let dispatcher = dispatcher_with("/items", Arc::new(RespondsFromSpawnedTask));
        let request = build_request(Method::GET, "/items", Bytes::new(), &HeaderMap::new());

        let response = dispatcher
            .dispatch(request)
            .await
            .expect("deferred delivery succeeds");

        assert_eq!(response.body, Bytes::from_static(b"deferred"));
    }

    #[tokio::test]
    async fn lookup_uses_the_path_without_query_string() {
        let dispatcher = dispatcher_with("/items", Arc::new(RespondsFromSpawnedTask));
        let request = build_request(
            Method::GET,
            "/items?pretty=true",
            Bytes::new(),
            &HeaderMap::new(),
        );

        let response = dispatcher
            .dispatch(request)
            .await
            .expect("query string must not affect lookup");

        assert_eq!(response.status, StatusCode::OK);
    }
}
