//! Handler registry seam
//!
//! The dispatcher is a pure consumer of `HandlerRegistry`: it resolves a
//! handler per call and never owns or caches the routing table. `RouteTable`
//! is a minimal exact-match implementation for embedding and tests.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use http::Method;

use crate::channel::SyntheticChannel;
use crate::errors::DispatchError;
use crate::request::SyntheticRequest;

#[async_trait]
pub trait RouteHandler: Send + Sync {
    /// Processes one request, responding through `channel` at most once.
    ///
    /// Returning `Err` signals a failure that happened before any response
    /// could be delivered. Handlers may move the channel into spawned work
    /// and deliver later; the dispatch caller waits either way.
    async fn handle(
        &self,
        request: SyntheticRequest,
        channel: SyntheticChannel,
    ) -> Result<(), DispatchError>;
}

pub trait HandlerRegistry: Send + Sync {
    fn resolve(&self, method: &Method, path: &str) -> Option<Arc<dyn RouteHandler>>;
}

#[derive(Default)]
pub struct RouteTable {
    routes: HashMap<(Method, String), Arc<dyn RouteHandler>>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        method: Method,
        path: impl Into<String>,
        handler: Arc<dyn RouteHandler>,
    ) {
        self.routes.insert((method, path.into()), handler);
    }
}

impl HandlerRegistry for RouteTable {
    fn resolve(&self, method: &Method, path: &str) -> Option<Arc<dyn RouteHandler>> {
        self.routes
            .get(&(method.clone(), path.to_string()))
            .cloned()
    }
}
