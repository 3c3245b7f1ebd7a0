//! Synthetic response channel
//!
//! Stands in for a transport connection: it accepts exactly one response and
//! forwards it to the waiting dispatch caller. There is no socket behind it,
//! so there is nothing to close, no peer address, and no connection state.

use bytes::Bytes;
use http::StatusCode;
use tokio::sync::oneshot;
use tracing::warn;

use crate::errors::DispatchError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

pub type DeliveryResult = Result<HandlerResponse, DispatchError>;

#[derive(Debug)]
pub struct SyntheticChannel {
    sender: oneshot::Sender<DeliveryResult>,
}

impl SyntheticChannel {
    pub fn new() -> (Self, oneshot::Receiver<DeliveryResult>) {
        let (sender, receiver) = oneshot::channel();
        (Self { sender }, receiver)
    }

    /// Forwards the handler's response to the dispatch caller.
    ///
    /// Statuses of 400 and above become failures carrying the numeric code;
    /// everything below, redirects included, counts as success. Delivering
    /// consumes the channel, so a second response cannot be sent.
    pub fn deliver(self, response: HandlerResponse) {
        let status = response.status;
        let result = if status.as_u16() >= 400 {
            Err(DispatchError::failure_status(status, response.body))
        } else {
            Ok(response)
        };

        if self.sender.send(result).is_err() {
            warn!(
                status = status.as_u16(),
                "dispatch caller went away before the response was delivered"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{HandlerResponse, SyntheticChannel};
    use crate::errors::DispatchError;
    use bytes::Bytes;
    use http::StatusCode;

    #[tokio::test]
    async fn status_below_threshold_is_success() {
        let (channel, receiver) = SyntheticChannel::new();

        channel.deliver(HandlerResponse {
            status: StatusCode::OK,
            body: Bytes::from_static(b"{\"hits\":[]}"),
        });

        let response = receiver
            .await
            .expect("delivery received")
            .expect("success result");
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body, Bytes::from_static(b"{\"hits\":[]}"));
    }

    #[tokio::test]
    async fn redirect_is_success() {
        let (channel, receiver) = SyntheticChannel::new();

        channel.deliver(HandlerResponse {
            status: StatusCode::FOUND,
            body: Bytes::new(),
        });

        let response = receiver
            .await
            .expect("delivery received")
            .expect("redirects pass through as success");
        assert_eq!(response.status, StatusCode::FOUND);
    }

    #[tokio::test]
    async fn threshold_starts_at_400() {
        let (channel, receiver) = SyntheticChannel::new();

        channel.deliver(HandlerResponse {
            status: StatusCode::BAD_REQUEST,
            body: Bytes::new(),
        });

        let error = receiver
            .await
            .expect("delivery received")
            .expect_err("400 must fail");
        match error {
            DispatchError::FailureStatus { status, .. } => {
                assert_eq!(status, StatusCode::BAD_REQUEST);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn failure_diagnostic_contains_numeric_status() {
        let (channel, receiver) = SyntheticChannel::new();

        channel.deliver(HandlerResponse {
            status: StatusCode::SERVICE_UNAVAILABLE,
            body: Bytes::from_static(b"{\"error\":\"unavailable\"}"),
        });

        let error = receiver
            .await
            .expect("delivery received")
            .expect_err("503 must fail");
        assert!(error.to_string().contains("503"));
    }

    #[tokio::test]
    async fn delivery_after_caller_dropped_does_not_panic() {
        let (channel, receiver) = SyntheticChannel::new();
        drop(receiver);

        channel.deliver(HandlerResponse {
            status: StatusCode::OK,
            body: Bytes::new(),
        });
    }
}
