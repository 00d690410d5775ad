//! Thin HTTP client for the Bot API.
//!
//! One POST per method call, JSON body in, [`ApiResponse`] envelope out.
//! The token lives only inside the request URL; errors are scrubbed so it
//! never reaches a log line.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use cb_core::ports::GatewayError;

use crate::api::types::{ApiResponse, GetUpdatesRequest, Update, User, ALLOWED_UPDATES};

const API_ROOT: &str = "https://api.telegram.org";

/// Ceiling for ordinary calls. `getUpdates` gets its own, wider window.
const CALL_TIMEOUT: Duration = Duration::from_secs(30);

/// Slack on top of the long-poll window before the client gives up.
const POLL_GRACE: Duration = Duration::from_secs(10);

pub struct BotApiClient {
    http: reqwest::Client,
    /// `<root>/bot<token>`, precomputed once.
    base: String,
}

impl BotApiClient {
    pub fn new(token: &str) -> Result<Self, GatewayError> {
        Self::with_api_root(API_ROOT, token)
    }

    /// Same client against a different API root, used by tests.
    pub fn with_api_root(root: &str, token: &str) -> Result<Self, GatewayError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|err| GatewayError::Transport(format!("building http client: {err}")))?;
        Ok(Self {
            http,
            base: format!("{}/bot{}", root.trim_end_matches('/'), token),
        })
    }

    /// Identity check; also the cheapest way to validate the token.
    pub async fn get_me(&self) -> Result<User, GatewayError> {
        self.call("getMe", &serde_json::json!({})).await
    }

    /// One long-poll pull. `timeout` is the server-side hold time; the
    /// HTTP timeout is widened accordingly.
    pub(crate) async fn get_updates(
        &self,
        offset: Option<i64>,
        timeout: Duration,
    ) -> Result<Vec<Update>, GatewayError> {
        let request = GetUpdatesRequest {
            offset,
            timeout: timeout.as_secs(),
            allowed_updates: &ALLOWED_UPDATES,
        };
        self.call_with_timeout("getUpdates", &request, timeout + POLL_GRACE)
            .await
    }

    /// Calls one Bot API method and unwraps the response envelope.
    pub(crate) async fn call<R, T>(&self, method: &str, payload: &R) -> Result<T, GatewayError>
    where
        R: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.call_with_timeout(method, payload, CALL_TIMEOUT).await
    }

    async fn call_with_timeout<R, T>(
        &self,
        method: &str,
        payload: &R,
        timeout: Duration,
    ) -> Result<T, GatewayError>
    where
        R: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}/{}", self.base, method);
        let response = self
            .http
            .post(&url)
            .timeout(timeout)
            .json(payload)
            .send()
            .await
            .map_err(|err| transport_error(method, err))?;

        let envelope: ApiResponse<T> = response
            .json()
            .await
            .map_err(|err| transport_error(method, err))?;

        if !envelope.ok {
            let error = GatewayError::Api {
                code: envelope.error_code.unwrap_or(0),
                description: envelope
                    .description
                    .unwrap_or_else(|| "no description".to_string()),
            };
            debug!(method, error = %error, "api call rejected");
            return Err(error);
        }

        envelope
            .result
            .ok_or_else(|| GatewayError::Transport(format!("{method}: ok response without a result")))
    }
}

/// reqwest errors render with the full URL, which embeds the token.
fn transport_error(method: &str, err: reqwest::Error) -> GatewayError {
    if err.is_timeout() {
        GatewayError::Transport(format!("{method}: request timed out"))
    } else {
        GatewayError::Transport(format!("{method}: {}", err.without_url()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;
    use serde_json::json;

    use crate::api::types::Message;

    fn client_for(server: &Server) -> BotApiClient {
        BotApiClient::with_api_root(&server.url(), "t0ken").unwrap()
    }

    #[tokio::test]
    async fn call_unwraps_the_result_envelope() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/bott0ken/sendMessage")
            .match_header("content-type", "application/json")
            .with_status(200)
            .with_body(
                json!({
                    "ok": true,
                    "result": {
                        "message_id": 5,
                        "date": 1735689600,
                        "chat": { "id": 9, "type": "private" }
                    }
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = client_for(&server);
        let message: Message = client
            .call("sendMessage", &json!({ "chat_id": 9, "text": "hi" }))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(message.message_id, 5);
    }

    #[tokio::test]
    async fn api_rejection_surfaces_code_and_description() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/bott0ken/editMessageText")
            .with_status(400)
            .with_body(
                json!({
                    "ok": false,
                    "error_code": 400,
                    "description": "Bad Request: message is not modified"
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client
            .call::<_, Message>("editMessageText", &json!({}))
            .await
            .unwrap_err();

        match &err {
            GatewayError::Api { code, .. } => assert_eq!(*code, 400),
            other => panic!("expected api error, got {other:?}"),
        }
        assert!(err.is_not_modified());
    }

    #[tokio::test]
    async fn ok_without_result_is_a_transport_error() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/bott0ken/getMe")
            .with_status(200)
            .with_body(json!({ "ok": true }).to_string())
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client.get_me().await.unwrap_err();
        assert!(matches!(err, GatewayError::Transport(_)));
    }

    #[tokio::test]
    async fn garbage_body_is_a_transport_error_without_the_token() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/bott0ken/getMe")
            .with_status(200)
            .with_body("<html>gateway timeout</html>")
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client.get_me().await.unwrap_err();
        assert!(!err.to_string().contains("t0ken"));
    }

    #[tokio::test]
    async fn get_updates_sends_offset_and_allowed_updates() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/bott0ken/getUpdates")
            .match_body(mockito::Matcher::PartialJson(json!({
                "offset": 12,
                "timeout": 0,
                "allowed_updates": ["message", "channel_post", "callback_query"]
            })))
            .with_status(200)
            .with_body(json!({ "ok": true, "result": [] }).to_string())
            .create_async()
            .await;

        let client = client_for(&server);
        let updates = client
            .get_updates(Some(12), Duration::from_secs(0))
            .await
            .unwrap();

        mock.assert_async().await;
        assert!(updates.is_empty());
    }
}
