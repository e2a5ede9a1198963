//! HTTP client for the Financial Advisor API.
//!
//! One endpoint, one call: `POST {base_url}/chat` with a JSON body
//! carrying the user's message. The reply is arbitrary JSON and is
//! returned verbatim. The status code is not inspected, so a non-2xx
//! response with a JSON body still counts as a reply and gets rendered
//! as-is. The only error class is "the request failed": connection
//! errors and non-JSON bodies both surface as `Err`.

use anyhow::Result;
use serde_json::{Value, json};

#[derive(Debug, Clone)]
pub struct AdvisorClient {
    base_url: String,
    http: reqwest::Client,
}

impl AdvisorClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    /// Sends one message and parses whatever comes back as JSON.
    ///
    /// No retries, no timeout, no auth.
    pub async fn chat(&self, message: &str) -> Result<Value> {
        let res = self
            .http
            .post(format!("{}/chat", self.base_url))
            .header("Content-Type", "application/json")
            .json(&json!({ "message": message }))
            .send()
            .await?;
        let payload = res.json::<Value>().await?;
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::{ChatSession, connection_error};

    #[tokio::test]
    async fn returns_reply_verbatim() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("POST", "/chat")
            .match_header("content-type", "application/json")
            .match_body(mockito::Matcher::Json(json!({ "message": "where do I invest?" })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"advice":"diversify"}"#)
            .create_async()
            .await;

        let client = AdvisorClient::new(server.url());
        let payload = client.chat("where do I invest?").await.unwrap();
        assert_eq!(payload, json!({ "advice": "diversify" }));
        m.assert_async().await;
    }

    #[tokio::test]
    async fn non_2xx_json_body_is_still_a_reply() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/chat")
            .with_status(500)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error":"model overloaded"}"#)
            .create_async()
            .await;

        let client = AdvisorClient::new(server.url());
        let payload = client.chat("hi").await.unwrap();
        assert_eq!(payload, json!({ "error": "model overloaded" }));
    }

    #[tokio::test]
    async fn non_json_body_is_an_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/chat")
            .with_status(200)
            .with_body("<html>gateway timeout</html>")
            .create_async()
            .await;

        let client = AdvisorClient::new(server.url());
        assert!(client.chat("hi").await.is_err());
    }

    #[tokio::test]
    async fn connection_refused_is_an_error() {
        // Nothing listens on port 1.
        let client = AdvisorClient::new("http://127.0.0.1:1");
        assert!(client.chat("hi").await.is_err());
    }

    // Full request cycle the way the chat page drives it: begin, await,
    // map the error arm to the fixed payload, complete.
    #[tokio::test]
    async fn failed_cycle_ends_idle_with_error_payload() {
        let client = AdvisorClient::new("http://127.0.0.1:1");
        let mut session = ChatSession::new();
        session.update_draft("anyone there?".into());

        let msg = session.begin_submission().unwrap();
        let payload = client.chat(&msg).await.unwrap_or_else(|_| connection_error());
        session.complete_submission(payload);

        assert!(!session.is_pending());
        assert_eq!(session.response(), Some(&connection_error()));
        // Resubmittable afterwards.
        assert!(session.begin_submission().is_some());
    }

    #[tokio::test]
    async fn successful_cycle_ends_idle_with_reply() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/chat")
            .with_status(200)
            .with_body(r#"{"advice":"diversify"}"#)
            .create_async()
            .await;

        let client = AdvisorClient::new(server.url());
        let mut session = ChatSession::new();
        session.update_draft("where do I invest?".into());

        let msg = session.begin_submission().unwrap();
        let payload = client.chat(&msg).await.unwrap_or_else(|_| connection_error());
        session.complete_submission(payload);

        assert!(!session.is_pending());
        assert_eq!(session.response(), Some(&json!({ "advice": "diversify" })));
    }
}
