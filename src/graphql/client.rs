//! HTTP transport for GraphQL requests

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::common::Result;

use super::types::{GraphQLRequest, GraphQLResponse};

/// Something that can execute a GraphQL request against the subgraph
#[async_trait]
pub trait GraphQLTransport: Send + Sync {
    /// Send one request and return the decoded response envelope
    async fn execute(&self, request: &GraphQLRequest) -> Result<GraphQLResponse>;

    /// Human-readable target, used in console messages
    fn endpoint(&self) -> &str;
}

/// GraphQL over HTTP POST with a JSON body
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    /// Create a transport for an endpoint
    ///
    /// Without a `request_timeout` requests may wait indefinitely.
    pub fn new(endpoint: impl Into<String>, request_timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent("subgraph-tester");
        if let Some(timeout) = request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl GraphQLTransport for HttpTransport {
    async fn execute(&self, request: &GraphQLRequest) -> Result<GraphQLResponse> {
        // reqwest's `.json()` sets `Content-Type: application/json`
        let response = self.client.post(&self.endpoint).json(request).send().await?;

        // Error bodies still carry a GraphQL envelope, so the status is only logged.
        let status = response.status();
        let body = response.bytes().await?;
        tracing::debug!(%status, bytes = body.len(), "GraphQL response");

        let body: Value = serde_json::from_slice(&body)?;
        Ok(GraphQLResponse::from_value(body))
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Test double replaying canned responses in order
#[cfg(test)]
pub(crate) mod mock {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use super::*;

    /// One scripted reply
    pub enum Reply {
        Body(Value),
        /// Raw body text; anything that is not JSON fails like a real decode
        Raw(&'static str),
    }

    pub struct ScriptedTransport {
        replies: Mutex<VecDeque<Reply>>,
        fallback: Option<Value>,
        pub requests: Mutex<Vec<GraphQLRequest>>,
    }

    impl ScriptedTransport {
        pub fn new(replies: impl IntoIterator<Item = Reply>) -> Self {
            Self {
                replies: Mutex::new(replies.into_iter().collect()),
                fallback: None,
                requests: Mutex::new(Vec::new()),
            }
        }

        /// Reply with `body` once the script runs out
        pub fn repeating(body: Value) -> Self {
            Self {
                fallback: Some(body),
                ..Self::new(Vec::new())
            }
        }

        pub fn request_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl GraphQLTransport for ScriptedTransport {
        async fn execute(&self, request: &GraphQLRequest) -> Result<GraphQLResponse> {
            self.requests.lock().unwrap().push(request.clone());
            let reply = self.replies.lock().unwrap().pop_front();
            match (reply, &self.fallback) {
                (Some(Reply::Body(body)), _) => Ok(GraphQLResponse::from_value(body)),
                (Some(Reply::Raw(text)), _) => {
                    let body: Value = serde_json::from_str(text)?;
                    Ok(GraphQLResponse::from_value(body))
                }
                (None, Some(body)) => Ok(GraphQLResponse::from_value(body.clone())),
                (None, None) => panic!("no scripted reply left for {:?}", request.query),
            }
        }

        fn endpoint(&self) -> &str {
            "http://mock/subgraphs/name/test"
        }
    }
}
