//! Completion API abstraction.
//!
//! The remote completion endpoint is an external collaborator: this crate
//! defines the request shape and the `CompletionClient` seam, and leaves the
//! wire protocol (transport, authentication, response schema) to the
//! implementation bound by the host integration. Tests use the canned
//! implementation below.

use std::cell::RefCell;
use std::collections::VecDeque;

/// A single completion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    /// Model identifier, from the configuration.
    pub model: String,
    /// Fully assembled prompt (prepend text plus selection).
    pub prompt: String,
}

/// Abstraction over the remote completion API.
pub trait CompletionClient {
    /// Submit a request and return the completion text.
    fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionError {
    /// Transport or provider failure, with the provider's message.
    Api(String),
    /// The provider answered but returned no completion choices.
    EmptyResponse,
}

impl std::fmt::Display for CompletionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompletionError::Api(msg) => write!(f, "completion API error: {msg}"),
            CompletionError::EmptyResponse => {
                write!(f, "completion API returned no choices")
            }
        }
    }
}

impl std::error::Error for CompletionError {}

/// Canned implementation for tests: replays queued results and records
/// every request it was handed.
///
/// `complete` takes `&self`, so the queues live behind `RefCell`; the seam
/// is single-threaded like the rest of the plugin.
#[derive(Debug, Default)]
pub struct CannedClient {
    responses: RefCell<VecDeque<Result<String, CompletionError>>>,
    requests: RefCell<Vec<CompletionRequest>>,
}

impl CannedClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful completion.
    pub fn push_ok(&self, text: &str) {
        self.responses
            .borrow_mut()
            .push_back(Ok(text.to_string()));
    }

    /// Queue a failure.
    pub fn push_err(&self, error: CompletionError) {
        self.responses.borrow_mut().push_back(Err(error));
    }

    /// Requests received so far, in call order.
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.borrow().clone()
    }
}

impl CompletionClient for CannedClient {
    fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        self.requests.borrow_mut().push(request.clone());
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or(Err(CompletionError::EmptyResponse))
    }
}
