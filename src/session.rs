//! The request/response flow tying the seams together.
//!
//! One invocation: read the selection, resolve the prepend text (either by
//! prompting the user or reusing the persisted value), send the assembled
//! prompt to the completion API, and splice the response into the document
//! below the selection. Each successful exchange is recorded in a bounded
//! history so the host can offer recent prompts back to the user.

use crate::completion::{CompletionClient, CompletionRequest};
use crate::config::Config;
use crate::host::EditorHost;
use crate::ring_buffer::RingBuffer;
use crate::state::{StateStore, PREPEND_TEXT_KEY};
use anyhow::Result;

/// One completed prompt/response exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRecord {
    /// Prepend text used for the request.
    pub prefix: String,
    /// Completion text inserted into the document.
    pub response: String,
}

/// How an invocation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The completion was inserted below the selection.
    Inserted,
    /// No active editor or empty selection; nothing was done.
    NoSelection,
    /// The completion API failed; the error was shown to the user.
    CompletionFailed,
}

/// A plugin session: the three external seams, the configuration, and the
/// bounded history of recent exchanges.
pub struct Session<H, S, C> {
    host: H,
    state: S,
    client: C,
    config: Config,
    history: RingBuffer<PromptRecord>,
}

impl<H, S, C> Session<H, S, C>
where
    H: EditorHost,
    S: StateStore,
    C: CompletionClient,
{
    /// Build a session. Fails if the configuration cannot drive one
    /// (empty model, zero history size).
    pub fn new(host: H, state: S, client: C, config: Config) -> Result<Self> {
        config.validate()?;
        let history = RingBuffer::new(config.history_size)?;
        Ok(Self {
            host,
            state,
            client,
            config,
            history,
        })
    }

    /// Run one invocation.
    ///
    /// `prompt_for_input` distinguishes the two commands the plugin
    /// registers: the prompting command shows an input box seeded with the
    /// persisted prepend text, while the shortcut command reuses the
    /// persisted text as-is. A dismissed input box also falls back to the
    /// persisted text.
    ///
    /// Completion failures are surfaced through the host and reported as
    /// [`Outcome::CompletionFailed`] rather than returned as errors; only
    /// state-store and host edit failures propagate.
    pub fn run(&mut self, prompt_for_input: bool) -> Result<Outcome> {
        let Some(selection) = self.host.selected_text() else {
            tracing::debug!("no active selection; nothing to do");
            return Ok(Outcome::NoSelection);
        };

        let previous = self.state.get(PREPEND_TEXT_KEY).unwrap_or_default();
        let mut prefix = previous.clone();
        if prompt_for_input {
            if let Some(input) = self.host.read_input("Enter the prepend text", &previous) {
                prefix = input;
                self.state.set(PREPEND_TEXT_KEY, &prefix)?;
            }
        }

        let request = CompletionRequest {
            model: self.config.model.clone(),
            prompt: format!("{}\n\n{}", prefix, selection),
        };
        tracing::debug!(
            model = %request.model,
            prompt_len = request.prompt.len(),
            "sending completion request"
        );

        let response = match self.client.complete(&request) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("completion request failed: {e}");
                self.host
                    .show_error(&format!("Failed to call completion API: {e}"));
                return Ok(Outcome::CompletionFailed);
            }
        };

        // Leading newline keeps the response on its own line below the
        // selection.
        self.host.insert_below_selection(&format!("\n{response}"))?;
        self.history.enqueue(PromptRecord { prefix, response });
        Ok(Outcome::Inserted)
    }

    /// Recent exchanges, oldest to newest.
    pub fn recent_history(&self) -> impl Iterator<Item = &PromptRecord> {
        self.history.iter()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn client(&self) -> &C {
        &self.client
    }
}
