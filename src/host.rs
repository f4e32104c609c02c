//! Editor host abstraction.
//!
//! The plugin never talks to an editor API directly; everything it needs
//! from the host — the current selection, an input box, text insertion — is
//! behind the `EditorHost` trait. Production code binds this to the real
//! editor's extension API; tests use the scripted implementation below.

/// Abstraction over the host editor.
pub trait EditorHost {
    /// Text of the current selection. `None` when there is no active
    /// editor or nothing is selected.
    fn selected_text(&self) -> Option<String>;

    /// Show an input box seeded with `initial` and return what the user
    /// entered. `None` means the box was dismissed.
    fn read_input(&mut self, prompt: &str, initial: &str) -> Option<String>;

    /// Insert `text` at the start of the line following the selection end,
    /// then restore the selection the user had before the edit.
    fn insert_below_selection(&mut self, text: &str) -> Result<(), HostError>;

    /// Surface an error message to the user.
    fn show_error(&mut self, message: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    /// The host rejected the edit (read-only document, closed editor, ...).
    EditRejected(String),
}

impl std::fmt::Display for HostError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HostError::EditRejected(msg) => write!(f, "edit rejected by host: {msg}"),
        }
    }
}

impl std::error::Error for HostError {}

/// Scripted implementation for tests: a fixed selection, queued input-box
/// responses, and recordings of everything the plugin asked the host to do.
#[derive(Debug, Default)]
pub struct ScriptedHost {
    selection: Option<String>,
    input_responses: std::collections::VecDeque<Option<String>>,
    reject_edits: bool,
    /// Text passed to `insert_below_selection`, in call order.
    pub insertions: Vec<String>,
    /// Messages passed to `show_error`, in call order.
    pub errors: Vec<String>,
    /// Prompts shown by `read_input`, paired with their seed values.
    pub prompts: Vec<(String, String)>,
}

impl ScriptedHost {
    /// Host with an active selection.
    pub fn with_selection(text: &str) -> Self {
        Self {
            selection: Some(text.to_string()),
            ..Self::default()
        }
    }

    /// Host with no active editor or selection.
    pub fn without_selection() -> Self {
        Self::default()
    }

    /// Queue the next input-box response. `None` scripts a dismissal.
    pub fn push_input(&mut self, response: Option<&str>) {
        self.input_responses
            .push_back(response.map(|s| s.to_string()));
    }

    /// Make subsequent edits fail, as a read-only document would.
    pub fn reject_edits(&mut self) {
        self.reject_edits = true;
    }
}

impl EditorHost for ScriptedHost {
    fn selected_text(&self) -> Option<String> {
        self.selection.clone()
    }

    fn read_input(&mut self, prompt: &str, initial: &str) -> Option<String> {
        self.prompts.push((prompt.to_string(), initial.to_string()));
        self.input_responses.pop_front().flatten()
    }

    fn insert_below_selection(&mut self, text: &str) -> Result<(), HostError> {
        if self.reject_edits {
            return Err(HostError::EditRejected("document is read-only".to_string()));
        }
        self.insertions.push(text.to_string());
        Ok(())
    }

    fn show_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }
}
