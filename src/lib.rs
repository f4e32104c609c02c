// Writing-assistant plugin core - editor-agnostic flow plus the bounded
// history buffer. Host integrations bind the EditorHost, StateStore, and
// CompletionClient seams to a concrete editor and completion provider.

pub mod completion;
pub mod config;
pub mod host;
pub mod ring_buffer;
pub mod session;
pub mod state;

pub use config::Config;
pub use ring_buffer::RingBuffer;
pub use session::{Outcome, Session};
