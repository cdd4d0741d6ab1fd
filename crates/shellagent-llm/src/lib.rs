//! Shellagent LLM - Hosted text generation behind one interface
//!
//! ## Providers
//! - Google Gemini (default): `generateContent` REST endpoint, key from
//!   `GEMINI_API_KEY`
//! - Deterministic: no network, canned output
//!
//! ## Thought generator
//!
//! [`ThoughtGenerator`] wraps a provider with the Crab-01 persona prompt. It
//! never fails: an empty answer and every error are turned into fixed
//! fallback strings. It is not wired into the dashboard.

pub mod providers;
pub mod router;
pub mod thought;
pub mod types;

pub use providers::*;
pub use router::*;
pub use thought::*;
pub use types::*;
