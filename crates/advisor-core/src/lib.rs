//! # advisor-core
//!
//! Conversation primitives shared by the financial advisor agent.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                   SessionStore                        │
//! │  ┌────────────┐   ┌──────────────┐   ┌────────────┐  │
//! │  │ SessionId  │──▶│   Session    │──▶│ Conversation│  │
//! │  │ (key)      │   │ (metadata)   │   │ [Turn, ..]  │  │
//! │  └────────────┘   └──────────────┘   └────────────┘  │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! A `SessionStore` is injected into whoever owns the request flow, so tests
//! can build isolated stores instead of sharing process-global state.

pub mod error;
pub mod message;
pub mod session;

pub use error::{CoreError, Result};
pub use message::{Conversation, Role, Turn};
pub use session::{MemorySessionStore, Session, SessionId, SessionStore};
