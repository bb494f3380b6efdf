//! Financial Advisor
//!
//! Per-message pipeline: resolve the session, record the user turn, classify,
//! extract a ticker, render the reply and citations, record the assistant
//! turn.

use std::sync::Arc;

use advisor_core::{MemorySessionStore, Session, SessionId, SessionStore, Turn};
use chrono::Utc;

use crate::analysis::{classify, extract_ticker};
use crate::config::AdvisorConfig;
use crate::model::{ChatResponse, Portfolio};
use crate::response::{ResponseTemplate, citations};

/// Template-driven advisor over an injected session store
pub struct FinancialAdvisor {
    sessions: Arc<dyn SessionStore>,
    config: AdvisorConfig,
}

impl Default for FinancialAdvisor {
    fn default() -> Self {
        Self::in_memory(AdvisorConfig::default())
    }
}

impl FinancialAdvisor {
    pub fn new(sessions: Arc<dyn SessionStore>, config: AdvisorConfig) -> Self {
        Self { sessions, config }
    }

    /// Advisor backed by a fresh in-memory store
    pub fn in_memory(config: AdvisorConfig) -> Self {
        Self::new(Arc::new(MemorySessionStore::new()), config)
    }

    pub fn sessions(&self) -> &Arc<dyn SessionStore> {
        &self.sessions
    }

    pub const fn config(&self) -> &AdvisorConfig {
        &self.config
    }

    /// Snapshot of one session's history
    pub fn session(&self, id: &str) -> Option<Session> {
        self.sessions.get(&SessionId::from_string(id))
    }

    /// Process one user message.
    ///
    /// A missing or empty `session_id` starts a new session; a supplied one
    /// is reused verbatim. Accepts any text, including the empty string.
    pub fn process_message(
        &self,
        message: &str,
        session_id: Option<&str>,
        user_id: Option<&str>,
        portfolio: Option<&Portfolio>,
    ) -> ChatResponse {
        let session_id = session_id
            .filter(|id| !id.is_empty())
            .map_or_else(
                || SessionId::generate(&self.config.session_prefix),
                SessionId::from_string,
            );

        self.sessions.resolve(&session_id, user_id);
        self.sessions.append(&session_id, Turn::user(message));

        let analysis_type = classify(message);
        let ticker = extract_ticker(message);
        let reply = ResponseTemplate::select(analysis_type, message).render(
            ticker.as_deref(),
            portfolio,
            self.config.context_holdings,
        );
        let citations = citations(analysis_type, portfolio);

        self.sessions.append(&session_id, Turn::assistant(reply.clone()));

        tracing::debug!(
            session_id = %session_id,
            %analysis_type,
            ticker = ?ticker,
            citations = citations.len(),
            "processed message"
        );

        ChatResponse {
            message: reply,
            session_id: session_id.to_string(),
            timestamp: Utc::now(),
            analysis_type,
            confidence: self.config.confidence.clone(),
            citations,
            disclaimer: self.config.disclaimer.clone(),
        }
    }
}
