//! # Auth Session
//!
//! Per-user login state. A session starts [`SessionState::Unauthenticated`]
//! and moves exactly once, on the login response, to either
//! [`SessionState::Authenticated`] or [`SessionState::Disabled`]. Both are
//! terminal: login is never retried, and a disabled session makes every later
//! task a silent no-op.
//!
//! ```text
//!                    login ok
//! Unauthenticated ────────────▶ Authenticated
//!        │
//!        │ non-200 / success:false / no token / bad body
//!        ▼
//!     Disabled
//! ```

use crate::outcome::{decode_login, ApiError};

/// Login state of one simulated user.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Unauthenticated,
    Authenticated {
        token: String,
    },
    Disabled {
        reason: String,
    },
}

/// Bearer-token session owned by a single simulated user.
#[derive(Debug, Clone, Default)]
pub struct AuthSession {
    state: SessionState,
}

impl AuthSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, SessionState::Authenticated { .. })
    }

    pub fn token(&self) -> Option<&str> {
        match &self.state {
            SessionState::Authenticated { token } => Some(token),
            _ => None,
        }
    }

    /// `Bearer <token>`, or `None` when the session is not authenticated.
    pub fn authorization_header(&self) -> Option<String> {
        self.token().map(|token| format!("Bearer {token}"))
    }

    /// Apply the login response. Only the first outcome is recorded; later
    /// calls leave the state untouched and report it.
    pub fn complete_login(&mut self, status: u16, body: &str) -> Result<(), ApiError> {
        self.settle(decode_login(status, body))
    }

    /// Record a login that never produced a response.
    pub fn fail(&mut self, error: ApiError) -> Result<(), ApiError> {
        self.settle(Err(error))
    }

    fn settle(&mut self, outcome: Result<String, ApiError>) -> Result<(), ApiError> {
        match &self.state {
            SessionState::Unauthenticated => {}
            SessionState::Authenticated { .. } => return Ok(()),
            SessionState::Disabled { reason } => return Err(ApiError::Rejected(reason.clone())),
        }
        match outcome {
            Ok(token) => {
                self.state = SessionState::Authenticated { token };
                Ok(())
            }
            Err(error) => {
                self.state = SessionState::Disabled {
                    reason: error.to_string(),
                };
                Err(error)
            }
        }
    }
}
