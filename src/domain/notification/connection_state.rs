//! Lifecycle of a subscriber connection.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Status of one subscriber connection.
///
/// `Connecting -> Open -> Closed`. A handshake that never completes may go
/// straight to `Closed`. `Closed` is terminal; a reconnecting client gets a
/// new connection with a new identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionState {
    #[default]
    Connecting,
    Open,
    Closed,
}

impl ConnectionState {
    /// Only open connections may receive events.
    pub fn is_open(&self) -> bool {
        matches!(self, ConnectionState::Open)
    }
}

impl StateMachine for ConnectionState {
    fn can_transition_to(&self, target: &Self) -> bool {
        use ConnectionState::*;
        matches!(
            (self, target),
            (Connecting, Open) | (Connecting, Closed) | (Open, Closed)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use ConnectionState::*;
        match self {
            Connecting => vec![Open, Closed],
            Open => vec![Closed],
            Closed => vec![],
        }
    }
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ConnectionState::Connecting => "connecting",
            ConnectionState::Open => "open",
            ConnectionState::Closed => "closed",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_connecting() {
        assert_eq!(ConnectionState::default(), ConnectionState::Connecting);
    }

    #[test]
    fn handshake_opens_connection() {
        let state = ConnectionState::Connecting
            .transition_to(ConnectionState::Open)
            .unwrap();
        assert!(state.is_open());
    }

    #[test]
    fn open_connection_can_close() {
        assert!(ConnectionState::Open.can_transition_to(&ConnectionState::Closed));
    }

    #[test]
    fn aborted_handshake_can_close() {
        assert!(ConnectionState::Connecting.can_transition_to(&ConnectionState::Closed));
    }

    #[test]
    fn closed_is_terminal() {
        assert!(ConnectionState::Closed.is_terminal());
        assert!(ConnectionState::Closed
            .transition_to(ConnectionState::Open)
            .is_err());
    }

    #[test]
    fn open_cannot_go_back_to_connecting() {
        assert!(!ConnectionState::Open.can_transition_to(&ConnectionState::Connecting));
    }

    #[test]
    fn only_open_is_open() {
        assert!(!ConnectionState::Connecting.is_open());
        assert!(ConnectionState::Open.is_open());
        assert!(!ConnectionState::Closed.is_open());
    }
}
