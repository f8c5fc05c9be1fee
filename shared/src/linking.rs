//! # Bank linking
//!
//! Types and lifecycle for the account linker: fetch a link token for the
//! session user, let the third-party session run, then exchange its public
//! token for a persistent account connection.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::auth::SessionUser;
use crate::error::ServiceError;

/// Short-lived token that opens a third-party linking session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkToken {
    pub link_token: String,
}

/// Token handed back by a successful linking session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicToken {
    pub public_token: String,
}

/// Request body for the token exchange
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeTokenRequest {
    pub user_id: String,
    pub public_token: String,
}

/// Persistent bank connection created by the exchange
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedAccount {
    pub item_id: String,
    pub account_id: String,
    #[serde(default)]
    pub institution_name: Option<String>,
    #[serde(default)]
    pub mask: Option<String>,
}

/// Presentation of the linker's button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkVariant {
    #[default]
    Primary,
    Ghost,
    Default,
}

impl LinkVariant {
    pub fn class(&self) -> &'static str {
        match self {
            LinkVariant::Primary => "plaidlink-primary",
            LinkVariant::Ghost => "plaidlink-ghost",
            LinkVariant::Default => "plaidlink-default",
        }
    }

    pub fn label(&self) -> &'static str {
        "Connect bank"
    }
}

/// What the linker reports back to the auth flow
#[derive(Debug, Clone, PartialEq)]
pub enum LinkOutcome {
    Linked(LinkedAccount),
    /// The user closed the third-party session without linking
    Exited,
    Failed(ServiceError),
}

/// Server side of the linking flow
#[async_trait(?Send)]
pub trait LinkingService {
    async fn create_link_token(&self, user: &SessionUser) -> Result<LinkToken, ServiceError>;

    async fn exchange_public_token(
        &self,
        user: &SessionUser,
        public_token: &PublicToken,
    ) -> Result<LinkedAccount, ServiceError>;
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum LinkerState {
    #[default]
    FetchingToken,
    Ready(LinkToken),
    /// Third-party session is open
    InSession(LinkToken),
    Exchanging,
    Linked(LinkedAccount),
    Failed(ServiceError),
}

#[derive(Debug, Clone, PartialEq)]
pub enum LinkerEvent {
    TokenFetched(Result<LinkToken, ServiceError>),
    SessionOpened,
    SessionSucceeded(PublicToken),
    SessionExited,
    SessionFailed(ServiceError),
    ExchangeFinished(Result<LinkedAccount, ServiceError>),
    Retry,
}

impl LinkerState {
    /// Applies `event` and returns what should be reported to the auth flow,
    /// if the event ended the linking attempt.
    pub fn apply(&mut self, event: LinkerEvent) -> Option<LinkOutcome> {
        let current = std::mem::take(self);
        let (next, outcome) = match (current, event) {
            (LinkerState::FetchingToken, LinkerEvent::TokenFetched(Ok(token))) => (LinkerState::Ready(token), None),
            (LinkerState::FetchingToken, LinkerEvent::TokenFetched(Err(e))) => {
                warn!(error = %e, "could not create link token");
                (LinkerState::Failed(e.clone()), Some(LinkOutcome::Failed(e)))
            }
            (LinkerState::Ready(token), LinkerEvent::SessionOpened) => (LinkerState::InSession(token), None),
            (LinkerState::InSession(_), LinkerEvent::SessionSucceeded(_)) => (LinkerState::Exchanging, None),
            (LinkerState::InSession(token), LinkerEvent::SessionExited) => {
                debug!("linking session closed by user");
                (LinkerState::Ready(token), Some(LinkOutcome::Exited))
            }
            (LinkerState::Ready(_) | LinkerState::InSession(_), LinkerEvent::SessionFailed(e)) => {
                warn!(error = %e, "linking session failed");
                (LinkerState::Failed(e.clone()), Some(LinkOutcome::Failed(e)))
            }
            (LinkerState::Exchanging, LinkerEvent::ExchangeFinished(Ok(account))) => {
                (LinkerState::Linked(account.clone()), Some(LinkOutcome::Linked(account)))
            }
            (LinkerState::Exchanging, LinkerEvent::ExchangeFinished(Err(e))) => {
                warn!(error = %e, "public token exchange failed");
                (LinkerState::Failed(e.clone()), Some(LinkOutcome::Failed(e)))
            }
            (LinkerState::Failed(_), LinkerEvent::Retry) => (LinkerState::FetchingToken, None),
            (state, event) => {
                debug!(state = ?state, event = ?event, "linker event ignored");
                (state, None)
            }
        };
        *self = next;
        outcome
    }

    /// Token for opening a session, when one can be opened
    pub fn token(&self) -> Option<&LinkToken> {
        match self {
            LinkerState::Ready(token) => Some(token),
            _ => None,
        }
    }

    pub fn is_busy(&self) -> bool {
        matches!(
            self,
            LinkerState::FetchingToken | LinkerState::InSession(_) | LinkerState::Exchanging
        )
    }

    pub fn button_label(&self, variant: LinkVariant) -> &'static str {
        match self {
            LinkerState::FetchingToken => "Preparing...",
            LinkerState::Exchanging => "Linking...",
            LinkerState::Linked(_) => "Bank connected",
            LinkerState::Failed(_) => "Try again",
            LinkerState::Ready(_) | LinkerState::InSession(_) => variant.label(),
        }
    }
}
