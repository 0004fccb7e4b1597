//! Account Settings State
//!
//! Account deletion confirmation and password change feedback.

use session_storage::SessionStorage;

use crate::api::ApiError;
use crate::models::{Message, Session};

/// Account deletion flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeleteState {
    #[default]
    Idle,
    ConfirmPending,
    /// Request in flight
    Deleting,
    /// Terminal
    Deleted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteEvent {
    Request,
    Cancel,
    Confirm,
    Succeeded,
    Failed,
}

impl DeleteState {
    pub fn next(self, event: DeleteEvent) -> Self {
        use DeleteEvent::*;
        use DeleteState::*;

        match (self, event) {
            (Idle, Request) => ConfirmPending,
            (ConfirmPending, Cancel) => Idle,
            (ConfirmPending, Confirm) => Deleting,
            (Deleting, Succeeded) => Deleted,
            // Failure drops the confirmation, it never goes back to ConfirmPending
            (Deleting, Failed) => Idle,
            (state, _) => state,
        }
    }

    /// Whether the confirm prompt is on screen
    pub fn is_confirming(self) -> bool {
        matches!(self, DeleteState::ConfirmPending | DeleteState::Deleting)
    }
}

/// Banner text on the settings page; at most one of the two is set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Feedback {
    pub error: Option<String>,
    pub success: Option<String>,
}

impl Feedback {
    pub fn succeeded(message: Option<String>) -> Self {
        Self {
            error: None,
            success: message.filter(|m| !m.is_empty()),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            success: None,
        }
    }
}

/// Settle a delete request that was in flight in `state`.
///
/// Success drops the stored session and ends in `Deleted`. Failure keeps the
/// session, returns to `Idle`, and replaces any banner with the error alone.
pub fn apply_delete_result(
    state: DeleteState,
    result: Result<Message, ApiError>,
    storage: &dyn SessionStorage<Session>,
) -> (DeleteState, Option<Feedback>) {
    match result {
        Ok(message) => {
            storage.clear();
            log::info!("account deleted: {}", message.msg);
            (state.next(DeleteEvent::Succeeded), None)
        }
        Err(err) => {
            log::warn!("account deletion failed: {}", err);
            let feedback = Feedback::failed(err.user_message("Failed to delete account"));
            (state.next(DeleteEvent::Failed), Some(feedback))
        }
    }
}
