/*
[INPUT]:  Authentication failures surfaced by panel routines
[OUTPUT]: Sign-out notifications
[POS]:    Session hook - what the dashboard does when the backend rejects the session
[UPDATE]: When adding session lifecycle events
*/

use std::fmt::Display;

use dayboard_adapter::DashboardError;
use tracing::warn;

/// Receives the sign-out request raised by a rejected session
pub trait SessionHandler: Send {
    fn sign_out(&mut self);
}

/// Default handler: records the sign-out for the UI and logs it
#[derive(Debug, Clone, Default)]
pub struct SessionStatus {
    sign_outs: u32,
}

impl SessionStatus {
    pub fn is_signed_out(&self) -> bool {
        self.sign_outs > 0
    }

    pub fn sign_outs(&self) -> u32 {
        self.sign_outs
    }
}

impl SessionHandler for SessionStatus {
    fn sign_out(&mut self) {
        self.sign_outs += 1;
        warn!("session rejected by backend, signed out");
    }
}

/// Errors that may carry a rejected session
pub trait AuthFailure: Display {
    fn is_auth_error(&self) -> bool;
}

impl AuthFailure for DashboardError {
    fn is_auth_error(&self) -> bool {
        DashboardError::is_auth_error(self)
    }
}

impl AuthFailure for crate::workflow::WorkflowError {
    fn is_auth_error(&self) -> bool {
        crate::workflow::WorkflowError::is_auth_error(self)
    }
}

impl AuthFailure for crate::assign::AssignError {
    fn is_auth_error(&self) -> bool {
        crate::assign::AssignError::is_auth_error(self)
    }
}
