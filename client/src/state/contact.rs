//! Contact form state: field values, status region and submit lock.
//!
//! DESIGN
//! ======
//! A submission is split into `begin_submit` (before the request) and
//! `finish_submit` (after it resolves) so the component only has to read the
//! fields into the request and hand the outcome back.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use crate::net::contact::{SENDING_MESSAGE, SubmitOutcome};

/// Severity of the status region, rendered as its CSS class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

impl StatusKind {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Text and severity shown in the status region.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn sending() -> Self {
        Self { kind: StatusKind::Info, text: SENDING_MESSAGE.to_owned() }
    }

    pub fn from_outcome(outcome: &SubmitOutcome) -> Self {
        let kind = match outcome {
            SubmitOutcome::Success => StatusKind::Success,
            SubmitOutcome::RecoverableError { .. } | SubmitOutcome::NetworkError => StatusKind::Error,
        };
        Self { kind, text: outcome.message().to_owned() }
    }
}

/// Values of the contact form inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    /// Form field names paired with their current values, in form order.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name.clone()),
            ("email", self.email.clone()),
            ("message", self.message.clone()),
        ]
    }
}

/// Contact form state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactState {
    pub fields: ContactFields,
    /// `None` until the first submission; the status region stays hidden.
    pub status: Option<StatusMessage>,
    /// Submit control is disabled while `true`.
    pub submitting: bool,
}

impl ContactState {
    /// Enter the sending state. The payload to post is `fields.to_pairs()`.
    pub fn begin_submit(&mut self) {
        self.status = Some(StatusMessage::sending());
        self.submitting = true;
    }

    /// Record the outcome of the request started by [`Self::begin_submit`].
    ///
    /// The status text is replaced outright. Fields are cleared only on
    /// success; the submit control is re-enabled in every case.
    pub fn finish_submit(&mut self, outcome: &SubmitOutcome) {
        if *outcome == SubmitOutcome::Success {
            self.fields = ContactFields::default();
        }
        self.status = Some(StatusMessage::from_outcome(outcome));
        self.submitting = false;
    }
}
