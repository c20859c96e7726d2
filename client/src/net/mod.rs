//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `contact` posts the contact form to the external form collector and
//! classifies the reply into a [`contact::SubmitOutcome`].

pub mod contact;
