//! Form-submission actions.
//!
//! An action never talks to the HTTP layer directly. It returns an [`Outcome`]
//! carrying either the side effects to deliver (cache invalidation, redirect)
//! or an [`ActionState`] to render back into the form.

use serde::Serialize;

use crate::models::invoice::FieldErrors;

pub mod authenticate;
pub mod invoice;

/// Route of the invoice listing page.
pub const INVOICES_ROUTE: &str = "/dashboard/invoices";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Cached data for this route is stale.
    Invalidate(String),
    /// Send the client here. Always the last effect.
    Redirect(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Done(Vec<Effect>),
    Failed(ActionState),
}

impl Outcome {
    pub fn effects(&self) -> &[Effect] {
        match self {
            Outcome::Done(effects) => effects,
            Outcome::Failed(_) => &[],
        }
    }
}

/// State handed back to a form after a failed submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ActionState {
    #[serde(skip_serializing_if = "FieldErrors::is_empty")]
    pub errors: FieldErrors,
    pub message: Option<String>,
}

impl ActionState {
    pub fn with_message(message: &str) -> Self {
        Self { errors: FieldErrors::default(), message: Some(message.to_string()) }
    }
}

/// Operations a deployment has switched on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub delete_supported: bool,
}
