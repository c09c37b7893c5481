//! Generate-API-key form actions.
//!
//! # Design
//! - Capture user intent separate from rendering.
//! - Actions are UI-only and never perform side effects.

/// Edits a user can make to the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormAction {
    /// A partner was picked from the partner dropdown.
    SelectPartner(String),
    /// A policy was picked from the policy dropdown.
    SelectPolicy(String),
    /// The label input changed.
    EditLabel(String),
    /// "Clear form" was pressed.
    Clear,
}
