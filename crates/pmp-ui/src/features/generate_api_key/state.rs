//! Generate-API-key page state.
//!
//! # Design
//! - Keep form inputs as strings for lossless editing.
//! - Store only what the user chose; partner type, policy group and policy
//!   options are derived from the partner list on demand.
//! - Every transition goes through [`PageState::apply`], which the Yew reducer wraps.

use crate::core::error::ErrorBanner;
use crate::core::logic::DropdownOption;
use crate::core::validation::{LabelError, validate_label};
use crate::features::generate_api_key::actions::FormAction;
use crate::features::generate_api_key::logic::{
    GeneratedKey, LoadOutcome, SubmitOutcome, find_partner, partner_id_options, policy_options,
};
use chrono::{DateTime, Utc};
use pmp_api_models::{GenerateApiKeyRequest, PartnerRecord, RequestEnvelope, generate_api_key_path};
use std::rc::Rc;
use yew::Reducible;

/// Editable form fields plus the label validation result.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    /// Selected partner identifier.
    pub partner_id: String,
    /// Selected policy name; cleared whenever the partner changes.
    pub policy_name: String,
    /// Label typed by the user.
    pub name_label: String,
    /// Result of validating `name_label`.
    pub label_error: Option<LabelError>,
}

impl FormState {
    /// Apply a user edit.
    pub fn apply(&mut self, action: FormAction) {
        match action {
            FormAction::SelectPartner(partner_id) => {
                self.partner_id = partner_id;
                self.policy_name.clear();
            }
            FormAction::SelectPolicy(policy_name) => self.policy_name = policy_name,
            FormAction::EditLabel(value) => {
                self.label_error = validate_label(&value).err();
                self.name_label = value;
            }
            FormAction::Clear => *self = Self::default(),
        }
    }

    /// Whether any field holds user input.
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        !self.partner_id.is_empty() || !self.policy_name.is_empty() || !self.name_label.is_empty()
    }

    /// All fields set and no validation error.
    #[must_use]
    pub const fn is_submit_eligible(&self) -> bool {
        !self.partner_id.is_empty()
            && !self.policy_name.is_empty()
            && !self.name_label.is_empty()
            && self.label_error.is_none()
    }
}

/// A ready-to-send generate request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    /// Partner the key is generated for.
    pub partner_id: String,
    /// Request body.
    pub body: GenerateApiKeyRequest,
}

impl Submission {
    /// Service path with the partner identifier percent-encoded.
    #[must_use]
    pub fn path(&self) -> String {
        generate_api_key_path(&urlencoding::encode(&self.partner_id))
    }

    /// Wrap the body in a request envelope stamped with `now`.
    #[must_use]
    pub fn envelope(&self, now: DateTime<Utc>) -> RequestEnvelope<GenerateApiKeyRequest> {
        RequestEnvelope::new(self.body.clone(), now)
    }
}

/// Whether the partner list is still being fetched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadStatus {
    /// Fetch in flight.
    Loading,
    /// Fetch settled (successfully or not).
    Ready,
}

/// Everything that can change the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageAction {
    /// User edit.
    Form(FormAction),
    /// The partner fetch started.
    LoadStarted,
    /// The partner fetch settled.
    Loaded(LoadOutcome),
    /// A submit was sent.
    SubmitStarted,
    /// The submit settled.
    Submitted(SubmitOutcome),
    /// The error banner was dismissed.
    DismissError,
    /// The success popup was closed.
    ClosePopup,
}

/// Full page state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageState {
    /// Partner list fetch status.
    pub load: LoadStatus,
    /// Approved partners as returned by the service.
    pub partners: Vec<PartnerRecord>,
    /// Form fields.
    pub form: FormState,
    /// Pending error, if any.
    pub banner: Option<ErrorBanner>,
    /// Last generated key.
    pub generated: Option<GeneratedKey>,
    /// Whether a submit is in flight.
    pub submitting: bool,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            load: LoadStatus::Loading,
            partners: Vec::new(),
            form: FormState::default(),
            banner: None,
            generated: None,
            submitting: false,
        }
    }
}

impl PageState {
    /// Apply one action.
    pub fn apply(&mut self, action: PageAction) {
        match action {
            PageAction::Form(action) => self.form.apply(action),
            PageAction::LoadStarted => self.load = LoadStatus::Loading,
            PageAction::Loaded(outcome) => {
                self.load = LoadStatus::Ready;
                match outcome {
                    LoadOutcome::Loaded(partners) => self.partners = partners,
                    LoadOutcome::Failed(banner) => self.banner = Some(banner),
                }
            }
            PageAction::SubmitStarted => {
                self.submitting = true;
                self.banner = None;
                self.generated = None;
            }
            PageAction::Submitted(outcome) => {
                self.submitting = false;
                match outcome {
                    SubmitOutcome::Generated(key) => self.generated = Some(key),
                    SubmitOutcome::Failed(banner) => {
                        self.generated = None;
                        self.banner = Some(banner);
                    }
                }
            }
            PageAction::DismissError => {
                self.banner = None;
                self.generated = None;
            }
            PageAction::ClosePopup => self.generated = None,
        }
    }

    /// Partner-ID dropdown options.
    #[must_use]
    pub fn partner_options(&self) -> Vec<DropdownOption> {
        partner_id_options(&self.partners)
    }

    /// Record of the selected partner.
    #[must_use]
    pub fn selected_partner(&self) -> Option<&PartnerRecord> {
        find_partner(&self.partners, &self.form.partner_id)
    }

    /// Policy dropdown options for the selected partner only.
    #[must_use]
    pub fn policy_options(&self) -> Vec<DropdownOption> {
        self.selected_partner()
            .map(|partner| policy_options(&partner.active_policies))
            .unwrap_or_default()
    }

    /// Submit button state: eligible form, data loaded, nothing in flight.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.load == LoadStatus::Ready && !self.submitting && self.form.is_submit_eligible()
    }

    /// Request to send, when the form is eligible.
    #[must_use]
    pub fn submission(&self) -> Option<Submission> {
        self.can_submit().then(|| Submission {
            partner_id: self.form.partner_id.clone(),
            body: GenerateApiKeyRequest {
                policy_name: self.form.policy_name.clone(),
                label: self.form.name_label.clone(),
            },
        })
    }

    /// Key to show in the popup; hidden while an error is pending.
    #[must_use]
    pub const fn popup(&self) -> Option<&GeneratedKey> {
        if self.banner.is_some() {
            return None;
        }
        self.generated.as_ref()
    }
}

impl Reducible for PageState {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}
