//! Contact form model and the submission state machine.
//!
//! ```text
//! Idle ──submit (valid)──▶ Submitting ──success──▶ Submitted ──reset delay──▶ Idle (cleared)
//!                              │
//!                              └──failure──▶ Idle (fields kept)
//! ```
//!
//! Timing is not handled here. The owner schedules the transport call and the
//! reset timer, then feeds the outcome back through [`ContactFlow::complete`],
//! [`ContactFlow::fail`] and [`ContactFlow::reset`].

use std::fmt;
use std::sync::LazyLock;

use chrono::{DateTime, Local};
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex")
});

// ── Fields ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Name,
    Email,
    Company,
    Phone,
    Service,
    Budget,
    Timeline,
    Message,
}

/// How a field is edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Select,
    MultiLine,
}

/// One `<option>` of a select field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

const fn opt(value: &'static str, label: &'static str) -> SelectOption {
    SelectOption { value, label }
}

pub const SERVICE_OPTIONS: &[SelectOption] = &[
    opt("Web Development", "Web Development"),
    opt("Mobile App Development", "Mobile App Development"),
    opt("UI/UX Design", "UI/UX Design"),
    opt("API Development", "API Development"),
    opt("Cloud Solutions", "Cloud Solutions"),
    opt("Consulting", "Consulting"),
    opt("Other", "Other"),
];

pub const BUDGET_OPTIONS: &[SelectOption] = &[
    opt("5k-10k", "$5,000 - $10,000"),
    opt("10k-25k", "$10,000 - $25,000"),
    opt("25k-50k", "$25,000 - $50,000"),
    opt("50k+", "$50,000+"),
];

pub const TIMELINE_OPTIONS: &[SelectOption] = &[
    opt("asap", "ASAP"),
    opt("1-3months", "1-3 months"),
    opt("3-6months", "3-6 months"),
    opt("6months+", "6+ months"),
];

impl FormField {
    /// Tab order.
    pub const ALL: [FormField; 8] = [
        FormField::Name,
        FormField::Email,
        FormField::Company,
        FormField::Phone,
        FormField::Service,
        FormField::Budget,
        FormField::Timeline,
        FormField::Message,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Company => "Company",
            FormField::Phone => "Phone",
            FormField::Service => "Service",
            FormField::Budget => "Budget",
            FormField::Timeline => "Timeline",
            FormField::Message => "Message",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Company => "company",
            FormField::Phone => "phone",
            FormField::Service => "service",
            FormField::Budget => "budget",
            FormField::Timeline => "timeline",
            FormField::Message => "message",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.key().eq_ignore_ascii_case(key.trim()))
    }

    pub fn is_required(&self) -> bool {
        matches!(self, FormField::Name | FormField::Email | FormField::Message)
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            FormField::Service | FormField::Budget | FormField::Timeline => FieldKind::Select,
            FormField::Message => FieldKind::MultiLine,
            _ => FieldKind::Text,
        }
    }

    /// Allowed values for select fields; empty for free text.
    pub fn options(&self) -> &'static [SelectOption] {
        match self {
            FormField::Service => SERVICE_OPTIONS,
            FormField::Budget => BUDGET_OPTIONS,
            FormField::Timeline => TIMELINE_OPTIONS,
            _ => &[],
        }
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

// ── Validation ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorKind {
    Required,
    InvalidEmail,
}

/// Inline validation message attached to one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: FormField,
    pub kind: FieldErrorKind,
}

impl FieldError {
    pub fn new(field: FormField, kind: FieldErrorKind) -> Self {
        Self { field, kind }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            FieldErrorKind::Required => write!(f, "{} is required", self.field.label()),
            FieldErrorKind::InvalidEmail => {
                write!(f, "{} must be a valid email address", self.field.label())
            }
        }
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value.trim())
}

// ── Form ─────────────────────────────────────────────────────────────────────

/// Values captured by the contact form. Select fields hold the option value,
/// empty when nothing is selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
    pub service: String,
    pub budget: String,
    pub timeline: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Company => &self.company,
            FormField::Phone => &self.phone,
            FormField::Service => &self.service,
            FormField::Budget => &self.budget,
            FormField::Timeline => &self.timeline,
            FormField::Message => &self.message,
        }
    }

    pub fn get_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Company => &mut self.company,
            FormField::Phone => &mut self.phone,
            FormField::Service => &mut self.service,
            FormField::Budget => &mut self.budget,
            FormField::Timeline => &mut self.timeline,
            FormField::Message => &mut self.message,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        *self.get_mut(field) = value.into();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Required-field gate: name, email and message are non-blank.
    pub fn is_submittable(&self) -> bool {
        FormField::ALL
            .iter()
            .filter(|f| f.is_required())
            .all(|f| !self.get(*f).trim().is_empty())
    }

    /// Every problem with the current values, in field order.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        for field in FormField::ALL {
            let value = self.get(field).trim();
            if field.is_required() && value.is_empty() {
                errors.push(FieldError::new(field, FieldErrorKind::Required));
            } else if field == FormField::Email && !value.is_empty() && !is_valid_email(value) {
                errors.push(FieldError::new(field, FieldErrorKind::InvalidEmail));
            }
        }
        errors
    }

    /// Step a select field to the next (or previous) option, wrapping through
    /// the "nothing selected" slot. Returns `false` for non-select fields.
    pub fn cycle_option(&mut self, field: FormField, forward: bool) -> bool {
        let options = field.options();
        if options.is_empty() {
            return false;
        }
        // Slot 0 is "nothing selected"; slots 1..=len are the options.
        let slots = options.len() + 1;
        let current = options
            .iter()
            .position(|o| o.value == self.get(field))
            .map(|i| i + 1)
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % slots
        } else {
            (current + slots - 1) % slots
        };
        let value = if next == 0 { "" } else { options[next - 1].value };
        self.set(field, value);
        true
    }

    /// Display label for a field's current value.
    pub fn display_value(&self, field: FormField) -> &str {
        let value = self.get(field);
        field
            .options()
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label)
            .unwrap_or(value)
    }
}

// ── Submission flow ──────────────────────────────────────────────────────────

/// Acknowledgement returned by a submission transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Receipt {
    pub reference: String,
    pub submitted_at: DateTime<Local>,
}

impl Receipt {
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            submitted_at: Local::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

/// Why a submit attempt did not start.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitRejection {
    #[error("a submission is already in flight")]
    InFlight,

    #[error("the previous submission is still being acknowledged")]
    AwaitingReset,

    #[error("form has {} invalid field(s)", .0.len())]
    Invalid(Vec<FieldError>),
}

/// Contact view state: the form plus where it is in the submission cycle.
#[derive(Debug, Clone, Default)]
pub struct ContactFlow {
    form: ContactForm,
    phase: SubmissionPhase,
    errors: Vec<FieldError>,
    receipt: Option<Receipt>,
}

impl ContactFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn error_for(&self, field: FormField) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == field)
    }

    pub fn receipt(&self) -> Option<&Receipt> {
        self.receipt.as_ref()
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        self.phase == SubmissionPhase::Idle && self.form.is_submittable()
    }

    /// Edits are only accepted while idle. Editing a field clears its
    /// inline error.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) -> bool {
        if self.phase != SubmissionPhase::Idle {
            return false;
        }
        self.form.set(field, value);
        self.errors.retain(|e| e.field != field);
        true
    }

    pub fn push_char(&mut self, field: FormField, ch: char) -> bool {
        if self.phase != SubmissionPhase::Idle || field.kind() == FieldKind::Select {
            return false;
        }
        self.form.get_mut(field).push(ch);
        self.errors.retain(|e| e.field != field);
        true
    }

    pub fn pop_char(&mut self, field: FormField) -> bool {
        if self.phase != SubmissionPhase::Idle || field.kind() == FieldKind::Select {
            return false;
        }
        let popped = self.form.get_mut(field).pop().is_some();
        if popped {
            self.errors.retain(|e| e.field != field);
        }
        popped
    }

    pub fn cycle_option(&mut self, field: FormField, forward: bool) -> bool {
        if self.phase != SubmissionPhase::Idle {
            return false;
        }
        self.form.cycle_option(field, forward)
    }

    /// `Idle → Submitting`. Returns a snapshot of the form to hand to the
    /// transport.
    pub fn begin_submit(&mut self) -> Result<ContactForm, SubmitRejection> {
        match self.phase {
            SubmissionPhase::Submitting => return Err(SubmitRejection::InFlight),
            SubmissionPhase::Submitted => return Err(SubmitRejection::AwaitingReset),
            SubmissionPhase::Idle => {}
        }

        let errors = self.form.validate();
        if !errors.is_empty() {
            self.errors = errors.clone();
            return Err(SubmitRejection::Invalid(errors));
        }

        self.errors.clear();
        self.phase = SubmissionPhase::Submitting;
        Ok(self.form.clone())
    }

    /// `Submitting → Submitted`.
    pub fn complete(&mut self, receipt: Receipt) -> bool {
        if self.phase != SubmissionPhase::Submitting {
            return false;
        }
        self.phase = SubmissionPhase::Submitted;
        self.receipt = Some(receipt);
        true
    }

    /// `Submitting → Idle` with the form left as the user typed it.
    pub fn fail(&mut self) -> bool {
        if self.phase != SubmissionPhase::Submitting {
            return false;
        }
        self.phase = SubmissionPhase::Idle;
        true
    }

    /// `Submitted → Idle`, clearing every field.
    pub fn reset(&mut self) -> bool {
        if self.phase != SubmissionPhase::Submitted {
            return false;
        }
        self.phase = SubmissionPhase::Idle;
        self.form.clear();
        self.errors.clear();
        self.receipt = None;
        true
    }
}
