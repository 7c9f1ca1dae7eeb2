//! Contact creation form.
//!
//! Holds an in-memory draft of the five contact fields, the set of fields the
//! user has left at least once, and the current validation errors. Errors are
//! recomputed on every change and blur but only shown for touched fields.
//!
//! Submission is split into [`ContactFormView::begin_submit`] and
//! [`ContactFormView::finish_submit`] so an event loop can render the
//! in-flight state between the two; [`ContactFormView::submit`] runs both
//! around a single POST.

use crate::client::AsyncCardsClient;
use crate::error::{CardsApiResult, ViewError};
use crate::models::NewContact;
use crate::validation::{self, FieldErrors, FormField};
use std::collections::BTreeSet;
use std::fmt::{self, Write};
use tracing::{error, info};

/// Signal from the form to its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormSignal {
    /// The form is done and should be hidden.
    Close,
}

/// User-facing acknowledgment of a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acknowledgment {
    Success,
    Failure,
}

impl Acknowledgment {
    pub fn message(self) -> &'static str {
        match self {
            Acknowledgment::Success => "Created a Contact Successfully!",
            Acknowledgment::Failure => "An error occurred while creating the contact.",
        }
    }
}

impl fmt::Display for Acknowledgment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// At least one rule failed; nothing was sent.
    Invalid,
    /// A submission is already in flight; nothing was sent.
    InFlight,
    /// The API accepted the contact. The container should close the form.
    Created(FormSignal),
    /// The API rejected the contact or could not be reached.
    Failed(ViewError),
}

/// View model for the contact creation form.
#[derive(Debug, Clone)]
pub struct ContactFormView {
    values: NewContact,
    touched: BTreeSet<FormField>,
    errors: FieldErrors,
    submitting: bool,
    acknowledgment: Option<Acknowledgment>,
}

impl Default for ContactFormView {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactFormView {
    /// Create an empty form. Every field starts out failing `required`.
    pub fn new() -> Self {
        let values = NewContact::default();
        let errors = validation::validate(&values);
        Self {
            values,
            touched: BTreeSet::new(),
            errors,
            submitting: false,
            acknowledgment: None,
        }
    }

    pub fn values(&self) -> &NewContact {
        &self.values
    }

    pub fn value(&self, field: FormField) -> &str {
        field.get(&self.values)
    }

    /// Store a new value for a field and re-validate.
    pub fn change(&mut self, field: FormField, value: impl Into<String>) {
        field.set(&mut self.values, value.into());
        self.revalidate();
    }

    /// Mark a field as touched and re-validate.
    pub fn blur(&mut self, field: FormField) {
        self.touched.insert(field);
        self.revalidate();
    }

    fn revalidate(&mut self) {
        self.errors = validation::validate(&self.values);
    }

    pub fn is_touched(&self, field: FormField) -> bool {
        self.touched.contains(&field)
    }

    /// Current rule failure for a field, whether or not it is shown.
    pub fn error(&self, field: FormField) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    /// Error text to show under a field: only once touched and still failing.
    pub fn visible_error(&self, field: FormField) -> Option<&'static str> {
        if self.is_touched(field) {
            self.error(field)
        } else {
            None
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Whether the submit control is disabled by an in-flight submission.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn acknowledgment(&self) -> Option<Acknowledgment> {
        self.acknowledgment
    }

    /// Validate and, when everything passes, enter the in-flight state.
    ///
    /// Every field is marked touched first so each failing field shows its
    /// message. Returns the payload to send, or the outcome explaining why
    /// nothing should be sent.
    pub fn begin_submit(&mut self) -> Result<NewContact, SubmitOutcome> {
        if self.submitting {
            return Err(SubmitOutcome::InFlight);
        }

        self.touched.extend(FormField::ALL);
        self.revalidate();

        if !self.is_valid() {
            info!("Submission blocked by {} invalid field(s)", self.errors.len());
            return Err(SubmitOutcome::Invalid);
        }

        self.submitting = true;
        self.acknowledgment = None;
        Ok(self.values.clone())
    }

    /// Leave the in-flight state with the API result.
    ///
    /// The draft is kept in both cases so a failed submission can be retried.
    pub fn finish_submit(&mut self, result: CardsApiResult<()>) -> SubmitOutcome {
        self.submitting = false;

        match result {
            Ok(()) => {
                info!("Created contact {}", self.values.name);
                self.acknowledgment = Some(Acknowledgment::Success);
                SubmitOutcome::Created(FormSignal::Close)
            }
            Err(e) => {
                error!("Failed to create contact: {}", e);
                self.acknowledgment = Some(Acknowledgment::Failure);
                SubmitOutcome::Failed(ViewError::SubmitFailed(e.to_string()))
            }
        }
    }

    /// Validate, send one POST when valid, and settle the form.
    pub async fn submit(&mut self, client: &dyn AsyncCardsClient) -> SubmitOutcome {
        let payload = match self.begin_submit() {
            Ok(payload) => payload,
            Err(outcome) => return outcome,
        };

        let result = client.create_card(&payload).await;
        self.finish_submit(result)
    }

    /// Discard the draft and ask the container to close the form.
    pub fn cancel(&mut self) -> FormSignal {
        *self = Self::new();
        FormSignal::Close
    }

    /// Render the form as text.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Add New Contact");
        let _ = writeln!(out, "Fill out the form below to add a new member");

        for field in FormField::ALL {
            let value = self.value(field);
            if value.is_empty() {
                let _ = writeln!(out, "{}: ({})", field.label(), field.placeholder());
            } else {
                let _ = writeln!(out, "{}: {}", field.label(), value);
            }
            if let Some(message) = self.visible_error(field) {
                let _ = writeln!(out, "  ! {}", message);
            }
        }

        let save = if self.submitting { "Saving..." } else { "Save" };
        let _ = writeln!(out, "[{}] [Cancel]", save);

        if let Some(ack) = self.acknowledgment {
            let _ = writeln!(out, "{}", ack);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CardsApiError;

    fn fill_valid(form: &mut ContactFormView) {
        form.change(FormField::Name, "Angela Moss");
        form.change(FormField::Email, "a@x.com");
        form.change(FormField::Phone, "1234567890");
        form.change(FormField::Company, "Acme");
        form.change(FormField::Title, "Manager");
    }

    #[test]
    fn test_errors_hidden_until_touched() {
        let mut form = ContactFormView::new();
        form.change(FormField::Name, "A");

        assert_eq!(
            form.error(FormField::Name),
            Some("Name must be minimum 2 characters")
        );
        assert_eq!(form.visible_error(FormField::Name), None);

        form.blur(FormField::Name);
        assert_eq!(
            form.visible_error(FormField::Name),
            Some("Name must be minimum 2 characters")
        );
    }

    #[test]
    fn test_correcting_one_field_leaves_others() {
        let mut form = ContactFormView::new();
        form.change(FormField::Name, "A");
        form.change(FormField::Phone, "12345");
        form.blur(FormField::Name);
        form.blur(FormField::Phone);

        form.change(FormField::Name, "Al");
        assert_eq!(form.visible_error(FormField::Name), None);
        assert_eq!(
            form.visible_error(FormField::Phone),
            Some("Phone number must be exactly 10 digits")
        );
    }

    #[test]
    fn test_begin_submit_touches_everything_when_invalid() {
        let mut form = ContactFormView::new();
        assert_eq!(form.begin_submit(), Err(SubmitOutcome::Invalid));
        for field in FormField::ALL {
            assert!(form.is_touched(field));
            assert!(form.visible_error(field).is_some());
        }
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_second_begin_submit_is_in_flight() {
        let mut form = ContactFormView::new();
        fill_valid(&mut form);

        assert!(form.begin_submit().is_ok());
        assert!(form.is_submitting());
        assert!(form.render().contains("[Saving...]"));
        assert_eq!(form.begin_submit(), Err(SubmitOutcome::InFlight));
    }

    #[test]
    fn test_finish_submit_failure_keeps_draft() {
        let mut form = ContactFormView::new();
        fill_valid(&mut form);
        let payload = form.begin_submit().unwrap();

        let outcome = form.finish_submit(Err(CardsApiError::ApiError {
            status: 500,
            message: "boom".to_string(),
        }));

        assert!(matches!(outcome, SubmitOutcome::Failed(ViewError::SubmitFailed(_))));
        assert_eq!(form.values(), &payload);
        assert!(!form.is_submitting());
        assert_eq!(form.acknowledgment(), Some(Acknowledgment::Failure));
    }

    #[test]
    fn test_cancel_discards_draft() {
        let mut form = ContactFormView::new();
        fill_valid(&mut form);
        form.blur(FormField::Name);

        assert_eq!(form.cancel(), FormSignal::Close);
        assert_eq!(form.values(), &NewContact::default());
        assert!(!form.is_touched(FormField::Name));
    }

    #[test]
    fn test_render_shows_placeholders_and_errors() {
        let mut form = ContactFormView::new();
        form.blur(FormField::Email);
        let text = form.render();
        assert!(text.contains("Name: (Angela Moss)"));
        assert!(text.contains("  ! Email is required"));
        assert!(!text.contains("Name is required"));
        assert!(text.contains("[Save] [Cancel]"));
    }
}
