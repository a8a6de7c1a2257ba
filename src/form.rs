//! Form state machine: values, errors and the submission lifecycle
//!
//! This is the UI-independent half of the visitor form. The GPUI view in
//! `app.rs` owns one [`FormState`] and forwards input events to it.
//!
//! Errors follow the usual "validate on submit, re-validate on change" timing:
//! nothing is reported until the first submit attempt, after which every edit
//! re-checks the edited field.

use std::collections::BTreeMap;

use crate::error::SubmitError;
use crate::models::{FieldId, VisitRequest};
use crate::schema::FormSchema;

pub type FieldValues = BTreeMap<FieldId, String>;
pub type FieldErrors = BTreeMap<FieldId, &'static str>;

pub struct FormState {
    schema: FormSchema,
    values: FieldValues,
    errors: FieldErrors,
    submit_attempted: bool,
    is_submitting: bool,
}

impl FormState {
    pub fn new(schema: FormSchema) -> Self {
        let values = Self::empty_values(&schema);
        Self {
            schema,
            values,
            errors: FieldErrors::new(),
            submit_attempted: false,
            is_submitting: false,
        }
    }

    fn empty_values(schema: &FormSchema) -> FieldValues {
        schema
            .fields
            .iter()
            .map(|spec| (spec.id, String::new()))
            .collect()
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    pub fn value(&self, id: FieldId) -> &str {
        self.values.get(&id).map(String::as_str).unwrap_or("")
    }

    pub fn error(&self, id: FieldId) -> Option<&'static str> {
        self.errors.get(&id).copied()
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    /// True once any field holds text
    pub fn is_dirty(&self) -> bool {
        self.values.values().any(|v| !v.is_empty())
    }

    /// Sets one field. Returns false for fields outside the schema.
    pub fn set_value(&mut self, id: FieldId, value: impl Into<String>) -> bool {
        let Some(spec) = self.schema.field(id) else {
            return false;
        };
        let value = value.into();

        if self.submit_attempted {
            match spec.validate(&value) {
                Ok(()) => {
                    self.errors.remove(&id);
                }
                Err(message) => {
                    self.errors.insert(id, message);
                }
            }
        }

        self.values.insert(id, value);
        true
    }

    /// Validates every field and, if all pass, enters the submitting state
    /// and returns the snapshot to send.
    pub fn begin_submit(&mut self) -> Result<VisitRequest, SubmitError> {
        if self.is_submitting {
            return Err(SubmitError::InProgress);
        }

        self.submit_attempted = true;
        self.errors = self.schema.validate(&self.values);
        if !self.errors.is_empty() {
            return Err(SubmitError::Invalid(self.errors.clone()));
        }

        self.is_submitting = true;
        Ok(self.snapshot())
    }

    /// Successful round trip: back to an empty form
    pub fn finish_submit(&mut self) {
        self.reset();
        self.is_submitting = false;
    }

    /// Failed round trip: keep what the visitor typed
    pub fn abort_submit(&mut self) {
        self.is_submitting = false;
    }

    /// Clears values and errors; does not touch `is_submitting`
    pub fn reset(&mut self) {
        self.values = Self::empty_values(&self.schema);
        self.errors.clear();
        self.submit_attempted = false;
    }

    fn snapshot(&self) -> VisitRequest {
        let optional = |id: FieldId| {
            self.schema
                .has_field(id)
                .then(|| self.value(id).to_string())
        };

        VisitRequest {
            full_name: self.value(FieldId::FullName).to_string(),
            organization: self.value(FieldId::Organization).to_string(),
            visit_purpose: optional(FieldId::VisitPurpose),
            visit_duration: self.value(FieldId::VisitDuration).to_string(),
            recipient: self.value(FieldId::Recipient).to_string(),
            room_number: self.value(FieldId::RoomNumber).to_string(),
            responsible_person: optional(FieldId::ResponsiblePerson),
        }
    }
}
