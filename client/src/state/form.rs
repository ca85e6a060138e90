//! Appointment form state: field values, per-field validity and the submit phase.
//!
//! DESIGN
//! ======
//! Validity is recomputed from the current value on every validation event
//! and is only used for the field indicator. Submission never trusts it and
//! re-validates everything, so a stale indicator can't let a bad request out.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::collections::BTreeMap;

use crate::net::appointment::{AppointmentRequest, SubmitError, TimeSlot};
use crate::util::validation::{FieldKind, is_filled, validate_field};

/// Controls of the booking form. `id()` doubles as the DOM id and `name`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Name,
    Phone,
    Email,
    Date,
    Time,
    Message,
}

impl Field {
    pub const REQUIRED: [Self; 4] = [Self::Name, Self::Phone, Self::Date, Self::Time];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Date => "date",
            Self::Time => "time",
            Self::Message => "message",
        }
    }

    #[must_use]
    pub fn is_required(self) -> bool {
        Self::REQUIRED.contains(&self)
    }
}

/// Indicator state of one field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Validity {
    #[default]
    Unchecked,
    Valid,
    Invalid,
}

/// Raw control values, empty string when unset.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormValues {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub date: String,
    pub time: String,
    pub message: String,
}

impl FormValues {
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
            Field::Date => &self.date,
            Field::Time => &self.time,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Phone => &mut self.phone,
            Field::Email => &mut self.email,
            Field::Date => &mut self.date,
            Field::Time => &mut self.time,
            Field::Message => &mut self.message,
        };
        *slot = value;
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
}

#[derive(Clone, Debug, Default)]
pub struct FormState {
    values: FormValues,
    validity: BTreeMap<Field, Validity>,
    phase: SubmitPhase,
    min_date: String,
}

impl FormState {
    #[must_use]
    pub fn values(&self) -> &FormValues {
        &self.values
    }

    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    #[must_use]
    pub fn validity(&self, field: Field) -> Validity {
        self.validity.get(&field).copied().unwrap_or_default()
    }

    #[must_use]
    pub fn min_date(&self) -> &str {
        &self.min_date
    }

    #[must_use]
    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    /// Earliest bookable date is today; the picker starts on tomorrow.
    pub fn apply_date_defaults(&mut self, today: String, tomorrow: String) {
        self.min_date = today;
        self.values.date = tomorrow;
    }

    /// Store a typed value. The phone field is format-checked as the user types.
    pub fn on_input(&mut self, field: Field, value: String) {
        self.values.set(field, value);
        if field == Field::Phone {
            self.check(field, FieldKind::Phone);
        }
    }

    /// Leaving a control checks presence for required fields and the address
    /// format for email.
    pub fn on_blur(&mut self, field: Field) {
        if field.is_required() {
            self.check(field, FieldKind::Required);
        }
        if field == Field::Email {
            self.check(field, FieldKind::Email);
        }
    }

    /// Email is checked trimmed, the way the browser sanitizes `type=email`.
    fn check(&mut self, field: Field, kind: FieldKind) -> bool {
        let value = self.value(field);
        let value = if kind == FieldKind::Email { value.trim() } else { value };
        let ok = validate_field(kind, value);
        self.mark(field, ok);
        ok
    }

    fn mark(&mut self, field: Field, ok: bool) {
        let validity = if ok { Validity::Valid } else { Validity::Invalid };
        self.validity.insert(field, validity);
    }

    /// Re-validate every rule and build the request.
    ///
    /// Failing fields are marked invalid; passing required fields keep
    /// whatever indicator they had.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::Invalid`] listing each failing field once.
    pub fn validate_for_submit(&mut self) -> Result<AppointmentRequest, SubmitError> {
        let mut failed = Vec::new();

        for field in Field::REQUIRED {
            if !is_filled(self.value(field)) {
                self.mark(field, false);
                failed.push(field);
            }
        }
        if !self.values.phone.is_empty() && !self.check(Field::Phone, FieldKind::Phone) {
            failed.push(Field::Phone);
        }
        if !self.values.email.trim().is_empty() && !self.check(Field::Email, FieldKind::Email) {
            failed.push(Field::Email);
        }
        let time_slot = TimeSlot::from_code(self.values.time.trim());
        if time_slot.is_none() && !failed.contains(&Field::Time) {
            self.mark(Field::Time, false);
            failed.push(Field::Time);
        }

        let Some(time_slot) = time_slot.filter(|_| failed.is_empty()) else {
            return Err(SubmitError::Invalid(failed));
        };

        Ok(AppointmentRequest {
            name: self.values.name.trim().to_owned(),
            phone: self.values.phone.trim().to_owned(),
            email: non_empty(&self.values.email),
            date: self.values.date.trim().to_owned(),
            time_slot,
            message: non_empty(&self.values.message),
        })
    }

    /// Validate and enter the submitting phase.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::InFlight`] while a previous submission is
    /// pending, otherwise the [`validate_for_submit`](Self::validate_for_submit) error.
    pub fn start_submission(&mut self) -> Result<AppointmentRequest, SubmitError> {
        if self.is_submitting() {
            return Err(SubmitError::InFlight);
        }
        let request = self.validate_for_submit()?;
        self.phase = SubmitPhase::Submitting;
        Ok(request)
    }

    /// Leave the submitting phase; a success also clears the form.
    pub fn finish_submission(&mut self, succeeded: bool, default_date: String) {
        self.phase = SubmitPhase::Idle;
        if succeeded {
            self.reset(default_date);
        }
    }

    /// Clear every value and indicator, then restore the default date.
    pub fn reset(&mut self, default_date: String) {
        self.values = FormValues { date: default_date, ..FormValues::default() };
        self.validity.clear();
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Index of the control that Enter should focus after `current`.
#[must_use]
pub fn next_control_index(current: usize, len: usize) -> Option<usize> {
    current.checked_add(1).filter(|next| *next < len)
}
