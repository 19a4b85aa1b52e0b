// Core types for the registration form - no dioxus imports needed here
use serde::{Deserialize, Serialize};
use std::fmt;

use super::catalog::{Course, Major};
use crate::services::config::RegistrationConfig;

/// Everything the registration form currently holds. Lives only in view state.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRecord {
    pub full_name: String,
    pub email: String,
    pub student_id: String,
    pub phone_number: String,
    pub semester: u32,
    pub major: Major,
    pub course: Course,
    pub previous_experience: String,
    pub has_laptop: bool,
    pub agree_to_terms: bool,
}

impl Default for RegistrationRecord {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            student_id: String::new(),
            phone_number: String::new(),
            semester: 1,
            major: Major::ComputerScience,
            course: Course::SE101,
            previous_experience: String::new(),
            has_laptop: true,
            agree_to_terms: false,
        }
    }
}

impl RegistrationRecord {
    /// Blank record whose major and course default to the first configured options
    pub fn with_defaults(config: &RegistrationConfig) -> Self {
        let fallback = Self::default();
        Self {
            major: config.majors.first().copied().unwrap_or(fallback.major),
            course: config.courses.first().copied().unwrap_or(fallback.course),
            ..fallback
        }
    }

    /// Return a new record with exactly one field replaced
    pub fn apply(self, update: FieldUpdate) -> Self {
        match update {
            FieldUpdate::FullName(full_name) => Self { full_name, ..self },
            FieldUpdate::Email(email) => Self { email, ..self },
            FieldUpdate::StudentId(student_id) => Self { student_id, ..self },
            FieldUpdate::PhoneNumber(phone_number) => Self {
                phone_number,
                ..self
            },
            FieldUpdate::Semester(semester) => Self { semester, ..self },
            FieldUpdate::Major(major) => Self { major, ..self },
            FieldUpdate::Course(course) => Self { course, ..self },
            FieldUpdate::PreviousExperience(previous_experience) => Self {
                previous_experience,
                ..self
            },
            FieldUpdate::HasLaptop(has_laptop) => Self { has_laptop, ..self },
            FieldUpdate::AgreeToTerms(agree_to_terms) => Self {
                agree_to_terms,
                ..self
            },
        }
    }
}

/// Names of the form's inputs, matching the `name` attributes in the markup
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RegistrationField {
    FullName,
    Email,
    StudentId,
    PhoneNumber,
    Semester,
    Major,
    Course,
    PreviousExperience,
    HasLaptop,
    AgreeToTerms,
}

impl RegistrationField {
    pub const ALL: [RegistrationField; 10] = [
        RegistrationField::FullName,
        RegistrationField::Email,
        RegistrationField::StudentId,
        RegistrationField::PhoneNumber,
        RegistrationField::Semester,
        RegistrationField::Major,
        RegistrationField::Course,
        RegistrationField::PreviousExperience,
        RegistrationField::HasLaptop,
        RegistrationField::AgreeToTerms,
    ];

    /// Text fields that must be non-empty before submitting
    pub const REQUIRED_TEXT: [RegistrationField; 3] = [
        RegistrationField::FullName,
        RegistrationField::Email,
        RegistrationField::StudentId,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            RegistrationField::FullName => "fullName",
            RegistrationField::Email => "email",
            RegistrationField::StudentId => "studentId",
            RegistrationField::PhoneNumber => "phoneNumber",
            RegistrationField::Semester => "semester",
            RegistrationField::Major => "major",
            RegistrationField::Course => "course",
            RegistrationField::PreviousExperience => "previousExperience",
            RegistrationField::HasLaptop => "hasLaptop",
            RegistrationField::AgreeToTerms => "agreeToTerms",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RegistrationField::FullName => "Full Name",
            RegistrationField::Email => "Email Address",
            RegistrationField::StudentId => "Student ID",
            RegistrationField::PhoneNumber => "Phone Number",
            RegistrationField::Semester => "Current Semester",
            RegistrationField::Major => "Major",
            RegistrationField::Course => "Select Course",
            RegistrationField::PreviousExperience => "Previous Programming Experience",
            RegistrationField::HasLaptop => "I have access to a laptop for coursework",
            RegistrationField::AgreeToTerms => "I agree to the terms and conditions",
        }
    }
}

impl fmt::Display for RegistrationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw payload coming off an input widget
#[derive(Clone, PartialEq, Debug)]
pub enum FieldInput {
    Text(String),
    Checked(bool),
}

/// One typed change to a single field of the record
#[derive(Clone, PartialEq, Debug)]
pub enum FieldUpdate {
    FullName(String),
    Email(String),
    StudentId(String),
    PhoneNumber(String),
    Semester(u32),
    Major(Major),
    Course(Course),
    PreviousExperience(String),
    HasLaptop(bool),
    AgreeToTerms(bool),
}

impl FieldUpdate {
    /// Convert a field name plus raw widget value into a typed update.
    ///
    /// Checkboxes take the checked flag, `semester` is parsed with
    /// [`parse_semester`], and select values are mapped back to their option.
    /// Returns `None` when the payload does not fit the field (a text value for a
    /// checkbox, or an unknown option label).
    pub fn from_input(field: RegistrationField, input: FieldInput) -> Option<FieldUpdate> {
        let update = match (field, input) {
            (RegistrationField::HasLaptop, FieldInput::Checked(checked)) => {
                FieldUpdate::HasLaptop(checked)
            }
            (RegistrationField::AgreeToTerms, FieldInput::Checked(checked)) => {
                FieldUpdate::AgreeToTerms(checked)
            }
            (_, FieldInput::Checked(_)) => return None,
            (RegistrationField::FullName, FieldInput::Text(raw)) => FieldUpdate::FullName(raw),
            (RegistrationField::Email, FieldInput::Text(raw)) => FieldUpdate::Email(raw),
            (RegistrationField::StudentId, FieldInput::Text(raw)) => FieldUpdate::StudentId(raw),
            (RegistrationField::PhoneNumber, FieldInput::Text(raw)) => {
                FieldUpdate::PhoneNumber(raw)
            }
            (RegistrationField::Semester, FieldInput::Text(raw)) => {
                FieldUpdate::Semester(parse_semester(&raw))
            }
            (RegistrationField::Major, FieldInput::Text(raw)) => {
                FieldUpdate::Major(Major::from_label(&raw)?)
            }
            (RegistrationField::Course, FieldInput::Text(raw)) => {
                FieldUpdate::Course(Course::from_label(&raw)?)
            }
            (RegistrationField::PreviousExperience, FieldInput::Text(raw)) => {
                FieldUpdate::PreviousExperience(raw)
            }
            (RegistrationField::HasLaptop | RegistrationField::AgreeToTerms, FieldInput::Text(_)) => {
                return None
            }
        };
        Some(update)
    }

    pub fn field(&self) -> RegistrationField {
        match self {
            FieldUpdate::FullName(_) => RegistrationField::FullName,
            FieldUpdate::Email(_) => RegistrationField::Email,
            FieldUpdate::StudentId(_) => RegistrationField::StudentId,
            FieldUpdate::PhoneNumber(_) => RegistrationField::PhoneNumber,
            FieldUpdate::Semester(_) => RegistrationField::Semester,
            FieldUpdate::Major(_) => RegistrationField::Major,
            FieldUpdate::Course(_) => RegistrationField::Course,
            FieldUpdate::PreviousExperience(_) => RegistrationField::PreviousExperience,
            FieldUpdate::HasLaptop(_) => RegistrationField::HasLaptop,
            FieldUpdate::AgreeToTerms(_) => RegistrationField::AgreeToTerms,
        }
    }
}

/// Parse the semester input like a browser number field would.
///
/// Leading whitespace is skipped and the leading run of digits is used
/// (`"3abc"` -> 3). Anything without digits, or a value below 1, becomes 1.
pub fn parse_semester(raw: &str) -> u32 {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if negative || end == 0 {
        return 1;
    }

    // Overflowing input saturates rather than wrapping back to a small value
    let value = digits[..end].parse::<u32>().unwrap_or(u32::MAX);
    value.max(1)
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MessageKind {
    Success,
    Error,
}

/// Banner shown above the submit button
#[derive(Clone, PartialEq, Debug)]
pub struct StatusMessage {
    pub kind: MessageKind,
    pub text: String,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Error,
            text: text.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == MessageKind::Success
    }
}

pub const REGISTRATION_SUCCESS_MESSAGE: &str =
    "Registration successful! You will receive a confirmation email shortly.";

// Where the form sits in its lifecycle
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RegistrationPhase {
    Idle,
    Editing,
    Submitting,
    Success,
}

#[derive(Clone, PartialEq, Debug)]
pub struct RegistrationState {
    pub record: RegistrationRecord,
    /// Record restored after a successful submission
    pub defaults: RegistrationRecord,
    pub is_submitting: bool,
    pub message: Option<StatusMessage>,
}

impl Default for RegistrationState {
    fn default() -> Self {
        Self::new(&RegistrationConfig::default())
    }
}

// Action enum for state mutations
#[derive(Clone, Debug)]
pub enum RegistrationAction {
    UpdateField(FieldUpdate),
    SetSubmitting(bool),
    SetMessage(Option<StatusMessage>),
    SubmissionSucceeded,
    SubmissionFailed(String),
}

impl RegistrationState {
    pub fn new(config: &RegistrationConfig) -> Self {
        let defaults = RegistrationRecord::with_defaults(config);
        Self {
            record: defaults.clone(),
            defaults,
            is_submitting: false,
            message: None,
        }
    }

    pub fn phase(&self) -> RegistrationPhase {
        if self.is_submitting {
            RegistrationPhase::Submitting
        } else if self.record != self.defaults {
            RegistrationPhase::Editing
        } else if self.message.as_ref().is_some_and(StatusMessage::is_success) {
            RegistrationPhase::Success
        } else {
            RegistrationPhase::Idle
        }
    }

    pub fn reduce_in_place(&mut self, action: RegistrationAction) {
        match action {
            RegistrationAction::UpdateField(update) => {
                let record = std::mem::take(&mut self.record);
                self.record = record.apply(update);
            }
            RegistrationAction::SetSubmitting(submitting) => {
                self.is_submitting = submitting;
            }
            RegistrationAction::SetMessage(message) => {
                self.message = message;
            }
            RegistrationAction::SubmissionSucceeded => {
                self.message = Some(StatusMessage::success(REGISTRATION_SUCCESS_MESSAGE));
                self.record = self.defaults.clone();
            }
            RegistrationAction::SubmissionFailed(message) => {
                self.message = Some(StatusMessage::error(message));
            }
        }
    }
}
