use super::types::*;
use crate::services::errors::ValidationError;

/// Required text fields that are still empty, in form order.
///
/// Matches the browser's `required` check: a value made only of spaces counts as filled.
pub fn missing_required_fields(record: &RegistrationRecord) -> Vec<RegistrationField> {
    RegistrationField::REQUIRED_TEXT
        .into_iter()
        .filter(|field| required_value(record, *field).is_empty())
        .collect()
}

fn required_value(record: &RegistrationRecord, field: RegistrationField) -> &str {
    match field {
        RegistrationField::FullName => &record.full_name,
        RegistrationField::Email => &record.email,
        RegistrationField::StudentId => &record.student_id,
        _ => "",
    }
}

/// Gate run before a submission enters the loading state.
///
/// Consent is checked first, so an unchecked box always yields the terms
/// message regardless of what else is missing.
pub fn validate_submission(record: &RegistrationRecord) -> Result<(), ValidationError> {
    if !record.agree_to_terms {
        return Err(ValidationError::TermsNotAccepted);
    }

    match missing_required_fields(record).first() {
        Some(field) => Err(ValidationError::MissingRequiredField(*field)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_record() -> RegistrationRecord {
        RegistrationRecord {
            full_name: "Jane Doe".to_string(),
            email: "jane@uni.edu".to_string(),
            student_id: "STU1".to_string(),
            agree_to_terms: true,
            ..RegistrationRecord::default()
        }
    }

    #[test]
    fn test_validate_submission_complete() {
        assert_eq!(validate_submission(&complete_record()), Ok(()));
    }

    #[test]
    fn test_terms_checked_before_required_fields() {
        let record = RegistrationRecord::default();
        assert_eq!(
            validate_submission(&record),
            Err(ValidationError::TermsNotAccepted)
        );
    }

    #[test]
    fn test_first_missing_required_field_is_reported() {
        let mut record = complete_record();
        record.email = String::new();
        record.student_id = String::new();

        assert_eq!(
            missing_required_fields(&record),
            vec![RegistrationField::Email, RegistrationField::StudentId]
        );
        assert_eq!(
            validate_submission(&record),
            Err(ValidationError::MissingRequiredField(RegistrationField::Email))
        );
    }

    #[test]
    fn test_whitespace_only_values_count_as_filled() {
        let record = RegistrationRecord {
            full_name: "   ".to_string(),
            email: " ".to_string(),
            ..complete_record()
        };
        assert!(missing_required_fields(&record).is_empty());
        assert_eq!(validate_submission(&record), Ok(()));

        let record = RegistrationRecord {
            full_name: String::new(),
            ..complete_record()
        };
        assert_eq!(
            validate_submission(&record),
            Err(ValidationError::MissingRequiredField(
                RegistrationField::FullName
            ))
        );
    }

    #[test]
    fn test_optional_fields_may_stay_empty() {
        let record = RegistrationRecord {
            phone_number: String::new(),
            previous_experience: String::new(),
            has_laptop: false,
            ..complete_record()
        };
        assert_eq!(validate_submission(&record), Ok(()));
    }
}
