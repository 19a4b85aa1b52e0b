use dioxus::prelude::*;
use std::rc::Rc;

use crate::components::display::{LoadingIndicator, StatusBanner};
use crate::components::forms::OptionSelector;
use crate::components::inputs::{CheckboxInput, FormInput, InputType, TextAreaInput};
use crate::features::registration::*;
use crate::services::config::RegistrationConfig;
use crate::services::submission::{SharedSubmitter, SimulatedSubmitter};
use crate::{console_debug, console_warn};

const TERMS_LABEL: &str =
    "I agree to the terms and conditions and understand that this registration is binding";

#[derive(Props, PartialEq, Clone)]
pub struct RegistrationFormProps {
    pub state: Signal<RegistrationState>,
    pub dispatch: EventHandler<RegistrationAction>,
    pub config: RegistrationConfig,
}

#[component]
pub fn RegistrationForm(props: RegistrationFormProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;
    let config = props.config;

    // An embedder may provide a real backend through context
    let submitter = use_hook(|| {
        try_consume_context::<SharedSubmitter>().unwrap_or_else(|| {
            Rc::new(SimulatedSubmitter::from_config(&config)) as SharedSubmitter
        })
    });

    let on_field = move |field: RegistrationField, input: FieldInput| {
        match FieldUpdate::from_input(field, input) {
            Some(update) => dispatch.call(RegistrationAction::UpdateField(update)),
            None => console_warn!("[Registration] Ignoring invalid value for {}", field.name()),
        }
    };

    let on_submit = move |event: FormEvent| {
        event.prevent_default();

        let snapshot = state();
        let submitter = submitter.clone();
        spawn(async move {
            let result =
                submit_registration(&snapshot, &*submitter, |action| dispatch.call(action))
                    .await;
            if let Err(e) = result {
                console_debug!("[Registration] Submission ended without success: {}", e);
            }
        });
    };

    let current = state();
    let record = current.record;
    let is_submitting = current.is_submitting;
    let major_options: Vec<String> = config
        .majors
        .iter()
        .map(|major| major.label().to_string())
        .collect();
    let course_options: Vec<String> = config.courses.iter().map(Course::label).collect();

    rsx! {
        form {
            class: "registration-form",
            onsubmit: on_submit,

            // Personal Information
            div {
                class: "form-section",
                h2 {
                    class: "form-title",
                    "Personal Information"
                }
                div {
                    class: "form-grid",
                    FormInput {
                        name: RegistrationField::FullName.name().to_string(),
                        label: RegistrationField::FullName.label().to_string(),
                        value: record.full_name,
                        placeholder: "John Doe".to_string(),
                        input_type: InputType::Text,
                        required: true,
                        on_change: move |value: String| {
                            on_field(RegistrationField::FullName, FieldInput::Text(value));
                        }
                    }
                    FormInput {
                        name: RegistrationField::Email.name().to_string(),
                        label: RegistrationField::Email.label().to_string(),
                        value: record.email,
                        placeholder: "john@university.edu".to_string(),
                        input_type: InputType::Email,
                        required: true,
                        on_change: move |value: String| {
                            on_field(RegistrationField::Email, FieldInput::Text(value));
                        }
                    }
                    FormInput {
                        name: RegistrationField::StudentId.name().to_string(),
                        label: RegistrationField::StudentId.label().to_string(),
                        value: record.student_id,
                        placeholder: "STU123456".to_string(),
                        input_type: InputType::Text,
                        required: true,
                        on_change: move |value: String| {
                            on_field(RegistrationField::StudentId, FieldInput::Text(value));
                        }
                    }
                    FormInput {
                        name: RegistrationField::PhoneNumber.name().to_string(),
                        label: RegistrationField::PhoneNumber.label().to_string(),
                        value: record.phone_number,
                        placeholder: "+1 (555) 123-4567".to_string(),
                        input_type: InputType::Tel,
                        on_change: move |value: String| {
                            on_field(RegistrationField::PhoneNumber, FieldInput::Text(value));
                        }
                    }
                }
            }

            // Academic Information
            div {
                class: "form-section",
                h2 {
                    class: "form-title",
                    "Academic Information"
                }
                div {
                    class: "form-grid",
                    FormInput {
                        name: RegistrationField::Semester.name().to_string(),
                        label: RegistrationField::Semester.label().to_string(),
                        value: record.semester.to_string(),
                        placeholder: "1".to_string(),
                        input_type: InputType::Number,
                        required: true,
                        range: Some((1, 12)),
                        on_change: move |value: String| {
                            on_field(RegistrationField::Semester, FieldInput::Text(value));
                        }
                    }
                    OptionSelector {
                        name: RegistrationField::Major.name().to_string(),
                        label: RegistrationField::Major.label().to_string(),
                        options: major_options,
                        selected: record.major.label().to_string(),
                        required: true,
                        on_change: move |value: String| {
                            on_field(RegistrationField::Major, FieldInput::Text(value));
                        }
                    }
                }
                OptionSelector {
                    name: RegistrationField::Course.name().to_string(),
                    label: RegistrationField::Course.label().to_string(),
                    options: course_options,
                    selected: record.course.label(),
                    required: true,
                    on_change: move |value: String| {
                        on_field(RegistrationField::Course, FieldInput::Text(value));
                    }
                }
                TextAreaInput {
                    name: RegistrationField::PreviousExperience.name().to_string(),
                    label: RegistrationField::PreviousExperience.label().to_string(),
                    value: record.previous_experience,
                    placeholder: "Describe any previous programming or software engineering experience...".to_string(),
                    on_change: move |value: String| {
                        on_field(RegistrationField::PreviousExperience, FieldInput::Text(value));
                    }
                }
            }

            // Additional Information
            div {
                class: "form-section",
                h2 {
                    class: "form-title",
                    "Additional Information"
                }
                CheckboxInput {
                    name: RegistrationField::HasLaptop.name().to_string(),
                    label: RegistrationField::HasLaptop.label().to_string(),
                    checked: record.has_laptop,
                    on_change: move |checked: bool| {
                        on_field(RegistrationField::HasLaptop, FieldInput::Checked(checked));
                    }
                }
                CheckboxInput {
                    name: RegistrationField::AgreeToTerms.name().to_string(),
                    label: TERMS_LABEL.to_string(),
                    checked: record.agree_to_terms,
                    required: true,
                    on_change: move |checked: bool| {
                        on_field(RegistrationField::AgreeToTerms, FieldInput::Checked(checked));
                    }
                }
            }

            // Submit Button and Status Message
            div {
                class: "button-section",
                StatusBanner { message: current.message }
                button {
                    class: if is_submitting { "submit-button submitting" } else { "submit-button" },
                    r#type: "submit",
                    disabled: is_submitting,
                    if is_submitting {
                        LoadingIndicator { message: "Processing...".to_string() }
                    } else {
                        "Register for Course"
                    }
                }
                p {
                    class: "form-footnote",
                    "* Required fields. You will receive a confirmation email within 24 hours."
                }
            }
        }
    }
}
