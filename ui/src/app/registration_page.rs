use crate::console_info;
use dioxus::prelude::*;

use crate::components::display::CourseInformation;
use crate::components::forms::RegistrationForm;
use crate::features::registration::{RegistrationAction, RegistrationState};
use crate::services::config::FormConfig;

const FORMS_CSS: Asset = asset!("/assets/styling/forms.css");

#[component]
pub fn RegistrationPage() -> Element {
    // Embedders can override the defaults by providing a FormConfig in context
    let config = use_hook(|| try_consume_context::<FormConfig>().unwrap_or_default());

    let mut state = use_signal(|| RegistrationState::new(&config.registration));

    use_effect(move || {
        console_info!("[Registration] Registration form mounted");
    });

    // Dispatch function for actions - using in-place reduction to preserve Dioxus Signal reactivity
    let dispatch = EventHandler::new(move |action: RegistrationAction| {
        state.with_mut(|s| {
            s.reduce_in_place(action);
        });
    });

    rsx! {
        document::Link { rel: "stylesheet", href: FORMS_CSS }

        div {
            class: "page-container registration-page",

            div {
                class: "title-container",
                h1 {
                    class: "page-title",
                    "Software Engineering Lecture Registration"
                }
                p {
                    class: "page-subtitle",
                    "Register for Software Engineering courses for the upcoming semester"
                }
            }

            div {
                class: "form-card",
                RegistrationForm {
                    state: state,
                    dispatch: dispatch,
                    config: config.registration.clone()
                }
            }

            CourseInformation {}
        }
    }
}
