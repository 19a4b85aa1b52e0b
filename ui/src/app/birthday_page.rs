use crate::console_info;
use dioxus::prelude::*;

use crate::components::forms::BirthdayWishForm;
use crate::features::birthday::{WishAction, WishPhase, WishState};
use crate::services::config::FormConfig;

const FORMS_CSS: Asset = asset!("/assets/styling/forms.css");

#[component]
pub fn BirthdayWishPage() -> Element {
    let config = use_hook(|| try_consume_context::<FormConfig>().unwrap_or_default());

    let mut state = use_signal(WishState::default);

    let dispatch = EventHandler::new(move |action: WishAction| {
        state.with_mut(|s| {
            let was_confirmed = s.phase() == WishPhase::Confirmed;
            s.reduce_in_place(action);
            if !was_confirmed && s.phase() == WishPhase::Confirmed {
                console_info!("[BirthdayWish] Wish generated for {}", s.displayed_name);
            }
        });
    });

    rsx! {
        document::Link { rel: "stylesheet", href: FORMS_CSS }

        div {
            class: "page-container birthday-page",

            div {
                class: "title-container",
                h1 {
                    class: "page-title",
                    "Birthday Wish Generator 🎂"
                }
                p {
                    class: "page-subtitle",
                    "Type your bestie's name and make their day"
                }
            }

            div {
                class: "form-card",
                BirthdayWishForm {
                    state: state,
                    dispatch: dispatch,
                    config: config.birthday.clone()
                }
            }
        }
    }
}
