use dioxus::prelude::*;

use crate::components::display::WishCard;
use crate::features::birthday::*;
use crate::services::config::BirthdayConfig;

#[derive(Props, PartialEq, Clone)]
pub struct BirthdayWishFormProps {
    pub state: Signal<WishState>,
    pub dispatch: EventHandler<WishAction>,
    pub config: BirthdayConfig,
}

#[component]
pub fn BirthdayWishForm(props: BirthdayWishFormProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;
    let current = state();

    rsx! {
        div {
            class: "wish-generator",

            div {
                class: "input-section",
                label {
                    class: "input-label",
                    r#for: "bestieName",
                    "Your bestie's name"
                }
                div {
                    class: "wish-input-row",
                    input {
                        class: "input-field",
                        id: "bestieName",
                        name: "bestieName",
                        r#type: "text",
                        value: "{current.bestie_name}",
                        placeholder: "Enter your bestie's name",
                        oninput: move |event| dispatch.call(WishAction::SetName(event.value())),
                        // Enter confirms even while the button is disabled
                        onkeydown: move |event: KeyboardEvent| {
                            if event.key() == Key::Enter {
                                dispatch.call(WishAction::Confirm);
                            }
                        }
                    }
                    button {
                        class: "wish-button",
                        r#type: "button",
                        disabled: !current.can_confirm(),
                        onclick: move |_| dispatch.call(WishAction::Confirm),
                        "Generate Wish 🎉"
                    }
                }
            }

            if let Some(wish) = current.wish(&props.config) {
                WishCard { wish: wish }
            }
        }
    }
}
