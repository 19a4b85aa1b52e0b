use dioxus::prelude::*;

use crate::features::birthday::BirthdayWish;

#[derive(Props, PartialEq, Clone)]
pub struct WishCardProps {
    pub wish: BirthdayWish,
}

#[component]
pub fn WishCard(props: WishCardProps) -> Element {
    rsx! {
        div {
            class: "wish-card",
            div { class: "wish-emoji", "🎂🎉🎈" }
            h2 {
                class: "wish-heading",
                "{props.wish.heading}"
            }
            p {
                class: "wish-body",
                "{props.wish.body}"
            }
        }
    }
}
