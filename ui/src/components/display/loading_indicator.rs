use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct LoadingIndicatorProps {
    pub message: String,
}

/// Inline spinner used inside buttons while work is in flight
#[component]
pub fn LoadingIndicator(props: LoadingIndicatorProps) -> Element {
    rsx! {
        span {
            class: "loading-indicator",
            span { class: "spinner" }
            "{props.message}"
        }
    }
}
