use dioxus::prelude::*;

use crate::features::registration::{MessageKind, StatusMessage};

pub fn status_class(kind: MessageKind) -> &'static str {
    match kind {
        MessageKind::Success => "status-message success",
        MessageKind::Error => "status-message error",
    }
}

pub fn status_style(kind: MessageKind) -> &'static str {
    match kind {
        MessageKind::Success => "color: #166534; background-color: #f0fdf4; border: 1px solid #bbf7d0; padding: 12px; border-radius: 8px; margin-bottom: 16px;",
        MessageKind::Error => "color: #991b1b; background-color: #fef2f2; border: 1px solid #fecaca; padding: 12px; border-radius: 8px; margin-bottom: 16px;",
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct StatusBannerProps {
    #[props(!optional)]
    pub message: Option<StatusMessage>,
}

#[component]
pub fn StatusBanner(props: StatusBannerProps) -> Element {
    match props.message {
        Some(message) => rsx! {
            div {
                class: status_class(message.kind),
                style: status_style(message.kind),
                "{message.text}"
            }
        },
        None => rsx! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_class_by_kind() {
        assert_eq!(status_class(MessageKind::Success), "status-message success");
        assert_eq!(status_class(MessageKind::Error), "status-message error");
    }
}
