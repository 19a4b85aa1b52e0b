use dioxus::prelude::*;

use crate::components::inputs::field_label;

#[derive(Props, PartialEq, Clone)]
pub struct OptionSelectorProps {
    pub name: String,
    pub label: String,
    pub options: Vec<String>,
    pub selected: String,
    #[props(default)]
    pub required: bool,
    pub on_change: EventHandler<String>,
}

#[component]
pub fn OptionSelector(props: OptionSelectorProps) -> Element {
    let options = props.options;
    let selected = props.selected;
    let on_change = props.on_change;

    rsx! {
        div {
            class: "input-section",
            label {
                class: "input-label",
                r#for: "{props.name}",
                "{field_label(&props.label, props.required)}"
            }
            select {
                class: "input-field option-selector",
                id: "{props.name}",
                name: "{props.name}",
                value: "{selected}",
                required: props.required,
                onchange: move |evt| {
                    on_change.call(evt.value());
                },
                for choice in options {
                    option {
                        key: "{choice}",
                        value: "{choice}",
                        selected: choice == selected,
                        "{choice}"
                    }
                }
            }
        }
    }
}
