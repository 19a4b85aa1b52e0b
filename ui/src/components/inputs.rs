//! Labeled input controls shared by the form pages

use dioxus::prelude::*;

#[derive(PartialEq, Clone, Copy, Debug)]
pub enum InputType {
    Text,
    Email,
    Tel,
    Number,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Email => "email",
            InputType::Tel => "tel",
            InputType::Number => "number",
        }
    }
}

/// Label text with the required marker appended
pub fn field_label(label: &str, required: bool) -> String {
    if required {
        format!("{} *", label)
    } else {
        label.to_string()
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct FormInputProps {
    pub name: String,
    pub label: String,
    pub value: String,
    #[props(default)]
    pub placeholder: String,
    pub input_type: InputType,
    #[props(default)]
    pub required: bool,
    /// `(min, max)` hint for number inputs
    #[props(!optional, default)]
    pub range: Option<(u32, u32)>,
    pub on_change: EventHandler<String>,
}

#[component]
pub fn FormInput(props: FormInputProps) -> Element {
    let min = props.range.map(|(min, _)| min.to_string());
    let max = props.range.map(|(_, max)| max.to_string());

    rsx! {
        div {
            class: "input-section",
            label {
                class: "input-label",
                r#for: "{props.name}",
                "{field_label(&props.label, props.required)}"
            }
            input {
                class: "input-field",
                id: "{props.name}",
                name: "{props.name}",
                r#type: "{props.input_type.as_str()}",
                value: "{props.value}",
                placeholder: "{props.placeholder}",
                required: props.required,
                min: min,
                max: max,
                oninput: move |event| props.on_change.call(event.value())
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct TextAreaInputProps {
    pub name: String,
    pub label: String,
    pub value: String,
    #[props(default)]
    pub placeholder: String,
    #[props(default = 3)]
    pub rows: u32,
    pub on_change: EventHandler<String>,
}

#[component]
pub fn TextAreaInput(props: TextAreaInputProps) -> Element {
    rsx! {
        div {
            class: "input-section",
            label {
                class: "input-label",
                r#for: "{props.name}",
                "{props.label}"
            }
            textarea {
                class: "input-field",
                id: "{props.name}",
                name: "{props.name}",
                rows: "{props.rows}",
                value: "{props.value}",
                placeholder: "{props.placeholder}",
                oninput: move |event| props.on_change.call(event.value())
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct CheckboxInputProps {
    pub name: String,
    pub label: String,
    pub checked: bool,
    #[props(default)]
    pub required: bool,
    pub on_change: EventHandler<bool>,
}

#[component]
pub fn CheckboxInput(props: CheckboxInputProps) -> Element {
    rsx! {
        div {
            class: "checkbox-section",
            input {
                class: "checkbox-input",
                r#type: "checkbox",
                id: "{props.name}",
                name: "{props.name}",
                checked: props.checked,
                required: props.required,
                onchange: move |event| props.on_change.call(event.checked())
            }
            label {
                class: "checkbox-label",
                r#for: "{props.name}",
                "{field_label(&props.label, props.required)}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_type_attribute_values() {
        assert_eq!(InputType::Email.as_str(), "email");
        assert_eq!(InputType::Tel.as_str(), "tel");
        assert_eq!(InputType::Number.as_str(), "number");
    }

    #[test]
    fn test_required_fields_get_marker() {
        assert_eq!(field_label("Full Name", true), "Full Name *");
        assert_eq!(field_label("Phone Number", false), "Phone Number");
    }
}
