use dioxus::prelude::*;

/// Static facts shown under the registration form
pub const COURSE_FACTS: [(&str, &str, &str); 3] = [
    ("Prerequisites", "Basic programming knowledge (Python/Java)", "info-card prerequisites"),
    ("Duration", "16 weeks | 3 credits | Weekly lectures", "info-card duration"),
    ("Requirements", "Laptop, IDE installation, GitHub account", "info-card requirements"),
];

#[component]
pub fn CourseInformation() -> Element {
    rsx! {
        div {
            class: "course-information",
            h3 {
                class: "section-title",
                "Course Information"
            }
            div {
                class: "info-grid",
                for (title, text, class) in COURSE_FACTS {
                    div {
                        key: "{title}",
                        class: class,
                        h4 { "{title}" }
                        p { "{text}" }
                    }
                }
            }
        }
    }
}
