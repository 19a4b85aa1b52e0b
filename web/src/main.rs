use dioxus::prelude::*;
use ui::{BirthdayWishPage, RegistrationPage};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Title { "Course Registration" }

        Router::<Route> {}
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[route("/")]
    Home {},
    #[route("/birthday")]
    Birthday {},
}

#[component]
fn Home() -> Element {
    rsx! {
        div {
            RegistrationPage {}
        }
    }
}

#[component]
fn Birthday() -> Element {
    rsx! {
        div {
            BirthdayWishPage {}
        }
    }
}
