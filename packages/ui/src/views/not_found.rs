use dioxus::prelude::*;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div {
            class: "view-page not-found",
            h1 { "404" }
            h3 { "Bad gateway" }
            p { class: "muted", "Nothing lives at /{path}." }
            Link { class: "btn btn-primary", to: "/", "Back to home" }
        }
    }
}
