use dioxus::prelude::*;

#[component]
pub fn ErrorMessage(
    message: String,
    #[props(default = "Error".to_string())] title: String,
) -> Element {
    rsx! {
        div {
            class: "alert alert-error",
            role: "alert",
            strong { "{title}: " }
            "{message}"
        }
    }
}
