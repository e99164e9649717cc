use dioxus::prelude::*;

/// Filter controls above the product grid. Not wired to the query yet.
#[component]
pub fn Filter() -> Element {
    rsx! {
        div {
            class: "field has-addons",
            div {
                class: "control is-expanded",
                input {
                    class: "input",
                    r#type: "text",
                    placeholder: "Filter products",
                    disabled: true,
                }
            }
        }
    }
}
