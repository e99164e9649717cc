use dioxus::prelude::*;
use ui::views::HomeView;
use ui::Navbar;

#[component]
pub fn Home() -> Element {
    rsx! {
        Navbar {
            Link { class: "navbar-item has-text-weight-bold", to: "/", "Storefront" }
        }
        HomeView {}
    }
}
