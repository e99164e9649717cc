//! `/vendors/products`: the signed-in vendor's catalog.

use dioxus::prelude::*;
use ui::views::ProductsView;
use ui::{use_auth, DefaultLayout};

/// Product list wrapped in the default layout.
///
/// The layout gates on the session; the user is then handed to the view explicitly.
#[component]
pub fn ProductsIndex() -> Element {
    let auth = use_auth();

    rsx! {
        DefaultLayout {
            if let Some(user) = auth().user {
                ProductsView { user }
            }
        }
    }
}
