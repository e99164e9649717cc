//! A single product in the vendor grid.

use api::Product;
use dioxus::prelude::*;

use crate::icons::{FaBoxArchive, FaRotateLeft};
use crate::products::ProductAction;
use crate::Icon;

/// Card showing one product, with archive/restore actions for its vendor.
///
/// The action only applicable to the current status is enabled; each handler
/// receives the product id.
#[component]
pub fn ProductCardItem(
    product: Product,
    #[props(default)] has_vendor_actions: bool,
    on_archive: EventHandler<String>,
    on_restore: EventHandler<String>,
) -> Element {
    let archive_id = product.id.clone();
    let restore_id = product.id.clone();
    let archived = product.is_archived();
    let name = product.name.clone();
    let price = product.display_price();
    let status = product.status.label();
    let status_class = if archived { "tag is-warning" } else { "tag is-success" };

    rsx! {
        div {
            class: "column is-one-quarter",
            div {
                class: "card product-card",
                if let Some(image_url) = product.image_url.as_ref() {
                    div {
                        class: "card-image",
                        figure {
                            class: "image is-4by3",
                            img { src: "{image_url}", alt: "{name}" }
                        }
                    }
                }
                div {
                    class: "card-content",
                    p { class: "title is-5", "{name}" }
                    p { class: "subtitle is-6", "{price}" }
                    span { class: "{status_class}", "{status}" }
                    if let Some(description) = product.description.as_ref() {
                        div { class: "content", "{description}" }
                    }
                }
                if has_vendor_actions {
                    footer {
                        class: "card-footer",
                        button {
                            class: "card-footer-item button is-white",
                            disabled: archived,
                            onclick: move |_| on_archive.call(archive_id.clone()),
                            Icon { icon: FaBoxArchive, width: 14, height: 14 }
                            span { {ProductAction::Archive.label()} }
                        }
                        button {
                            class: "card-footer-item button is-white",
                            disabled: !archived,
                            onclick: move |_| on_restore.call(restore_id.clone()),
                            Icon { icon: FaRotateLeft, width: 14, height: 14 }
                            span { {ProductAction::Restore.label()} }
                        }
                    }
                }
            }
        }
    }
}
