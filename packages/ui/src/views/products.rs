//! Vendor product list.

use std::time::Duration;

use api::{ProductFilter, SessionUser};
use dioxus::prelude::*;

use crate::products::{
    failure_notice, poll_products, run_action, scope_to_user, ProductAction, ProductListState,
    ServerFnBackend, DEFAULT_POLL_INTERVAL,
};
use crate::{Filter, ProductCardItem};

/// The signed-in vendor's products, refreshed every `poll_interval`.
///
/// The poll runs as a task of this component and is cancelled when it unmounts.
/// Archive/restore refetch the list as soon as the mutation completes; a failure
/// shows a dismissible notice above the grid. When only the refetch fails the
/// list is left for the next poll tick.
#[component]
pub fn ProductsView(
    user: SessionUser,
    #[props(default = DEFAULT_POLL_INTERVAL)] poll_interval: Duration,
) -> Element {
    let mut state = use_signal(ProductListState::default);
    let mut action_error = use_signal(|| Option::<String>::None);

    // Track the user in a signal so the poll restarts for a different subject
    let mut poll_user = use_signal(|| user.clone());
    if poll_user.peek().sub != user.sub {
        poll_user.set(user.clone());
    }

    let _poll = use_resource(move || {
        let user = poll_user();
        async move {
            let filter = ProductFilter::for_user(&user);
            poll_products(&ServerFnBackend, filter, poll_interval, |result| {
                state.set(ProductListState::from_result(result, &user));
            })
            .await;
        }
    });

    let on_action = use_callback(move |(action, product_id): (ProductAction, String)| {
        let user = user.clone();
        spawn(async move {
            let filter = ProductFilter::for_user(&user);
            match run_action(&ServerFnBackend, action, &product_id, &filter).await {
                Ok(products) => {
                    action_error.set(None);
                    state.set(ProductListState::Ready(scope_to_user(products, &user)));
                }
                Err(e) => action_error.set(Some(failure_notice(action, &e))),
            }
        });
    });

    match state() {
        ProductListState::Loading => rsx! {
            div {
                class: "pageloader is-active is-bottom-to-top",
                span { class: "title", "Retrieving Your Products..." }
            }
        },
        ProductListState::Error(message) => rsx! {
            div {
                class: "pageloader has-background-danger is-active is-bottom-to-top",
                span { class: "title", "{message}" }
            }
        },
        ProductListState::Ready(products) => rsx! {
            section {
                class: "section",
                section {
                    class: "section",
                    h1 { class: "title", "Products" }
                    Filter {}
                }
                if let Some(notice) = action_error() {
                    div {
                        class: "notification is-danger",
                        button {
                            class: "delete",
                            onclick: move |_| action_error.set(None),
                        }
                        "{notice}"
                    }
                }
                section {
                    class: "section",
                    div {
                        class: "columns is-multiline",
                        for product in products {
                            ProductCardItem {
                                key: "{product.id}",
                                product: product.clone(),
                                has_vendor_actions: true,
                                on_archive: move |id: String| on_action.call((ProductAction::Archive, id)),
                                on_restore: move |id: String| on_action.call((ProductAction::Restore, id)),
                            }
                        }
                    }
                }
            }
        },
    }
}
