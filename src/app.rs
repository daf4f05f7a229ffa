use dioxus::prelude::*;
use showcase_core::{Navigator, Page};

use crate::components::TopNav;
use crate::context::{SharedNavigator, WebviewPort, HASH_LISTENER};
use crate::pages::{ComponentsPage, DesignPage, ExamplesPage, IconsPage, MobileComponentsPage};
use crate::theme::{token_variables, GLOBAL_STYLES};

/// Root application component.
///
/// Owns the navigator, wires the webview's `hashchange` into it, and mounts
/// the page matching the current fragment.
#[component]
pub fn App() -> Element {
    let port = use_hook(|| WebviewPort::new(&crate::initial_route()));
    // Resolve the initial fragment before the first render so the mounted
    // page already matches it.
    let mut navigator: SharedNavigator = use_signal({
        let port = port.clone();
        move || Navigator::started(port)
    });

    // Provide navigator context to all child components
    use_context_provider(|| navigator);

    // Follow external changes
    use_future(move || {
        let port = port.clone();
        async move {
            let mut events = navigator.read().subscribe();
            port.mirror_to_webview();

            let mut listener = document::eval(HASH_LISTENER);
            loop {
                match listener.recv::<String>().await {
                    Ok(hash) => {
                        if port.receive(&hash) {
                            navigator.write().pump(&mut events);
                        }
                    }
                    Err(e) => {
                        tracing::error!("hashchange listener stopped: {:?}", e);
                        break;
                    }
                }
            }
        }
    });

    let view = navigator.read().view();
    let tokens = use_hook(token_variables);

    rsx! {
        style { {tokens} }
        style { {GLOBAL_STYLES} }
        div { class: "app",
            TopNav {}
            main { class: "app-main",
                match view.page {
                    Page::Design => rsx! { DesignPage { active: view.section.clone() } },
                    Page::Components => rsx! { ComponentsPage { active: view.section.clone() } },
                    Page::Icons => rsx! { IconsPage { active: view.section.clone() } },
                    Page::Examples => rsx! { ExamplesPage { active: view.section.clone() } },
                    Page::MobileComponents => rsx! { MobileComponentsPage { active: view.section.clone() } },
                }
            }
        }
    }
}
