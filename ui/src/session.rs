//! Session context and hooks for the UI.
//!
//! [`SessionProvider`] constructs the one [`SessionStore`] the app shares,
//! hydrating it from persisted storage, and injects it into the component
//! tree as a signal. Everything that attaches a bearer token or toggles on
//! login state reads it through [`use_session`], so there is a single source
//! of truth and no component ever holds a stale copy.

use dioxus::prelude::*;
use store::SessionStore;

/// Token persistence for the current platform: browser local storage on the
/// web, in-memory elsewhere.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type AppTokenStore = store::LocalStorageTokenStore;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type AppTokenStore = store::MemoryTokenStore;

pub type AppSession = SessionStore<AppTokenStore>;

/// Get the shared session.
/// Returns a signal that updates when the user logs in or out.
pub fn use_session() -> Signal<AppSession> {
    use_context::<Signal<AppSession>>()
}

/// Provider component that owns the session for the whole app.
/// Wrap the router with this component.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let session = use_signal(|| SessionStore::hydrate(AppTokenStore::default()));
    use_context_provider(|| session);

    rsx! {
        {children}
    }
}
