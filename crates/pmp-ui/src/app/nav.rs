//! Guarded in-app navigation.
//!
//! Every in-app link and button navigates through [`use_guarded_navigator`]
//! so the unsaved-changes guard in the store sees the attempt first. Browser
//! back/forward is held by the form page's `popstate` listener.

use crate::app::Route;
use crate::core::guard::NavigationDecision;
use crate::core::store::app_dispatch;
use yew::prelude::*;
use yew_router::prelude::*;

/// Callback that pushes `Route` unless the guard holds it back.
#[hook]
pub(crate) fn use_guarded_navigator() -> Callback<Route> {
    let navigator = use_navigator();
    let current = use_route::<Route>();
    Callback::from(move |next: Route| {
        let current_path = current.as_ref().map(Routable::to_path).unwrap_or_default();
        let next_path = next.to_path();
        let mut decision = NavigationDecision::Blocked;
        app_dispatch().reduce_mut(|store| {
            decision = store.navigation.attempt(&current_path, next_path);
        });
        if let (NavigationDecision::Proceed(_), Some(navigator)) = (decision, navigator.as_ref()) {
            navigator.push(&next);
        }
    })
}
