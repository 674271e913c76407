use crate::layout::navigation::NavContext;
use crate::routes::AppRoutes;
use crate::shared::components::modal::ModalService;
use crate::shared::session::SessionContext;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Navigation state shared by the sidebar and the center pane.
    provide_context(NavContext::new());

    // Centralized modal management for edit forms and the booking wizard.
    provide_context(ModalService::new());

    // Current user restored from localStorage, if any.
    provide_context(SessionContext::load());

    view! {
        <AppRoutes />
    }
}
