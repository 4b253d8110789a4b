use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::host_form;
use crate::shared::notify::{NotificationService, Toaster};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Sidebar state and the page path, shared by the whole app
    provide_context(AppGlobalContext::new(host_form::current_path()));

    // Toast notifications raised by filters and forms
    provide_context(NotificationService::new());

    view! {
        <AppRoutes />
        <Toaster />
    }
}
