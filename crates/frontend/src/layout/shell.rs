use super::navigation::{NavContext, NAV_GROUPS};
use crate::shared::icons::icon;
use crate::shared::session::{CurrentUser, SessionContext};
use leptos::prelude::*;

/// Application frame: top header, sidebar navigation, center pane.
#[component]
pub fn Shell<C>(center: C) -> impl IntoView
where
    C: Fn() -> AnyView + Send + Sync + 'static,
{
    view! {
        <div class="shell">
            <Header />
            <div class="shell__body">
                <Sidebar />
                <main class="shell__center">{move || center()}</main>
            </div>
        </div>
    }
}

#[component]
fn Header() -> impl IntoView {
    let session = use_context::<SessionContext>().expect("SessionContext not found in context");

    // There is no authentication; signing in stamps the shared
    // front-desk profile into localStorage so the session survives a
    // reload.
    let sign_in = move |_| {
        session.sign_in(CurrentUser {
            name: "Front Desk".to_string(),
            email: "frontdesk@grandmeridian.example".to_string(),
            role: "receptionist".to_string(),
        });
    };

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                {icon("hotel")}
                <span class="top-header__title">"Grand Meridian"</span>
            </div>
            <div class="top-header__user">
                {move || match session.user.get() {
                    Some(u) => view! {
                        <span class="top-header__user-name">{u.name}</span>
                        <button
                            class="button button--link"
                            on:click=move |_| session.sign_out()
                        >
                            "Sign out"
                        </button>
                    }
                    .into_any(),
                    None => view! {
                        <span class="top-header__user-name">"Reception"</span>
                        <button class="button button--link" on:click=sign_in>
                            "Sign in"
                        </button>
                    }
                    .into_any(),
                }}
            </div>
        </header>
    }
}

#[component]
fn Sidebar() -> impl IntoView {
    let nav = use_context::<NavContext>().expect("NavContext not found in context");

    view! {
        <nav class="sidebar">
            {NAV_GROUPS
                .iter()
                .map(|group| {
                    view! {
                        <div class="sidebar__group">
                            <div class="sidebar__group-title">{group.title}</div>
                            {group
                                .items
                                .iter()
                                .map(|item| {
                                    let page = item.page;
                                    view! {
                                        <button
                                            class=move || {
                                                if nav.current.get() == page {
                                                    "sidebar__item sidebar__item--active"
                                                } else {
                                                    "sidebar__item"
                                                }
                                            }
                                            on:click=move |_| nav.navigate(page)
                                        >
                                            {icon(item.icon)}
                                            <span>{item.label}</span>
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                })
                .collect_view()}
        </nav>
    }
}
