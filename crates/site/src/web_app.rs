use desktop_app_projects::case_studies::{find_entry, ListingKind};
use desktop_runtime::{project_deep_link_query, DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use platform_host_web::build_host_services;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Portfolio" />
        <Meta name="description" content="A portfolio presented as a small desktop operating system." />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=DesktopEntry />
                    <Route path="/projects/:slug" view=CanonicalProjectRoute />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    view! {
        <DesktopProvider host_services=build_host_services()>
            <DesktopShell />
        </DesktopProvider>
    }
}

/// Shareable project URL; links into the desktop with the project preselected.
#[component]
fn CanonicalProjectRoute() -> impl IntoView {
    let params = use_params_map();
    let slug = move || {
        params
            .with(|map| map.get("slug").cloned())
            .unwrap_or_default()
    };
    let title = move || {
        let slug = slug();
        find_entry(ListingKind::Projects, &slug)
            .filter(|entry| !entry.is_hidden())
            .map(|entry| entry.title().to_string())
            .unwrap_or_else(|| format!("Project \"{slug}\""))
    };

    view! {
        <section class="canonical-content canonical-project">
            <h1>{title}</h1>
            <A href=move || format!("/{}", project_deep_link_query(&slug()).unwrap_or_default())>"Open in Desktop"</A>
        </section>
    }
}
