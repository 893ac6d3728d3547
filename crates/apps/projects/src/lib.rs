//! Projects and Trash desktop apps: case-study listings, locked-entry gate, and slide decks.

#![warn(rustdoc::broken_intra_doc_links)]

pub mod browser;
pub mod case_studies;
pub mod content;
pub mod password_gate;
pub mod preview;

use desktop_app_contract::{AppMountContext, TitleBarExtension, TitleExtra};
use leptos::*;
use slideshow::{SlideNavigator, Slideshow};

use crate::{
    browser::{visible_entries, BrowserState, BrowserView, SelectOutcome},
    case_studies::{find_entry, CaseStudyEntry, ListingKind, MiniBlock, MiniEntry, ProjectEntry},
    content::content_map,
    password_gate::PasswordGate,
    preview::{place_preview, HoverPreview},
};

/// Mount function registered for the Projects app.
pub fn mount_projects_app(context: AppMountContext) -> View {
    view! { <CaseStudyBrowser listing=ListingKind::Projects context=context /> }.into_view()
}

/// Mount function registered for the Trash app.
pub fn mount_trash_app(context: AppMountContext) -> View {
    view! { <CaseStudyBrowser listing=ListingKind::Trash context=context /> }.into_view()
}

fn viewport_size() -> (f64, f64) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let width = window.inner_width().ok().and_then(|v| v.as_f64());
            let height = window.inner_height().ok().and_then(|v| v.as_f64());
            if let (Some(width), Some(height)) = (width, height) {
                return (width, height);
            }
        }
    }

    (1024.0, 768.0)
}

/// List/detail browser over one case-study listing.
///
/// Honors a `project_slug` launch parameter by opening that entry immediately.
#[component]
pub fn CaseStudyBrowser(listing: ListingKind, context: AppMountContext) -> impl IntoView {
    let services = context.services.clone();
    let window = services.window;
    let show_hidden = services.show_hidden;
    let input_id = context.primary_input_dom_id();

    let browser = create_rw_signal(BrowserState::new(listing));
    let hover = create_rw_signal(HoverPreview::default());
    let navigator = create_rw_signal(None::<SlideNavigator>);
    let current_view = create_memo(move |_| browser.with(BrowserState::view));

    let open_external = Callback::new({
        let services = services.clone();
        move |url: String| services.open_external_url(url)
    });
    let select = Callback::new(move |slug: String| {
        let outcome = browser
            .try_update(|b| b.select(&slug))
            .unwrap_or(SelectOutcome::Ignored);
        match outcome {
            SelectOutcome::OpenExternal(url) => open_external.call(url.to_string()),
            SelectOutcome::Ignored => logging::warn!("{}: no entry `{slug}`", listing.title()),
            SelectOutcome::ShowGate | SelectOutcome::ShowEntry => hover.set(HoverPreview::default()),
        }
    });
    let back = Callback::new(move |_: ()| {
        navigator.set(None);
        browser.update(BrowserState::back_to_list);
    });

    if let Some(slug) = context.launch_param_str("project_slug") {
        select.call(slug.to_string());
    }

    create_effect(move |_| match current_view.get() {
        BrowserView::List => {
            window.clear_title_bar_extension();
            window.reset_title();
        }
        BrowserView::Gate(entry) => {
            window.clear_title_bar_extension();
            window.set_title(format!("{} - {}", listing.title(), entry.title()));
        }
        BrowserView::Entry(entry) => {
            let title_extra = navigator
                .get()
                .filter(|nav| nav.has_contents())
                .map(|nav| TitleExtra {
                    label: "Contents".to_string(),
                    on_select: Callback::new(move |_| {
                        nav.jump_to_contents();
                    }),
                });
            window.set_title(format!("{} - {}", listing.title(), entry.title()));
            window.set_title_bar_extension(TitleBarExtension {
                on_title_click: Some(back),
                title_extra,
            });
        }
    });

    let verifier = services.host.password_verifier.clone();

    view! {
        <div class="app app-case-studies" data-listing=listing.title().to_lowercase()>
            {move || match current_view.get() {
                BrowserView::List => {
                    view! { <EntryList listing=listing show_hidden=show_hidden hover=hover select=select /> }.into_view()
                }
                BrowserView::Gate(entry) => {
                    view! {
                        <PasswordGate
                            title=entry.title()
                            verifier=verifier.clone()
                            input_id=input_id.clone()
                            on_unlocked=Callback::new(move |_| {
                                browser.update(|b| {
                                    b.unlock_selected();
                                });
                            })
                            on_back=back
                        />
                    }
                        .into_view()
                }
                BrowserView::Entry(entry) => render_entry(
                    listing,
                    entry,
                    back,
                    open_external,
                    Callback::new(move |nav| navigator.set(Some(nav))),
                ),
            }}
        </div>
    }
}

#[component]
fn EntryList(
    listing: ListingKind,
    show_hidden: Signal<bool>,
    hover: RwSignal<HoverPreview>,
    select: Callback<String>,
) -> impl IntoView {
    let preview = move || {
        let HoverPreview { slug, pointer } = hover.get();
        let src = slug
            .and_then(|slug| find_entry(listing, slug))
            .and_then(CaseStudyEntry::hero)?;
        let placement = place_preview(pointer, viewport_size());
        Some(view! {
            <div
                class="case-study-preview"
                class:flipped=placement.flipped
                style=placement.style()
                aria-hidden="true"
            >
                <img src=src alt="" />
            </div>
        })
    };

    view! {
        <ul class="case-study-list" role="list">
            {move || {
                visible_entries(listing, show_hidden.get())
                    .into_iter()
                    .map(|entry| render_row(entry, hover, select))
                    .collect_view()
            }}
        </ul>
        {preview}
    }
}

fn render_row(
    entry: &'static CaseStudyEntry,
    hover: RwSignal<HoverPreview>,
    select: Callback<String>,
) -> View {
    let Some(slug) = entry.slug() else {
        return view! { <li class="case-study-divider" role="separator">{entry.title()}</li> }
            .into_view();
    };
    let has_preview = entry.hero().is_some();
    let kind_class = match entry {
        CaseStudyEntry::Project(_) => "case-study-row project",
        CaseStudyEntry::Mini(_) => "case-study-row mini",
        CaseStudyEntry::External(_) => "case-study-row external",
        CaseStudyEntry::Divider { .. } => "case-study-row",
    };

    view! {
        <li>
            <button
                type="button"
                class=kind_class
                class:locked=entry.is_locked()
                class:hidden-entry=entry.is_hidden()
                on:click=move |_| select.call(slug.to_string())
                on:mouseenter=move |ev| {
                    if has_preview {
                        hover.update(|h| h.enter(slug, (ev.client_x() as f64, ev.client_y() as f64)));
                    }
                }
                on:mousemove=move |ev| {
                    hover.update(|h| h.track((ev.client_x() as f64, ev.client_y() as f64)));
                }
                on:mouseleave=move |_| hover.update(|h| h.leave(slug))
            >
                <span class="case-study-title">{entry.title()}</span>
                {entry.tag().map(|tag| view! { <span class="case-study-tag">{tag}</span> })}
                {entry.is_locked().then(|| view! { <span class="case-study-lock" aria-label="Locked">"🔒"</span> })}
            </button>
        </li>
    }
    .into_view()
}

fn render_entry(
    listing: ListingKind,
    entry: &'static CaseStudyEntry,
    back: Callback<()>,
    open_external: Callback<String>,
    on_navigation_ready: Callback<SlideNavigator>,
) -> View {
    match entry {
        CaseStudyEntry::Project(project) => {
            render_project(listing, project, back, on_navigation_ready)
        }
        CaseStudyEntry::Mini(mini) => render_mini(mini, back, open_external),
        CaseStudyEntry::Divider { .. } | CaseStudyEntry::External(_) => {
            logging::error!("entry `{}` cannot be opened in place", entry.title());
            view! { <p class="case-study-error">"This entry cannot be opened."</p> }.into_view()
        }
    }
}

fn entry_header(
    title: &'static str,
    tag: &'static str,
    hero: Option<&'static str>,
    back: Callback<()>,
) -> View {
    view! {
        <header class="case-study-header">
            <button type="button" class="case-study-back" on:click=move |_| back.call(())>
                "← All entries"
            </button>
            <h2>{title}</h2>
            <span class="case-study-tag">{tag}</span>
            {hero.map(|src| view! { <img class="case-study-hero" src=src alt="" /> })}
        </header>
    }
    .into_view()
}

fn render_project(
    listing: ListingKind,
    project: &'static ProjectEntry,
    back: Callback<()>,
    on_navigation_ready: Callback<SlideNavigator>,
) -> View {
    view! {
        <article class="case-study case-study-project">
            {entry_header(project.title, project.tag, project.hero, back)}
            <Slideshow
                slides=project.slides
                content_map=content_map(listing)
                on_navigation_ready=on_navigation_ready
            />
        </article>
    }
    .into_view()
}

fn render_mini(mini: &'static MiniEntry, back: Callback<()>, open_external: Callback<String>) -> View {
    let blocks = mini
        .blocks
        .iter()
        .map(|block| match *block {
            MiniBlock::Text(text) => view! { <p class="mini-text">{text}</p> }.into_view(),
            MiniBlock::Image { src, alt } => {
                view! { <img class="mini-image" src=src alt=alt loading="lazy" /> }.into_view()
            }
            MiniBlock::Link { label, href } => view! {
                <a
                    class="mini-link"
                    href=href
                    on:click=move |ev| {
                        ev.prevent_default();
                        open_external.call(href.to_string());
                    }
                >
                    {label}
                </a>
            }
            .into_view(),
        })
        .collect_view();

    view! {
        <article class="case-study case-study-mini">
            {entry_header(mini.title, mini.tag, mini.hero, back)}
            <div class="mini-blocks">{blocks}</div>
        </article>
    }
    .into_view()
}
