//! Leptos rendering for slide decks.

use leptos::*;

use crate::{
    content_map::ContentMap,
    deck::{ResolvedSlide, SlideDeck},
    layout::{LayoutMode, LayoutTracker},
    model::{ContentKey, SlideDescriptor, SlideKind},
    navigation::NavigationState,
    resize::observe_container_width,
};

/// Stateless slide-content factory. Instantiated fresh on every render of its slide; anything it
/// starts (timers, observers, canvases) must be released through `on_cleanup`.
pub type SlideContent = fn() -> View;

/// Stable handle into a mounted slideshow's cursor.
///
/// Handed to the parent once through `on_navigation_ready`. Calls after the slideshow unmounts are
/// ignored.
#[derive(Debug, Clone, Copy)]
pub struct SlideNavigator {
    nav: RwSignal<NavigationState>,
    contents_index: Option<usize>,
}

impl SlideNavigator {
    pub fn next(self) -> bool {
        self.nav.try_update(|nav| nav.next()).unwrap_or(false)
    }

    pub fn prev(self) -> bool {
        self.nav.try_update(|nav| nav.prev()).unwrap_or(false)
    }

    pub fn go_to(self, index: usize) -> bool {
        self.nav.try_update(|nav| nav.go_to(index)).unwrap_or(false)
    }

    /// Jumps to the first table-of-contents slide; a no-op for decks without one.
    pub fn jump_to_contents(self) -> bool {
        let contents_index = self.contents_index;
        self.nav
            .try_update(|nav| nav.jump_to_contents(contents_index))
            .unwrap_or(false)
    }

    pub fn has_contents(self) -> bool {
        self.contents_index.is_some()
    }

    /// Current slide index, tracked.
    pub fn current(self) -> Option<usize> {
        self.nav.try_with(NavigationState::current)
    }
}

/// Renders one slide deck with keyboard and on-screen navigation.
///
/// An empty deck or an unregistered content key renders a visible configuration-error panel
/// instead of a blank stage.
#[component]
pub fn Slideshow(
    slides: &'static [SlideDescriptor],
    content_map: ContentMap<SlideContent>,
    #[prop(optional)] on_navigation_ready: Option<Callback<SlideNavigator>>,
) -> impl IntoView {
    let deck = match SlideDeck::new(slides, &content_map) {
        Ok(deck) => deck,
        Err(err) => {
            logging::error!("slideshow configuration error: {err}");
            return view! {
                <div class="slideshow slideshow-config-error" role="alert" data-slideshow-error="true">
                    <strong>"This slide deck could not be loaded."</strong>
                    <code>{err.to_string()}</code>
                </div>
            }
            .into_view();
        }
    };

    let outline = deck.outline();
    let contents_index = deck.contents_index();
    let nav = create_rw_signal(NavigationState::new(deck.len()));
    let deck = store_value(deck);
    let navigator = SlideNavigator {
        nav,
        contents_index,
    };
    if let Some(on_navigation_ready) = on_navigation_ready {
        on_navigation_ready.call(navigator);
    }

    let tracker = store_value(LayoutTracker::new());
    let layout_mode = create_rw_signal(LayoutMode::default());
    let container = create_node_ref::<html::Div>();
    observe_container_width(container, move |width| {
        if let Some(next) = tracker.try_update_value(|t| t.observe(width)).flatten() {
            layout_mode.set(next);
        }
    });

    let on_keydown = move |ev: ev::KeyboardEvent| {
        match ev.key().as_str() {
            "ArrowRight" | "PageDown" => navigator.next(),
            "ArrowLeft" | "PageUp" => navigator.prev(),
            "Home" => navigator.go_to(0),
            "End" => navigator.go_to(usize::MAX),
            _ => return,
        };
        ev.prevent_default();
    };

    let current_slide = move || {
        let index = nav.with(NavigationState::current);
        deck.with_value(|deck| deck.get(index).cloned())
    };

    view! {
        <div
            class=move || format!("slideshow {}", layout_mode.get().class_name())
            node_ref=container
            tabindex="0"
            on:keydown=on_keydown
        >
            <div class="slideshow-stage">
                {move || {
                    current_slide()
                        .map(|slide| render_slide(slide, &outline, navigator, layout_mode.get()))
                }}
            </div>
            <nav class="slideshow-controls" aria-label="Slide navigation">
                <button
                    type="button"
                    aria-label="Previous slide"
                    disabled=move || nav.with(NavigationState::is_first)
                    on:click=move |_| {
                        navigator.prev();
                    }
                >
                    "‹"
                </button>
                <span class="slideshow-position">{move || nav.with(NavigationState::position_label)}</span>
                <button
                    type="button"
                    aria-label="Next slide"
                    disabled=move || nav.with(NavigationState::is_last)
                    on:click=move |_| {
                        navigator.next();
                    }
                >
                    "›"
                </button>
            </nav>
        </div>
    }
    .into_view()
}

fn render_slide(
    slide: ResolvedSlide<SlideContent>,
    outline: &[(usize, &'static str)],
    navigator: SlideNavigator,
    mode: LayoutMode,
) -> View {
    let ResolvedSlide {
        descriptor,
        content,
    } = slide;
    let title = descriptor.title;
    let type_name = descriptor.kind.type_name();

    let body = match descriptor.kind {
        SlideKind::Title { subtitle } => view! {
            <h1 class="slide-heading">{title}</h1>
            <p class="slide-subtitle">{subtitle}</p>
        }
        .into_view(),
        SlideKind::Toc => {
            let entries = outline
                .iter()
                .map(|&(index, label)| {
                    view! {
                        <li>
                            <button type="button" on:click=move |_| {
                                navigator.go_to(index);
                            }>
                                <span class="toc-number">{format!("{:02}", index + 1)}</span>
                                <span class="toc-label">{label}</span>
                            </button>
                        </li>
                    }
                })
                .collect_view();
            view! {
                <h2 class="slide-heading">{title}</h2>
                <ol class="slide-toc">{entries}</ol>
            }
            .into_view()
        }
        SlideKind::Content { key, body } => view! {
            <h2 class="slide-heading">{title}</h2>
            <div class="slide-content">{render_content(content, key)}</div>
            {(!body.is_empty()).then(|| view! { <p class="slide-body">{body}</p> })}
        }
        .into_view(),
        SlideKind::Image { src, alt } => view! {
            <h2 class="slide-heading">{title}</h2>
            <img class="slide-image" src=src alt=alt loading="lazy" />
        }
        .into_view(),
        SlideKind::Video { src, poster } => view! {
            <h2 class="slide-heading">{title}</h2>
            <video
                class="slide-video"
                src=src
                poster=poster
                autoplay=true
                muted=true
                loop=true
                playsinline=true
            />
        }
        .into_view(),
        SlideKind::SplitSlideImage { key, src, body } => {
            let split_class = match mode {
                LayoutMode::Wide => "slide-split",
                LayoutMode::Narrow => "slide-split slide-split-stacked",
            };
            view! {
                <h2 class="slide-heading">{title}</h2>
                <div class=split_class>
                    <div class="slide-split-copy">
                        <div class="slide-content">{render_content(content, key)}</div>
                        {(!body.is_empty()).then(|| view! { <p class="slide-body">{body}</p> })}
                    </div>
                    <img class="slide-split-image" src=src alt="" loading="lazy" />
                </div>
            }
            .into_view()
        }
    };

    view! {
        <section class=format!("slide slide-{type_name}") data-slide-type=type_name>
            {body}
        </section>
    }
    .into_view()
}

fn render_content(content: Option<SlideContent>, key: ContentKey) -> View {
    match content {
        Some(render) => render(),
        None => {
            logging::error!("slide content `{key}` was not resolved");
            view! {
                <div class="slide-content-missing" role="alert">
                    {format!("Missing slide content: {key}")}
                </div>
            }
            .into_view()
        }
    }
}
