use super::*;
use desktop_app_contract::AppMountContext;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

fn window_dom_id(app_id: AppId) -> String {
    format!("desktop-window-{}", app_id.slug())
}

fn window_class(is_focused: bool, minimized: bool) -> String {
    let mut class = String::from("desktop-window");
    if is_focused {
        class.push_str(" focused");
    }
    if minimized {
        class.push_str(" minimized");
    }
    class
}

#[component]
pub(super) fn DesktopWindow(app_id: AppId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let title_bars = runtime.title_bars;

    let window = create_memo(move |_| runtime.state.with(|desktop| desktop.window(app_id).cloned()));
    let title = move || window.with(|w| w.as_ref().map(|w| w.title.clone()).unwrap_or_default());
    let style = move || {
        window.with(|w| {
            w.as_ref().map(|w| {
                format!(
                    "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
                    w.rect.x, w.rect.y, w.rect.w, w.rect.h, w.z_index
                )
            })
        })
    };
    let class = move || {
        window.with(|w| {
            w.as_ref()
                .map(|w| window_class(w.is_focused, w.minimized))
                .unwrap_or_else(|| window_class(false, true))
        })
    };
    let on_title_click =
        move || title_bars.with(|registry| registry.get(app_id).and_then(|ext| ext.on_title_click));
    let title_extra = move || {
        title_bars.with(|registry| registry.get(app_id).and_then(|ext| ext.title_extra.clone()))
    };

    let focus = move |_| {
        let should_focus = window.with_untracked(|w| {
            w.as_ref()
                .is_some_and(|w| w.is_open && (!w.is_focused || w.minimized))
        });
        if should_focus {
            runtime.dispatch_action(DesktopAction::FocusApp { app_id });
        }
    };
    let begin_move = move |ev: web_sys::PointerEvent| {
        if ev.pointer_type() == "mouse" && ev.button() != 0 {
            return;
        }
        if ev.pointer_type() != "mouse" && !ev.is_primary() {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        runtime.dispatch_action(DesktopAction::BeginMove {
            app_id,
            pointer: pointer_from_pointer_event(&ev),
        });
    };

    view! {
        <section
            id=window_dom_id(app_id)
            class=class
            style=style
            on:pointerdown=focus
            role="dialog"
            aria-label=title
        >
            <header class="titlebar" on:pointerdown=begin_move>
                <div class="titlebar-title">
                    <span
                        class=format!("titlebar-app-icon icon-{}", app_id.icon_id())
                        aria-hidden="true"
                    ></span>
                    {move || match on_title_click() {
                        Some(on_click) => view! {
                            <button
                                type="button"
                                class="titlebar-title-link"
                                on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                                on:click=move |ev| {
                                    stop_mouse_event(&ev);
                                    on_click.call(());
                                }
                            >
                                {title}
                            </button>
                        }
                        .into_view(),
                        None => view! { <span>{title}</span> }.into_view(),
                    }}
                    {move || {
                        title_extra().map(|extra| {
                            let on_select = extra.on_select;
                            view! {
                                <button
                                    type="button"
                                    class="titlebar-extra"
                                    on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                                    on:click=move |ev| {
                                        stop_mouse_event(&ev);
                                        on_select.call(());
                                    }
                                >
                                    {extra.label}
                                </button>
                            }
                        })
                    }}
                </div>
                <div class="titlebar-controls">
                    <button
                        type="button"
                        aria-label="Minimize window"
                        on:pointerdown=move |ev: web_sys::PointerEvent| {
                            ev.prevent_default();
                            ev.stop_propagation();
                        }
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            runtime.dispatch_action(DesktopAction::MinimizeApp { app_id });
                        }
                    >
                        "_"
                    </button>
                    <button
                        type="button"
                        aria-label="Close window"
                        on:pointerdown=move |ev: web_sys::PointerEvent| {
                            ev.prevent_default();
                            ev.stop_propagation();
                        }
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            runtime.dispatch_action(DesktopAction::CloseApp { app_id });
                        }
                    >
                        "x"
                    </button>
                </div>
            </header>
            <div class="window-body">
                <WindowBody app_id=app_id />
            </div>
        </section>
    }
}

/// Mounts the hosted app once per window session.
#[component]
fn WindowBody(app_id: AppId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let contents = runtime
        .state
        .with_untracked(|desktop| desktop.window(app_id).map(|w| w.launch_params.clone()))
        .map(|launch_params| {
            apps::app_module(app_id).mount(AppMountContext {
                window_key: app_id.slug(),
                launch_params,
                services: runtime.app_services(app_id),
            })
        })
        .unwrap_or_else(|| view! { <p>"Closed"</p> }.into_view());

    view! {
        <div class="window-body-content">
            {contents}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn window_class_reflects_focus_and_minimize() {
        assert_eq!(window_class(true, false), "desktop-window focused");
        assert_eq!(window_class(false, true), "desktop-window minimized");
        assert_eq!(window_class(false, false), "desktop-window");
    }

    #[test]
    fn window_ids_use_app_slugs() {
        assert_eq!(window_dom_id(AppId::Projects), "desktop-window-projects");
    }
}
