//! Desktop shell UI composition and interaction surfaces.

mod taskbar;
mod window;

use std::time::Duration;

use leptos::*;

use self::{taskbar::Taskbar, window::DesktopWindow};

use crate::{
    apps::{self, AppDescriptor},
    model::{AppId, OpenAppRequest, PointerPosition},
    reducer::DesktopAction,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

fn desktop_icon_dom_id(app_id: AppId) -> String {
    format!("desktop-icon-{}", app_id.slug())
}

#[component]
fn DesktopIcon(app: AppDescriptor) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let app_id = app.app_id;
    let open = move || runtime.dispatch_action(DesktopAction::OpenApp(OpenAppRequest::new(app_id)));

    view! {
        <button
            type="button"
            id=desktop_icon_dom_id(app_id)
            class="desktop-icon"
            on:dblclick=move |_| open()
            on:keydown=move |ev: web_sys::KeyboardEvent| {
                if ev.key() == "Enter" {
                    ev.prevent_default();
                    open();
                }
            }
        >
            <span
                class=format!("desktop-icon-glyph icon-{}", app_id.icon_id())
                aria-hidden="true"
            ></span>
            <span class="desktop-icon-label">{app.desktop_icon_label}</span>
        </button>
    }
}

#[component]
/// Renders the full desktop shell UI: icons, the window layer, and the taskbar.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    // Reopening an app starts a fresh session, so the session sequence is part of the key.
    let open_sessions = create_memo(move |_| {
        state.with(|desktop| {
            desktop
                .open_windows()
                .map(|w| (w.app_id, w.opened_seq))
                .collect::<Vec<_>>()
        })
    });

    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        if runtime.interaction.with_untracked(|ui| ui.dragging.is_some()) {
            runtime.dispatch_action(DesktopAction::UpdateMove {
                pointer: pointer_from_pointer_event(&ev),
            });
        }
    };
    let on_pointer_end = move |_| end_active_pointer_interaction(runtime);

    view! {
        <div
            id="desktop-shell-root"
            class="desktop-shell"
            tabindex="-1"
            data-dragging=move || runtime.interaction.with(|ui| ui.dragging.is_some()).to_string()
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_end
            on:pointercancel=on_pointer_end
        >
            <Taskbar />

            <main class="desktop-surface">
                <nav class="desktop-icons" aria-label="Desktop">
                    {apps::desktop_icon_apps()
                        .into_iter()
                        .map(|app| view! { <DesktopIcon app=app /> })
                        .collect_view()}
                </nav>

                <div class="desktop-window-layer">
                    <For each=move || open_sessions.get() key=|session| *session let:session>
                        <DesktopWindow app_id=session.0 />
                    </For>
                </div>
            </main>
        </div>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TaskbarClockSnapshot {
    hour: u32,
    minute: u32,
}

impl TaskbarClockSnapshot {
    fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                hour: date.get_hours(),
                minute: date.get_minutes(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self { hour: 0, minute: 0 }
        }
    }
}

fn format_taskbar_clock_time(snapshot: TaskbarClockSnapshot) -> String {
    format!("{:02}:{:02}", snapshot.hour, snapshot.minute)
}

const CLOCK_REFRESH: Duration = Duration::from_secs(1);

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

fn end_active_pointer_interaction(runtime: DesktopRuntimeContext) {
    if runtime.interaction.with_untracked(|ui| ui.dragging.is_some()) {
        runtime.dispatch_action(DesktopAction::EndMove {
            viewport: runtime.host.get_value().desktop_viewport_rect(),
        });
    }
}
