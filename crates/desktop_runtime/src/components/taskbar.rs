use super::*;
use platform_host::BatteryStatus;

/// Address copied by the taskbar contact button.
pub(crate) const CONTACT_EMAIL: &str = match option_env!("PORTFOLIO_CONTACT_EMAIL") {
    Some(email) => email,
    None => "hello@example.com",
};

/// How long the "Copied!" confirmation stays visible.
pub(crate) const COPY_CONFIRMATION_MS: u64 = 2000;

fn taskbar_window_button_dom_id(app_id: AppId) -> String {
    format!("taskbar-window-button-{}", app_id.slug())
}

fn taskbar_window_aria_label(title: &str, is_focused: bool, minimized: bool) -> String {
    if minimized {
        format!("{title} (minimized)")
    } else if is_focused {
        format!("{title} (active)")
    } else {
        title.to_string()
    }
}

fn battery_label(status: BatteryStatus) -> String {
    if status.charging {
        format!("{}% charging", status.percent())
    } else {
        format!("{}%", status.percent())
    }
}

#[component]
pub(super) fn Taskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let clock_now = create_rw_signal(TaskbarClockSnapshot::now());
    if let Ok(interval) = set_interval_with_handle(
        move || clock_now.set(TaskbarClockSnapshot::now()),
        CLOCK_REFRESH,
    ) {
        on_cleanup(move || interval.clear());
    }

    let battery = create_rw_signal(None::<BatteryStatus>);
    let battery_service = runtime.host.get_value().battery_service();
    spawn_local(async move {
        let status = battery_service.status().await;
        let _ = battery.try_set(status);
    });

    let copied = create_rw_signal(false);
    let copy_email = move |_| {
        let host = runtime.host.get_value();
        spawn_local(async move {
            if host.copy_text(CONTACT_EMAIL).await && copied.try_set(true).is_none() {
                set_timeout(
                    move || {
                        let _ = copied.try_set(false);
                    },
                    Duration::from_millis(COPY_CONFIRMATION_MS),
                );
            }
        });
    };

    let show_hidden = move || state.with(|desktop| desktop.show_hidden);
    let open_windows = move || {
        state.with(|desktop| {
            desktop
                .open_windows()
                .map(|w| (w.app_id, w.title.clone(), w.is_focused, w.minimized))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <header class="taskbar" role="toolbar" aria-label="Taskbar">
            <nav class="taskbar-windows" aria-label="Open windows">
                <For
                    each=open_windows
                    key=|entry| entry.clone()
                    children=move |(app_id, title, is_focused, minimized)| {
                        view! {
                            <button
                                type="button"
                                id=taskbar_window_button_dom_id(app_id)
                                class="taskbar-window-button"
                                class:active=is_focused
                                class:minimized=minimized
                                aria-pressed=is_focused.to_string()
                                aria-label=taskbar_window_aria_label(&title, is_focused, minimized)
                                on:click=move |_| {
                                    runtime.dispatch_action(DesktopAction::ToggleTaskbarWindow { app_id });
                                }
                            >
                                {title.clone()}
                            </button>
                        }
                    }
                />
            </nav>

            <div class="taskbar-tray">
                <label class="taskbar-show-hidden">
                    <input
                        type="checkbox"
                        prop:checked=show_hidden
                        on:change=move |_| runtime.dispatch_action(DesktopAction::ToggleShowHidden)
                    />
                    "Show hidden"
                </label>

                <button type="button" class="taskbar-contact" on:click=copy_email>
                    {move || if copied.get() { "Copied!" } else { "Copy email" }}
                </button>

                {move || {
                    battery
                        .get()
                        .map(|status| {
                            view! {
                                <span class="taskbar-battery" aria-label="Battery level">
                                    {battery_label(status)}
                                </span>
                            }
                        })
                }}

                <time class="taskbar-clock" aria-live="off">
                    {move || format_taskbar_clock_time(clock_now.get())}
                </time>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn aria_label_marks_window_status() {
        assert_eq!(taskbar_window_aria_label("Pet", false, true), "Pet (minimized)");
        assert_eq!(taskbar_window_aria_label("Pet", true, false), "Pet (active)");
        assert_eq!(taskbar_window_aria_label("Pet", false, false), "Pet");
    }

    #[test]
    fn battery_label_rounds_level() {
        assert_eq!(
            battery_label(BatteryStatus {
                level: 0.456,
                charging: false
            }),
            "46%"
        );
        assert_eq!(
            battery_label(BatteryStatus {
                level: 1.0,
                charging: true
            }),
            "100% charging"
        );
    }

    #[test]
    fn taskbar_button_ids_use_app_slugs() {
        assert_eq!(
            taskbar_window_button_dom_id(AppId::Trash),
            "taskbar-window-button-trash"
        );
    }
}
