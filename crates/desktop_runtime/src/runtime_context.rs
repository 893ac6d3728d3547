//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer container, the runtime effect queue, the title-bar
//! registry, and boot-time deep-link handling. UI composition stays in [`crate::components`].

use desktop_app_contract::{AppCommand, AppServices};
use leptos::*;
use platform_host::HostServices;

use crate::{
    apps, deep_link, effect_executor,
    host::DesktopHostContext,
    model::{AppId, DesktopState, InteractionState},
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
    title_bar::TitleBarRegistry,
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Host service bundle for executing runtime side effects and environment queries.
    pub host: StoredValue<DesktopHostContext>,
    /// Reactive desktop state signal.
    pub state: RwSignal<DesktopState>,
    /// Reactive pointer/drag interaction state signal.
    pub interaction: RwSignal<InteractionState>,
    /// Queue of runtime effects emitted by the reducer and processed by the shell.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Title-bar affordances registered by mounted apps.
    pub title_bars: RwSignal<TitleBarRegistry>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }

    /// Builds the service bundle handed to the app mounted in `app_id`'s window.
    pub fn app_services(self, app_id: AppId) -> AppServices {
        let state = self.state;
        AppServices::new(
            Callback::new(move |command| self.handle_app_command(app_id, command)),
            self.host.get_value().services(),
            Signal::derive(move || state.with(|desktop| desktop.show_hidden)),
        )
    }

    /// Applies a command sent by the app in `app_id`'s window.
    pub fn handle_app_command(self, app_id: AppId, command: AppCommand) {
        match command {
            AppCommand::SetWindowTitle { title } => {
                self.dispatch_action(DesktopAction::SetWindowTitle { app_id, title });
            }
            AppCommand::SetTitleBarExtension(extension) => {
                if self.state.with_untracked(|desktop| desktop.is_open(app_id)) {
                    self.title_bars
                        .update(|registry| registry.register(app_id, extension));
                }
            }
            AppCommand::ClearTitleBarExtension => {
                // Skip the write when nothing is registered; apps clear on every list render.
                let had_entry = self
                    .title_bars
                    .with_untracked(|registry| registry.get(app_id).is_some());
                if had_entry {
                    self.title_bars.update(|registry| {
                        registry.clear(app_id);
                    });
                }
            }
            AppCommand::OpenExternalUrl { url } => {
                self.dispatch_action(DesktopAction::OpenExternalUrl { url });
            }
        }
    }
}

fn install_runtime_orchestration(runtime: DesktopRuntimeContext) {
    effect_executor::install(runtime);

    // Closed windows drop their title-bar registration.
    create_effect(move |_| {
        let open: Vec<AppId> = runtime
            .state
            .with(|desktop| desktop.open_windows().map(|w| w.app_id).collect());
        let stale = runtime.title_bars.with_untracked(|registry| {
            AppId::ALL
                .into_iter()
                .any(|app_id| !open.contains(&app_id) && registry.get(app_id).is_some())
        });
        if stale {
            runtime
                .title_bars
                .update(|registry| registry.retain_open(|app_id| open.contains(&app_id)));
        }
    });

    if let Some(deep_link) = deep_link::current_deep_link() {
        runtime.dispatch_action(DesktopAction::ApplyDeepLink { deep_link });
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components and applies any boot deep link.
pub fn DesktopProvider(
    /// Injected browser or in-memory host bundle assembled by the entry layer.
    host_services: HostServices,
    children: Children,
) -> impl IntoView {
    let host = store_value(DesktopHostContext::new(host_services));
    let state = create_rw_signal(apps::initial_desktop_state());
    let interaction = create_rw_signal(InteractionState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());
    let title_bars = create_rw_signal(TitleBarRegistry::default());

    logging::log!(
        "desktop runtime starting with {} host services",
        host.with_value(|host| host.host_strategy_name())
    );

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let mut ui = interaction.get_untracked();
        let previous_desktop = desktop.clone();
        let previous_ui = ui.clone();

        match reduce_desktop(&mut desktop, &mut ui, action) {
            Ok(new_effects) => {
                if desktop != previous_desktop {
                    state.set(desktop);
                }
                if ui != previous_ui {
                    interaction.set(ui);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            Err(err) => logging::warn!("desktop reducer error: {err}"),
        }
    });

    let runtime = DesktopRuntimeContext {
        host,
        state,
        interaction,
        effects,
        title_bars,
        dispatch,
    };

    provide_context(runtime);

    install_runtime_orchestration(runtime);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}

#[cfg(test)]
mod tests {
    use desktop_app_contract::TitleBarExtension;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::OpenAppRequest;

    fn test_runtime() -> DesktopRuntimeContext {
        let state = create_rw_signal(apps::initial_desktop_state());
        let interaction = create_rw_signal(InteractionState::default());
        let effects = create_rw_signal(Vec::<RuntimeEffect>::new());
        let dispatch = Callback::new(move |action: DesktopAction| {
            let mut desktop = state.get_untracked();
            let mut ui = interaction.get_untracked();
            let new_effects = reduce_desktop(&mut desktop, &mut ui, action).expect("reduce");
            state.set(desktop);
            interaction.set(ui);
            effects.update(|queue| queue.extend(new_effects));
        });
        DesktopRuntimeContext {
            host: store_value(DesktopHostContext::default()),
            state,
            interaction,
            effects,
            title_bars: create_rw_signal(TitleBarRegistry::default()),
            dispatch,
        }
    }

    fn back_extension() -> TitleBarExtension {
        TitleBarExtension {
            on_title_click: Some(Callback::new(|_| {})),
            title_extra: None,
        }
    }

    #[test]
    fn app_commands_route_to_their_own_window() {
        let leptos_runtime = create_runtime();
        let runtime = test_runtime();
        runtime.dispatch_action(DesktopAction::OpenApp(OpenAppRequest::new(AppId::Projects)));
        runtime.dispatch_action(DesktopAction::OpenApp(OpenAppRequest::new(AppId::Trash)));

        assert_eq!(runtime.state.get_untracked().focused_app(), Some(AppId::Trash));

        let services = runtime.app_services(AppId::Projects);
        services.window.set_title("Projects - Atlas");
        services.window.set_title_bar_extension(back_extension());
        services.open_external_url("https://example.com");

        let desktop = runtime.state.get_untracked();
        assert_eq!(desktop.window(AppId::Projects).unwrap().title, "Projects - Atlas");
        assert_eq!(desktop.window(AppId::Trash).unwrap().title, "Trash");
        runtime.title_bars.with_untracked(|registry| {
            assert!(registry.get(AppId::Projects).is_some());
            assert!(registry.get(AppId::Trash).is_none());
        });
        assert!(runtime
            .effects
            .get_untracked()
            .contains(&RuntimeEffect::OpenExternalUrl("https://example.com".to_string())));

        services.window.reset_title();
        services.window.clear_title_bar_extension();
        let desktop = runtime.state.get_untracked();
        assert_eq!(desktop.window(AppId::Projects).unwrap().title, "Projects");
        runtime
            .title_bars
            .with_untracked(|registry| assert!(registry.get(AppId::Projects).is_none()));
        leptos_runtime.dispose();
    }

    #[test]
    fn closed_windows_cannot_register_title_bar_extensions() {
        let leptos_runtime = create_runtime();
        let runtime = test_runtime();
        runtime
            .app_services(AppId::Pet)
            .window
            .set_title_bar_extension(back_extension());
        runtime
            .title_bars
            .with_untracked(|registry| assert!(registry.get(AppId::Pet).is_none()));
        leptos_runtime.dispose();
    }

    #[test]
    fn show_hidden_signal_follows_desktop_state() {
        let leptos_runtime = create_runtime();
        let runtime = test_runtime();
        let services = runtime.app_services(AppId::Projects);
        assert!(!services.show_hidden.get_untracked());
        runtime.dispatch_action(DesktopAction::ToggleShowHidden);
        assert!(services.show_hidden.get_untracked());
        leptos_runtime.dispose();
    }
}
