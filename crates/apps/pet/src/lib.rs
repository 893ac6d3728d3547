//! Desktop pet minigame.
//!
//! The game itself is [`game::GameState`], a plain value with no DOM dependency. [`PetApp`] loads
//! it from the host prefs store, ticks decay once a second while mounted, and saves after every
//! care action.

pub mod game;
pub mod persistence;

use std::time::Duration;

use desktop_app_contract::AppMountContext;
use leptos::*;
use platform_host::unix_time_ms_now;

use crate::{
    game::{Cosmetic, GameState, PetAction, METER_MAX},
    persistence::{load_game, save_game},
};

/// Mount function registered for the Pet app.
pub fn mount_pet_app(context: AppMountContext) -> View {
    view! { <PetApp context=context /> }.into_view()
}

fn meter_row(label: &'static str, value: Signal<u8>) -> impl IntoView {
    view! {
        <div class="pet-meter">
            <span class="pet-meter-label">{label}</span>
            <meter min="0" max=METER_MAX value=move || value.get()></meter>
            <span class="pet-meter-value">{move || value.get()}</span>
        </div>
    }
}

#[component]
pub fn PetApp(context: AppMountContext) -> impl IntoView {
    let prefs = context.services.host.prefs.clone();
    let game = create_rw_signal(None::<GameState>);
    let notice = create_rw_signal(None::<&'static str>);

    spawn_local({
        let prefs = prefs.clone();
        async move {
            let loaded = load_game(prefs.as_ref(), unix_time_ms_now()).await;
            let _ = game.try_set(Some(loaded));
        }
    });

    if let Ok(interval) = set_interval_with_handle(
        move || {
            let now = unix_time_ms_now();
            game.update(|state| {
                if let Some(state) = state.as_mut() {
                    state.catch_up(now);
                }
            });
        },
        Duration::from_secs(1),
    ) {
        on_cleanup(move || interval.clear());
    }

    let persist = move |snapshot: GameState| {
        let prefs = prefs.clone();
        spawn_local(async move {
            save_game(prefs.as_ref(), &snapshot).await;
        });
    };

    let act = Callback::new({
        let persist = persist.clone();
        move |action: PetAction| {
            let now = unix_time_ms_now();
            let result = game
                .try_update(|state| {
                    let state = state.as_mut()?;
                    state.catch_up(now);
                    let applied = state.apply(action);
                    Some((applied, state.clone()))
                })
                .flatten();
            match result {
                Some((true, snapshot)) => {
                    notice.set(None);
                    persist(snapshot);
                }
                Some((false, _)) => notice.set(Some("Too tired to train. Eat something first.")),
                None => {}
            }
        }
    });

    let choose_cosmetic = Callback::new(move |cosmetic: Cosmetic| {
        let snapshot = game
            .try_update(|state| {
                let state = state.as_mut()?;
                state.cosmetic = cosmetic;
                Some(state.clone())
            })
            .flatten();
        if let Some(snapshot) = snapshot {
            persist(snapshot);
        }
    });

    let meter = move |read: fn(&GameState) -> u8| {
        Signal::derive(move || game.with(|state| state.as_ref().map(read).unwrap_or_default()))
    };

    view! {
        <div class="app app-pet">
            <Show
                when=move || game.with(Option::is_some)
                fallback=|| view! { <p class="pet-loading">"Waking up..."</p> }
            >
                <div
                    class="pet-stage"
                    data-cosmetic=move || {
                        game.with(|s| s.as_ref().map(|s| s.cosmetic.token()).unwrap_or("none"))
                    }
                >
                    <div class="pet-sprite" aria-hidden="true"></div>
                    <p class="pet-mood" role="status">
                        {move || game.with(|s| s.as_ref().map(|s| s.mood().label()).unwrap_or(""))}
                    </p>
                </div>

                <div class="pet-meters">
                    {meter_row("Hearts", meter(|s| s.hearts))}
                    {meter_row("Hunger", meter(|s| s.hunger))}
                    {meter_row("Dirt", meter(|s| s.dirt))}
                    {meter_row("Your HP", meter(|s| s.user_hp))}
                </div>

                <div class="pet-actions" role="group" aria-label="Care actions">
                    {PetAction::ALL
                        .into_iter()
                        .map(|action| {
                            view! {
                                <button type="button" on:click=move |_| act.call(action)>
                                    {action.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <p class="pet-notice" role="alert">{move || notice.get()}</p>

                <label class="pet-cosmetic">
                    "Accessory "
                    <select on:change=move |ev| {
                        if let Some(cosmetic) = Cosmetic::from_token(&event_target_value(&ev)) {
                            choose_cosmetic.call(cosmetic);
                        }
                    }>
                        {Cosmetic::ALL
                            .into_iter()
                            .map(|cosmetic| {
                                view! {
                                    <option
                                        value=cosmetic.token()
                                        selected=move || {
                                            game.with(|s| s.as_ref().map(|s| s.cosmetic) == Some(cosmetic))
                                        }
                                    >
                                        {cosmetic.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </label>

                <dl class="pet-achievements">
                    {move || {
                        let counts = game.with(|s| s.as_ref().map(|s| s.achievements).unwrap_or_default());
                        view! {
                            <dt>"Meals"</dt><dd>{counts.feeds}</dd>
                            <dt>"Baths"</dt><dd>{counts.cleans}</dd>
                            <dt>"Pets"</dt><dd>{counts.pets}</dd>
                            <dt>"Workouts"</dt><dd>{counts.trains}</dd>
                        }
                    }}
                </dl>
            </Show>
        </div>
    }
}
