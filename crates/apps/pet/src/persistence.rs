//! Loading and saving the minigame snapshot.
//!
//! Storage failures never reach the player: an unreadable snapshot starts a fresh game and a
//! failed save leaves the in-memory game running.

use leptos::logging;
use platform_host::{load_pref_with, save_pref_with, PrefsStore};

use crate::game::GameState;

/// Prefs key holding the JSON snapshot.
pub const PET_STORAGE_KEY: &str = "portfolio.tamagotchi.v1";

/// Loads the saved game and applies decay for the time since it was saved.
pub async fn load_game(store: &dyn PrefsStore, now_ms: u64) -> GameState {
    let mut state = match load_pref_with::<_, GameState>(store, PET_STORAGE_KEY).await {
        Ok(Some(state)) => state.clamped(),
        Ok(None) => GameState::default(),
        Err(err) => {
            logging::warn!("pet snapshot unreadable, starting a new game: {err}");
            GameState::default()
        }
    };
    state.catch_up(now_ms);
    state
}

/// Saves `state`. Returns whether the write succeeded.
pub async fn save_game(store: &dyn PrefsStore, state: &GameState) -> bool {
    match save_pref_with(store, PET_STORAGE_KEY, state).await {
        Ok(()) => true,
        Err(err) => {
            logging::warn!("pet snapshot save failed: {err}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::{MemoryPrefsStore, NoopPrefsStore, PrefsStoreFuture};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::game::{PetAction, DECAY_TICK_MS};

    const NOW: u64 = 1_700_000_000_000;

    struct FailingPrefsStore;

    fn failed<'a, T: 'a>() -> PrefsStoreFuture<'a, Result<T, String>> {
        Box::pin(async { Err("storage disabled".to_string()) })
    }

    impl PrefsStore for FailingPrefsStore {
        fn load_pref<'a>(
            &'a self,
            _key: &'a str,
        ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
            failed()
        }

        fn save_pref<'a>(
            &'a self,
            _key: &'a str,
            _raw_json: &'a str,
        ) -> PrefsStoreFuture<'a, Result<(), String>> {
            failed()
        }

        fn delete_pref<'a>(&'a self, _key: &'a str) -> PrefsStoreFuture<'a, Result<(), String>> {
            failed()
        }
    }

    #[test]
    fn missing_snapshot_starts_a_new_game_clocked_now() {
        let state = block_on(load_game(&NoopPrefsStore, NOW));
        assert_eq!(
            state,
            GameState {
                last_saved_ms: NOW,
                ..GameState::default()
            }
        );
    }

    #[test]
    fn corrupt_snapshot_falls_back_and_is_overwritten_by_the_next_save() {
        let store = MemoryPrefsStore::default();
        store.insert_raw(PET_STORAGE_KEY, "{\"hearts\": tru");

        let mut state = block_on(load_game(&store, NOW));
        assert_eq!(state.hearts, GameState::default().hearts);

        state.apply(PetAction::Pet);
        assert!(block_on(save_game(&store, &state)));

        let reloaded = block_on(load_game(&store, NOW));
        assert_eq!(reloaded, state);
    }

    #[test]
    fn reload_applies_elapsed_decay() {
        let store = MemoryPrefsStore::default();
        let saved = GameState {
            last_saved_ms: NOW,
            ..GameState::default()
        };
        block_on(save_game(&store, &saved));

        let reloaded = block_on(load_game(&store, NOW + DECAY_TICK_MS * 10 + 5));
        assert_eq!(reloaded.hunger, saved.hunger + 10);
        assert_eq!(reloaded.last_saved_ms, NOW + DECAY_TICK_MS * 10);
    }

    #[test]
    fn storage_errors_are_absorbed() {
        let state = block_on(load_game(&FailingPrefsStore, NOW));
        assert_eq!(state.hearts, GameState::default().hearts);
        assert!(!block_on(save_game(&FailingPrefsStore, &state)));
    }
}
