//! Password gate guarding locked entries.
//!
//! [`GateState`] is the whole state machine; [`PasswordGate`] only runs the [`GateEffect`]s it
//! emits (verification calls, timers, callbacks). Timers carry the error epoch they were scheduled
//! for, so a timer left over from an earlier failure cannot clear a newer error.

use std::{cell::Cell, rc::Rc, time::Duration};

use leptos::{leptos_dom::helpers::TimeoutHandle, *};
use platform_host::PasswordVerifier;

/// How long the wrong-password message stays visible.
pub const ERROR_DISPLAY_MS: u64 = 2_500;
/// Delay between the unlock celebration and `on_unlocked`.
pub const UNLOCK_DELAY_MS: u64 = 1_200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GatePhase {
    #[default]
    Idle,
    /// Verification in flight; further submissions are ignored.
    Checking,
    /// Terminal for this mount.
    Unlocked,
    /// Showing the wrong-password message. Input stays available.
    Error,
}

/// Side effects requested by [`GateState`] transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateEffect {
    /// Call the verifier with this candidate and feed the answer to [`GateState::resolve`].
    Verify(String),
    /// Play the shake affordance once.
    Shake,
    /// Call [`GateState::clear_error`] with `epoch` after [`ERROR_DISPLAY_MS`].
    ScheduleErrorClear { epoch: u64 },
    /// Play the unlock celebration once.
    Celebrate,
    /// Call [`GateState::finish_unlock`] after [`UNLOCK_DELAY_MS`].
    ScheduleUnlock,
    NotifyUnlocked,
    NotifyBack,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GateState {
    phase: GatePhase,
    input: String,
    error_epoch: u64,
    unlocked_notified: bool,
}

impl GateState {
    pub fn phase(&self) -> GatePhase {
        self.phase
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn accepts_input(&self) -> bool {
        matches!(self.phase, GatePhase::Idle | GatePhase::Error)
    }

    pub fn can_go_back(&self) -> bool {
        self.accepts_input()
    }

    pub fn set_input(&mut self, value: String) {
        if self.accepts_input() {
            self.input = value;
        }
    }

    /// Starts verification of the current input.
    ///
    /// Ignored while checking, after unlocking, and for blank input. Allowed from `Error` without
    /// waiting for the message to clear.
    pub fn submit(&mut self) -> Vec<GateEffect> {
        if !self.accepts_input() || self.input.trim().is_empty() {
            return Vec::new();
        }
        self.phase = GatePhase::Checking;
        vec![GateEffect::Verify(self.input.clone())]
    }

    /// Applies the verifier's answer. Ignored unless a check is in flight.
    pub fn resolve(&mut self, accepted: bool) -> Vec<GateEffect> {
        if self.phase != GatePhase::Checking {
            return Vec::new();
        }
        if accepted {
            self.phase = GatePhase::Unlocked;
            vec![GateEffect::Celebrate, GateEffect::ScheduleUnlock]
        } else {
            self.phase = GatePhase::Error;
            self.input.clear();
            self.error_epoch += 1;
            vec![
                GateEffect::Shake,
                GateEffect::ScheduleErrorClear {
                    epoch: self.error_epoch,
                },
            ]
        }
    }

    /// Returns to `Idle` if the error shown is still the one from `epoch`.
    pub fn clear_error(&mut self, epoch: u64) -> bool {
        if self.phase == GatePhase::Error && self.error_epoch == epoch {
            self.phase = GatePhase::Idle;
            true
        } else {
            false
        }
    }

    /// Emits [`GateEffect::NotifyUnlocked`] the first time it is called after unlocking.
    pub fn finish_unlock(&mut self) -> Vec<GateEffect> {
        if self.phase != GatePhase::Unlocked || self.unlocked_notified {
            return Vec::new();
        }
        self.unlocked_notified = true;
        vec![GateEffect::NotifyUnlocked]
    }

    pub fn back(&mut self) -> Vec<GateEffect> {
        if self.can_go_back() {
            vec![GateEffect::NotifyBack]
        } else {
            Vec::new()
        }
    }
}

#[derive(Clone)]
struct GateDriver {
    gate: RwSignal<GateState>,
    shake: RwSignal<Option<u64>>,
    celebrating: RwSignal<bool>,
    verifier: Rc<dyn PasswordVerifier>,
    alive: Rc<Cell<bool>>,
    timers: StoredValue<Vec<TimeoutHandle>>,
    on_unlocked: Callback<()>,
    on_back: Callback<()>,
}

impl GateDriver {
    fn transition(&self, f: impl FnOnce(&mut GateState) -> Vec<GateEffect>) {
        if let Some(effects) = self.gate.try_update(f) {
            self.run(effects);
        }
    }

    fn run(&self, effects: Vec<GateEffect>) {
        for effect in effects {
            match effect {
                GateEffect::Verify(candidate) => {
                    let driver = self.clone();
                    spawn_local(async move {
                        let accepted = driver.verifier.verify(&candidate).await;
                        if !driver.alive.get() {
                            return;
                        }
                        logging::log!(
                            "password gate: candidate {}",
                            if accepted { "accepted" } else { "rejected" }
                        );
                        driver.transition(|gate| gate.resolve(accepted));
                    });
                }
                GateEffect::Shake => {
                    let epoch = self.gate.with_untracked(|gate| gate.error_epoch);
                    self.shake.set(Some(epoch));
                }
                GateEffect::ScheduleErrorClear { epoch } => {
                    let driver = self.clone();
                    self.schedule(ERROR_DISPLAY_MS, move || {
                        driver.gate.try_update(|gate| gate.clear_error(epoch));
                    });
                }
                GateEffect::Celebrate => self.celebrating.set(true),
                GateEffect::ScheduleUnlock => {
                    let driver = self.clone();
                    self.schedule(UNLOCK_DELAY_MS, move || {
                        driver.transition(GateState::finish_unlock);
                    });
                }
                GateEffect::NotifyUnlocked => self.on_unlocked.call(()),
                GateEffect::NotifyBack => self.on_back.call(()),
            }
        }
    }

    fn schedule(&self, delay_ms: u64, f: impl FnOnce() + 'static) {
        let alive = self.alive.clone();
        let fire = move || {
            if alive.get() {
                f();
            }
        };
        match set_timeout_with_handle(fire, Duration::from_millis(delay_ms)) {
            Ok(handle) => {
                self.timers.try_update_value(|timers| timers.push(handle));
            }
            Err(err) => logging::warn!("password gate timer failed: {err:?}"),
        }
    }
}

/// Root class for the gate. Consecutive rejections alternate between `shake-a` and `shake-b`
/// so a second shake restarts even if the first animation has not ended.
fn gate_class(shake: Option<u64>, celebrating: bool) -> String {
    let mut class = String::from("password-gate");
    if let Some(epoch) = shake {
        class.push_str(if epoch % 2 == 0 {
            " password-gate-shake shake-a"
        } else {
            " password-gate-shake shake-b"
        });
    }
    if celebrating {
        class.push_str(" password-gate-celebrate");
    }
    class
}

/// Password prompt shown in place of a locked entry.
#[component]
pub fn PasswordGate(
    /// Entry title shown above the prompt.
    title: &'static str,
    verifier: Rc<dyn PasswordVerifier>,
    /// DOM id for the password input, so the window can focus it.
    input_id: String,
    on_unlocked: Callback<()>,
    on_back: Callback<()>,
) -> impl IntoView {
    let gate = create_rw_signal(GateState::default());
    let shake = create_rw_signal(None::<u64>);
    let celebrating = create_rw_signal(false);
    let alive = Rc::new(Cell::new(true));
    let timers = store_value(Vec::<TimeoutHandle>::new());

    {
        let alive = alive.clone();
        on_cleanup(move || {
            alive.set(false);
            timers.try_with_value(|timers| timers.iter().for_each(|handle| handle.clear()));
        });
    }

    let driver = GateDriver {
        gate,
        shake,
        celebrating,
        verifier,
        alive,
        timers,
        on_unlocked,
        on_back,
    };

    let on_submit = {
        let driver = driver.clone();
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            driver.transition(GateState::submit);
        }
    };
    let on_back_click = move |_| driver.transition(GateState::back);

    let phase = move || gate.with(GateState::phase);

    view! {
        <div
            class=move || gate_class(shake.get(), celebrating.get())
            on:animationend=move |_| shake.set(None)
            data-phase=move || format!("{:?}", phase()).to_lowercase()
        >
            <p class="password-gate-title">{title}</p>
            <p class="password-gate-hint">"This case study is password protected."</p>
            <form class="password-gate-form" on:submit=on_submit>
                <input
                    id=input_id
                    type="password"
                    autocomplete="off"
                    aria-label="Password"
                    prop:value=move || gate.with(|g| g.input().to_string())
                    disabled=move || !gate.with(GateState::accepts_input)
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        gate.update(|g| g.set_input(value));
                    }
                />
                <button type="submit" disabled=move || phase() == GatePhase::Checking>
                    {move || match phase() {
                        GatePhase::Checking => "Checking...",
                        GatePhase::Unlocked => "Unlocked",
                        GatePhase::Idle | GatePhase::Error => "Unlock",
                    }}
                </button>
            </form>
            <Show when=move || phase() == GatePhase::Error fallback=|| ()>
                <p class="password-gate-error" role="alert">"Wrong password. Try again."</p>
            </Show>
            <button
                type="button"
                class="password-gate-back"
                disabled=move || !gate.with(GateState::can_go_back)
                on:click=on_back_click
            >
                "Back"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::ScriptedPasswordVerifier;
    use pretty_assertions::assert_eq;

    use super::*;

    /// Runs verification effects synchronously and returns everything else.
    fn drive(
        gate: &mut GateState,
        verifier: &ScriptedPasswordVerifier,
        effects: Vec<GateEffect>,
    ) -> Vec<GateEffect> {
        let mut rest = Vec::new();
        for effect in effects {
            match effect {
                GateEffect::Verify(candidate) => {
                    let accepted = block_on(verifier.verify(&candidate));
                    rest.extend(gate.resolve(accepted));
                }
                other => rest.push(other),
            }
        }
        rest
    }

    #[test]
    fn correct_password_unlocks_and_notifies_once() {
        let verifier = ScriptedPasswordVerifier::accepting(["open sesame"]);
        let mut gate = GateState::default();
        gate.set_input("open sesame".to_string());

        let effects = gate.submit();
        assert_eq!(gate.phase(), GatePhase::Checking);
        let effects = drive(&mut gate, &verifier, effects);
        assert_eq!(effects, vec![GateEffect::Celebrate, GateEffect::ScheduleUnlock]);
        assert_eq!(gate.phase(), GatePhase::Unlocked);

        assert_eq!(gate.finish_unlock(), vec![GateEffect::NotifyUnlocked]);
        assert_eq!(gate.finish_unlock(), Vec::new());
        assert_eq!(verifier.calls().len(), 1);
    }

    #[test]
    fn wrong_password_errors_then_returns_to_idle() {
        let verifier = ScriptedPasswordVerifier::accepting(["right"]);
        let mut gate = GateState::default();
        gate.set_input("wrong".to_string());

        let effects = gate.submit();
        let effects = drive(&mut gate, &verifier, effects);
        assert_eq!(
            effects,
            vec![GateEffect::Shake, GateEffect::ScheduleErrorClear { epoch: 1 }]
        );
        assert_eq!(gate.phase(), GatePhase::Error);
        assert_eq!(gate.input(), "");

        assert!(gate.clear_error(1));
        assert_eq!(gate.phase(), GatePhase::Idle);
        assert_eq!(gate.finish_unlock(), Vec::new());
    }

    #[test]
    fn submit_while_checking_is_ignored() {
        let verifier = ScriptedPasswordVerifier::accepting(["right"]);
        let mut gate = GateState::default();
        gate.set_input("right".to_string());

        let first = gate.submit();
        assert_eq!(gate.submit(), Vec::new());
        gate.set_input("changed".to_string());
        assert_eq!(gate.input(), "right");

        drive(&mut gate, &verifier, first);
        assert_eq!(verifier.calls(), vec!["right".to_string()]);
    }

    #[test]
    fn blank_input_does_not_submit() {
        let mut gate = GateState::default();
        gate.set_input("   ".to_string());
        assert_eq!(gate.submit(), Vec::new());
        assert_eq!(gate.phase(), GatePhase::Idle);
    }

    #[test]
    fn retry_is_allowed_during_error_display() {
        let verifier = ScriptedPasswordVerifier::accepting(["right"]);
        let mut gate = GateState::default();
        gate.set_input("wrong".to_string());
        let effects = gate.submit();
        drive(&mut gate, &verifier, effects);

        gate.set_input("right".to_string());
        let effects = gate.submit();
        assert_eq!(effects, vec![GateEffect::Verify("right".to_string())]);
        drive(&mut gate, &verifier, effects);
        assert_eq!(gate.phase(), GatePhase::Unlocked);

        // The first failure's timer fires late and must not disturb the unlock.
        assert!(!gate.clear_error(1));
        assert_eq!(gate.phase(), GatePhase::Unlocked);
    }

    #[test]
    fn stale_error_timer_does_not_clear_newer_error() {
        let verifier = ScriptedPasswordVerifier::accepting(["right"]);
        let mut gate = GateState::default();
        for attempt in ["a", "b"] {
            gate.set_input(attempt.to_string());
            let effects = gate.submit();
            drive(&mut gate, &verifier, effects);
        }
        assert!(!gate.clear_error(1));
        assert_eq!(gate.phase(), GatePhase::Error);
        assert!(gate.clear_error(2));
    }

    #[test]
    fn back_is_only_available_when_not_busy() {
        let mut gate = GateState::default();
        assert_eq!(gate.back(), vec![GateEffect::NotifyBack]);

        gate.set_input("x".to_string());
        gate.submit();
        assert_eq!(gate.back(), Vec::new());

        gate.resolve(true);
        assert_eq!(gate.back(), Vec::new());
    }

    #[test]
    fn late_verifier_answer_is_ignored_outside_checking() {
        let mut gate = GateState::default();
        assert_eq!(gate.resolve(true), Vec::new());
        assert_eq!(gate.phase(), GatePhase::Idle);
    }

    #[test]
    fn repeated_rejections_restart_the_shake() {
        let verifier = ScriptedPasswordVerifier::accepting(["right"]);
        let mut gate = GateState::default();
        let mut classes = Vec::new();
        for attempt in ["a", "b"] {
            gate.set_input(attempt.to_string());
            let effects = gate.submit();
            let rest = drive(&mut gate, &verifier, effects);
            assert!(rest.contains(&GateEffect::Shake));
            classes.push(gate_class(Some(gate.error_epoch), false));
        }
        assert_ne!(classes[0], classes[1]);
        assert!(classes.iter().all(|class| class.contains("password-gate-shake")));
        assert_eq!(gate_class(None, true), "password-gate password-gate-celebrate");
    }
}
