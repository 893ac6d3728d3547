use serde::{Deserialize, Serialize};

/// Length of one decay tick.
pub const DECAY_TICK_MS: u64 = 60_000;
/// Most ticks applied by a single catch-up (seven days of absence).
pub const MAX_CATCH_UP_TICKS: u64 = 7 * 24 * 60;
/// Upper bound of every meter.
pub const METER_MAX: u8 = 100;
/// Training is refused below this much player HP.
pub const TRAIN_MIN_USER_HP: u8 = 20;

const FEED_HUNGER: u8 = 25;
const FEED_USER_HP: u8 = 10;
const CLEAN_DIRT: u8 = 40;
const PET_HEARTS: u8 = 10;
const CARE_HEARTS: u8 = 5;
const TRAIN_HEARTS: u8 = 15;
const TRAIN_HUNGER: u8 = 10;
const TRAIN_USER_HP: u8 = 20;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cosmetic {
    #[default]
    None,
    Bow,
    Hat,
    Glasses,
}

impl Cosmetic {
    pub const ALL: [Self; 4] = [Self::None, Self::Bow, Self::Hat, Self::Glasses];

    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Bow => "Bow",
            Self::Hat => "Hat",
            Self::Glasses => "Glasses",
        }
    }

    pub const fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Bow => "bow",
            Self::Hat => "hat",
            Self::Glasses => "glasses",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.token() == token)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PetAction {
    Feed,
    Clean,
    Pet,
    Train,
}

impl PetAction {
    pub const ALL: [Self; 4] = [Self::Feed, Self::Clean, Self::Pet, Self::Train];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Feed => "Feed",
            Self::Clean => "Clean",
            Self::Pet => "Pet",
            Self::Train => "Train",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mood {
    Happy,
    Content,
    Hungry,
    Dirty,
    Sad,
}

impl Mood {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Happy => "Happy",
            Self::Content => "Content",
            Self::Hungry => "Hungry",
            Self::Dirty => "Needs a bath",
            Self::Sad => "Sad",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Achievements {
    pub feeds: u32,
    pub cleans: u32,
    pub pets: u32,
    pub trains: u32,
}

/// Persisted minigame snapshot.
///
/// Meters live in `0..=100`. `hunger` and `dirt` grow over time; `hearts` shrinks.
/// `last_saved_ms` is the instant decay has been accounted up to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameState {
    pub hearts: u8,
    pub hunger: u8,
    pub dirt: u8,
    pub user_hp: u8,
    pub cosmetic: Cosmetic,
    pub achievements: Achievements,
    pub last_saved_ms: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            hearts: 50,
            hunger: 20,
            dirt: 10,
            user_hp: METER_MAX,
            cosmetic: Cosmetic::None,
            achievements: Achievements::default(),
            last_saved_ms: 0,
        }
    }
}

fn raise(meter: u8, by: u8) -> u8 {
    meter.saturating_add(by).min(METER_MAX)
}

fn lower(meter: u8, by: u8) -> u8 {
    meter.saturating_sub(by)
}

fn ticks_as_step(ticks: u64) -> u8 {
    u8::try_from(ticks.min(u64::from(METER_MAX))).unwrap_or(METER_MAX)
}

impl GameState {
    /// Pulls every meter back into range. Applied to anything read from storage.
    pub fn clamped(mut self) -> Self {
        self.hearts = self.hearts.min(METER_MAX);
        self.hunger = self.hunger.min(METER_MAX);
        self.dirt = self.dirt.min(METER_MAX);
        self.user_hp = self.user_hp.min(METER_MAX);
        self
    }

    /// Applies `ticks` decay ticks at once.
    pub fn apply_ticks(&mut self, ticks: u64) {
        let step = ticks_as_step(ticks);
        self.hunger = raise(self.hunger, step);
        self.dirt = raise(self.dirt, step);
        self.hearts = lower(self.hearts, step);
        self.user_hp = raise(self.user_hp, step);
    }

    /// Brings decay up to `now_ms` and returns the number of ticks applied.
    ///
    /// Only whole ticks count; the remainder carries into the next call. Absences longer than
    /// [`MAX_CATCH_UP_TICKS`] decay as if they lasted exactly that long. A snapshot that has never
    /// been saved starts its clock at `now_ms`, and a clock that went backwards applies nothing.
    pub fn catch_up(&mut self, now_ms: u64) -> u64 {
        if self.last_saved_ms == 0 {
            self.last_saved_ms = now_ms;
            return 0;
        }

        let elapsed = platform_host::elapsed_ms_between(self.last_saved_ms, now_ms);
        let ticks = elapsed / DECAY_TICK_MS;
        if ticks == 0 {
            return 0;
        }

        let applied = ticks.min(MAX_CATCH_UP_TICKS);
        self.apply_ticks(applied);
        self.last_saved_ms = self.last_saved_ms.saturating_add(ticks * DECAY_TICK_MS);
        applied
    }

    pub fn can_train(&self) -> bool {
        self.user_hp >= TRAIN_MIN_USER_HP
    }

    /// Applies a care action. Returns `false` when training is refused.
    pub fn apply(&mut self, action: PetAction) -> bool {
        match action {
            PetAction::Feed => {
                self.hunger = lower(self.hunger, FEED_HUNGER);
                self.hearts = raise(self.hearts, CARE_HEARTS);
                self.user_hp = raise(self.user_hp, FEED_USER_HP);
                self.achievements.feeds += 1;
            }
            PetAction::Clean => {
                self.dirt = lower(self.dirt, CLEAN_DIRT);
                self.hearts = raise(self.hearts, CARE_HEARTS);
                self.achievements.cleans += 1;
            }
            PetAction::Pet => {
                self.hearts = raise(self.hearts, PET_HEARTS);
                self.achievements.pets += 1;
            }
            PetAction::Train => {
                if !self.can_train() {
                    return false;
                }
                self.user_hp = lower(self.user_hp, TRAIN_USER_HP);
                self.hunger = raise(self.hunger, TRAIN_HUNGER);
                self.hearts = raise(self.hearts, TRAIN_HEARTS);
                self.achievements.trains += 1;
            }
        }
        true
    }

    pub fn mood(&self) -> Mood {
        if self.hunger >= 80 {
            Mood::Hungry
        } else if self.dirt >= 80 {
            Mood::Dirty
        } else if self.hearts >= 70 {
            Mood::Happy
        } else if self.hearts <= 20 {
            Mood::Sad
        } else {
            Mood::Content
        }
    }
}
