//! Durable storage contracts.
//!
//! The desktop core persists nothing across reloads; the only durable consumer is the minigame
//! snapshot, which goes through [`prefs::PrefsStore`].

pub mod prefs;
