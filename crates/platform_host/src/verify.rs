//! Password verification contract for locked portfolio entries.
//!
//! The gate is a UX affordance, not authentication: the verifier only answers yes or no, and any
//! failure inside an implementation must be reported as `false`.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

/// Object-safe boxed future used by [`PasswordVerifier`].
pub type VerifyFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Password accepted when no build-time override is provided.
pub const DEFAULT_UNLOCK_PASSWORD: &str = "letmein";

/// Host service answering whether a candidate password unlocks protected content.
pub trait PasswordVerifier {
    /// Resolves to `true` when `candidate` is accepted.
    fn verify<'a>(&'a self, candidate: &'a str) -> VerifyFuture<'a, bool>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Verifier comparing against a single configured password.
pub struct StaticPasswordVerifier {
    expected: String,
}

impl StaticPasswordVerifier {
    /// Accepts exactly `expected` (surrounding whitespace in the candidate is ignored).
    pub fn new(expected: impl Into<String>) -> Self {
        Self {
            expected: expected.into(),
        }
    }

    /// Uses `PORTFOLIO_UNLOCK_PASSWORD` from the build environment, or [`DEFAULT_UNLOCK_PASSWORD`].
    pub fn from_build_env() -> Self {
        Self::new(option_env!("PORTFOLIO_UNLOCK_PASSWORD").unwrap_or(DEFAULT_UNLOCK_PASSWORD))
    }

    fn accepts(&self, candidate: &str) -> bool {
        !self.expected.is_empty() && candidate.trim() == self.expected
    }
}

impl PasswordVerifier for StaticPasswordVerifier {
    fn verify<'a>(&'a self, candidate: &'a str) -> VerifyFuture<'a, bool> {
        let accepted = self.accepts(candidate);
        Box::pin(async move { accepted })
    }
}

#[derive(Debug, Clone, Default)]
/// Test verifier that accepts a fixed set of passwords and records every call.
pub struct ScriptedPasswordVerifier {
    accepted: Rc<Vec<String>>,
    calls: Rc<RefCell<Vec<String>>>,
}

impl ScriptedPasswordVerifier {
    /// Accepts any of `accepted`.
    pub fn accepting<I, S>(accepted: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            accepted: Rc::new(accepted.into_iter().map(Into::into).collect()),
            calls: Rc::default(),
        }
    }

    /// Candidates passed to [`PasswordVerifier::verify`], oldest first.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl PasswordVerifier for ScriptedPasswordVerifier {
    fn verify<'a>(&'a self, candidate: &'a str) -> VerifyFuture<'a, bool> {
        self.calls.borrow_mut().push(candidate.to_string());
        let accepted = self.accepted.iter().any(|p| p == candidate);
        Box::pin(async move { accepted })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn static_verifier_ignores_surrounding_whitespace_only() {
        let verifier = StaticPasswordVerifier::new("hunter2");
        assert!(block_on(verifier.verify("hunter2")));
        assert!(block_on(verifier.verify("  hunter2\n")));
        assert!(!block_on(verifier.verify("Hunter2")));
        assert!(!block_on(verifier.verify("")));
    }

    #[test]
    fn empty_expected_password_rejects_everything() {
        let verifier = StaticPasswordVerifier::new("");
        assert!(!block_on(verifier.verify("")));
    }

    #[test]
    fn scripted_verifier_records_calls() {
        let verifier = ScriptedPasswordVerifier::accepting(["open"]);
        assert!(!block_on(verifier.verify("closed")));
        assert!(block_on(verifier.verify("open")));
        assert_eq!(verifier.calls(), vec!["closed".to_string(), "open".to_string()]);
    }
}
