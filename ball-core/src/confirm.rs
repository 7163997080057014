//! Confirmation port for destructive actions.

/// A synchronous yes/no prompt.
///
/// The browser host answers with `window.confirm`; tests use [`FixedAnswer`].
pub trait ConfirmPrompt {
    /// Ask the user a yes/no question. Returns `true` on yes.
    fn confirm(&self, message: &str) -> bool;
}

/// A prompt that always gives the same answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedAnswer(pub bool);

impl FixedAnswer {
    /// A prompt that always says yes.
    pub const YES: Self = Self(true);
    /// A prompt that always says no.
    pub const NO: Self = Self(false);
}

impl ConfirmPrompt for FixedAnswer {
    fn confirm(&self, message: &str) -> bool {
        tracing::debug!("Auto-answering '{message}' with {}", self.0);
        self.0
    }
}

impl<F> ConfirmPrompt for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}
