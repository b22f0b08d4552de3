//! EditContext: the ambient settings every operation runs against.

use std::fmt;

use crate::mint::{Clock, SystemClock};

/// Locale key used for the placeholder label of new fields.
pub const DEFAULT_LOCALE: &str = "en";

/// Settings and collaborators shared by all operations on a document.
///
/// ```rust
/// use docschema_fields::{EditContext, FixedClock};
///
/// let ctx = EditContext::builder()
///     .with_default_locale("de")
///     .with_clock(FixedClock(42))
///     .build();
/// assert_eq!(ctx.default_locale(), "de");
/// ```
pub struct EditContext {
    clock: Box<dyn Clock>,
    default_locale: String,
}

impl EditContext {
    /// Context with the system clock and the `en` locale.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> EditContextBuilder {
        EditContextBuilder {
            clock: None,
            default_locale: None,
        }
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }
}

impl Default for EditContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EditContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditContext")
            .field("default_locale", &self.default_locale)
            .finish_non_exhaustive()
    }
}

/// Builder for `EditContext`. Created by `EditContext::builder()`.
pub struct EditContextBuilder {
    clock: Option<Box<dyn Clock>>,
    default_locale: Option<String>,
}

impl EditContextBuilder {
    /// Replace the timestamp source used for minting identifiers.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    /// Locale key for the empty label given to new fields. Blank values are
    /// ignored.
    pub fn with_default_locale(mut self, locale: impl Into<String>) -> Self {
        let locale = locale.into();
        if !locale.trim().is_empty() {
            self.default_locale = Some(locale.trim().to_string());
        }
        self
    }

    pub fn build(self) -> EditContext {
        EditContext {
            clock: self.clock.unwrap_or_else(|| Box::new(SystemClock)),
            default_locale: self
                .default_locale
                .unwrap_or_else(|| DEFAULT_LOCALE.to_string()),
        }
    }
}
