//! Ambient locale with scoped override
//!
//! Each thread has an ambient [`Locale`], seeded from `VERITY_LOCALE` (or the
//! invariant culture). [`with_locale`] swaps it for the duration of a closure
//! and restores the previous value on every exit path, panics included.

use std::cell::RefCell;
use std::env;
use std::marker::PhantomData;

use verity_core_types::Locale;

use crate::errors::ConfigError;

/// Environment variable seeding each thread's default locale
pub const LOCALE_ENV: &str = "VERITY_LOCALE";

thread_local! {
    static AMBIENT: RefCell<Locale> = RefCell::new(default_locale());
}

/// Parse an optional locale setting; absent means invariant
///
/// # Errors
/// `InvalidLocale` when the value is not a valid culture name.
pub fn parse_locale_setting(setting: Option<&str>) -> Result<Locale, ConfigError> {
    match setting {
        None => Ok(Locale::invariant()),
        Some(value) => Locale::parse(value).ok_or_else(|| ConfigError::InvalidLocale {
            value: value.to_string(),
        }),
    }
}

fn default_locale() -> Locale {
    parse_locale_setting(env::var(LOCALE_ENV).ok().as_deref()).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "falling back to invariant locale");
        Locale::invariant()
    })
}

/// The calling thread's ambient locale
pub fn current_locale() -> Locale {
    AMBIENT.with(|ambient| ambient.borrow().clone())
}

/// Resolve an explicit locale, falling back to the ambient one
pub fn resolve_locale(locale: Option<&Locale>) -> Locale {
    locale.cloned().unwrap_or_else(current_locale)
}

/// Guard that restores the previous ambient locale when dropped
///
/// Tied to the thread that created it.
#[must_use = "the previous locale is restored as soon as the scope is dropped"]
pub struct LocaleScope {
    previous: Option<Locale>,
    _thread_bound: PhantomData<*const ()>,
}

impl LocaleScope {
    /// Make `locale` ambient until the returned guard is dropped
    pub fn enter(locale: Locale) -> Self {
        tracing::debug!(locale = %locale, "entering locale scope");
        let previous = AMBIENT.with(|ambient| ambient.replace(locale));
        Self {
            previous: Some(previous),
            _thread_bound: PhantomData,
        }
    }
}

impl Drop for LocaleScope {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            // Thread-local storage may already be gone during thread teardown.
            let _ = AMBIENT.try_with(|ambient| ambient.replace(previous));
        }
    }
}

/// Run `f` with `locale` as the ambient locale
///
/// # Example
///
/// ```
/// use verity_core::locale::{current_locale, with_locale};
/// use verity_core_types::Locale;
///
/// let tr = Locale::parse("tr-TR").unwrap();
/// let seen = with_locale(tr.clone(), current_locale);
/// assert_eq!(seen, tr);
/// ```
pub fn with_locale<R>(locale: Locale, f: impl FnOnce() -> R) -> R {
    let _scope = LocaleScope::enter(locale);
    f()
}
