//! Runtime variant selection
//!
//! Some operations raise a different failure kind, or blame a differently
//! named parameter, depending on which of two historical behaviours the
//! runtime follows. The active variant is read from configuration once per
//! call and used to pick the matching [`Expectation`].

use std::env;
use std::str::FromStr;

use crate::errors::ConfigError;

/// Environment variable selecting the runtime variant
pub const RUNTIME_VARIANT_ENV: &str = "VERITY_RUNTIME_VARIANT";

/// Historical behaviour variant of the runtime under test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RuntimeVariant {
    Legacy,
    #[default]
    Current,
}

impl RuntimeVariant {
    /// Parse an optional setting; absent or blank means the default
    ///
    /// # Errors
    /// `UnknownVariant` for any other value than `legacy` or `current`.
    pub fn parse_setting(setting: Option<&str>) -> Result<Self, ConfigError> {
        match setting.map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some(value) => value.parse(),
        }
    }

    /// Read the variant from [`RUNTIME_VARIANT_ENV`]
    ///
    /// # Errors
    /// `UnknownVariant` when the variable holds an unrecognised value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::parse_setting(env::var(RUNTIME_VARIANT_ENV).ok().as_deref())
    }

    /// The active variant, falling back to the default on a bad setting
    pub fn current() -> Self {
        Self::from_env().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "ignoring runtime variant setting");
            Self::default()
        })
    }
}

impl FromStr for RuntimeVariant {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "legacy" => Ok(Self::Legacy),
            "current" => Ok(Self::Current),
            _ => Err(ConfigError::UnknownVariant {
                value: value.to_string(),
            }),
        }
    }
}

/// Expected failure kind and, optionally, the parameter it should blame
#[derive(Debug, Clone, PartialEq)]
pub struct Expectation<K> {
    pub kind: K,
    /// `None` skips the parameter-name check
    pub param_name: Option<String>,
}

impl<K> Expectation<K> {
    pub fn new(kind: K) -> Self {
        Self {
            kind,
            param_name: None,
        }
    }

    pub fn with_param_name(mut self, name: impl Into<String>) -> Self {
        self.param_name = Some(name.into());
        self
    }
}

/// One expectation per runtime variant
#[derive(Debug, Clone, PartialEq)]
pub struct VariantExpectation<K> {
    legacy: Expectation<K>,
    current: Expectation<K>,
}

impl<K> VariantExpectation<K> {
    pub fn new(legacy: Expectation<K>, current: Expectation<K>) -> Self {
        Self { legacy, current }
    }

    /// Pick the expectation for `variant`
    pub fn select(&self, variant: RuntimeVariant) -> &Expectation<K> {
        match variant {
            RuntimeVariant::Legacy => &self.legacy,
            RuntimeVariant::Current => &self.current,
        }
    }
}

impl<K: Clone> VariantExpectation<K> {
    /// The same expectation under every variant
    pub fn uniform(expectation: Expectation<K>) -> Self {
        Self {
            legacy: expectation.clone(),
            current: expectation,
        }
    }
}
