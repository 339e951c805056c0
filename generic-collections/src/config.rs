//! Construction limits and defaults for pre-sized containers.
//!
//! A [`CollectionsConfig`] can be built in code, or read from the process
//! environment:
//!
//! ```
//! use generic_collections::CollectionsConfig;
//!
//! let config = CollectionsConfig::new()
//!     .with_max_fixed_len(1024)
//!     .with_default_list_capacity(32);
//! assert!(config.validate().is_ok());
//! ```
//!
//! | Variable | Field |
//! |----------|-------|
//! | `COLLECTIONS_MAX_FIXED_LEN` | [`CollectionsConfig::max_fixed_len`] |
//! | `COLLECTIONS_DEFAULT_LIST_CAPACITY` | [`CollectionsConfig::default_list_capacity`] |

use crate::error::{CollectionError, Result};

/// Largest [`FixedArray`](crate::FixedArray) length accepted by default.
pub const DEFAULT_MAX_FIXED_LEN: usize = 1 << 24;

/// Initial capacity of a [`DynamicList`](crate::DynamicList) built from config.
pub const DEFAULT_LIST_CAPACITY: usize = 0;

/// Prefix used by [`CollectionsConfig::from_env`].
pub const ENV_PREFIX: &str = "COLLECTIONS_";

const MAX_FIXED_LEN_VAR: &str = "MAX_FIXED_LEN";
const DEFAULT_LIST_CAPACITY_VAR: &str = "DEFAULT_LIST_CAPACITY";

/// Limits applied when allocating fixed or pre-sized containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionsConfig {
    max_fixed_len: usize,
    default_list_capacity: usize,
}

impl Default for CollectionsConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl CollectionsConfig {
    /// Returns the default configuration.
    pub const fn new() -> Self {
        Self {
            max_fixed_len: DEFAULT_MAX_FIXED_LEN,
            default_list_capacity: DEFAULT_LIST_CAPACITY,
        }
    }

    /// Sets the largest length a fixed array may be created with.
    pub const fn with_max_fixed_len(mut self, len: usize) -> Self {
        self.max_fixed_len = len;
        self
    }

    /// Sets the capacity reserved by [`DynamicList::with_config`](crate::DynamicList::with_config).
    pub const fn with_default_list_capacity(mut self, capacity: usize) -> Self {
        self.default_list_capacity = capacity;
        self
    }

    /// Largest length a fixed array may be created with.
    #[inline]
    pub const fn max_fixed_len(&self) -> usize {
        self.max_fixed_len
    }

    /// Capacity reserved up front for dynamic lists.
    #[inline]
    pub const fn default_list_capacity(&self) -> usize {
        self.default_list_capacity
    }

    /// Checks that both limits fit in `isize`.
    ///
    /// Whether a limit can actually be allocated depends on the element
    /// type; constructors report that failure themselves.
    pub fn validate(&self) -> Result<()> {
        let limit = isize::MAX as usize;
        if self.max_fixed_len > limit {
            return Err(CollectionError::invalid_argument(format!(
                "max_fixed_len {} exceeds {}",
                self.max_fixed_len, limit
            )));
        }
        if self.default_list_capacity > limit {
            return Err(CollectionError::invalid_argument(format!(
                "default_list_capacity {} exceeds {}",
                self.default_list_capacity, limit
            )));
        }
        Ok(())
    }

    /// Reads the configuration from `COLLECTIONS_*` environment variables.
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_env_with_prefix(ENV_PREFIX)
    }

    /// Reads the configuration from environment variables with a custom prefix.
    pub fn from_env_with_prefix(prefix: &str) -> Result<Self> {
        Self::from_lookup(prefix, |name| std::env::var(name).ok())
    }

    /// Reads the configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(prefix: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new();

        if let Some(len) = parse_var(prefix, MAX_FIXED_LEN_VAR, &lookup)? {
            config.max_fixed_len = len;
        }
        if let Some(capacity) = parse_var(prefix, DEFAULT_LIST_CAPACITY_VAR, &lookup)? {
            config.default_list_capacity = capacity;
        }

        config.validate()?;
        log::debug!("loaded collections config with prefix {prefix:?}: {config:?}");
        Ok(config)
    }
}

fn parse_var<F>(prefix: &str, name: &str, lookup: &F) -> Result<Option<usize>>
where
    F: Fn(&str) -> Option<String>,
{
    let var = format!("{prefix}{name}");
    match lookup(&var) {
        None => Ok(None),
        Some(raw) => raw.trim().parse::<usize>().map(Some).map_err(|e| {
            CollectionError::invalid_argument(format!("{var}={raw:?}: {e}"))
        }),
    }
}
