//! Repository configuration.

/// Default identifier prefix.
pub const DEFAULT_ID_PREFIX: &str = "WTT";

/// Default width of the zero-padded identifier number.
pub const DEFAULT_ID_WIDTH: usize = 6;

/// Configuration for opening an [`ItemRepository`](crate::ItemRepository).
#[derive(Debug, Clone)]
pub struct RepositoryConfig {
    /// Prefix placed before the hyphen in generated identifiers.
    pub id_prefix: String,

    /// Minimum number of digits in generated identifiers.
    pub id_width: usize,

    /// Whether to write the starter catalog when the store is empty.
    pub seed_if_empty: bool,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            id_prefix: DEFAULT_ID_PREFIX.to_string(),
            id_width: DEFAULT_ID_WIDTH,
            seed_if_empty: false,
        }
    }
}

impl RepositoryConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the identifier prefix.
    #[must_use]
    pub fn id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix = prefix.into();
        self
    }

    /// Sets the identifier width.
    #[must_use]
    pub const fn id_width(mut self, width: usize) -> Self {
        self.id_width = width;
        self
    }

    /// Sets whether to seed an empty store on open.
    #[must_use]
    pub const fn seed_if_empty(mut self, value: bool) -> Self {
        self.seed_if_empty = value;
        self
    }
}
