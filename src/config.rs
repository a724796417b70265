//! Run configuration.

/// Options that affect how tables are computed and rendered.
///
/// # Example
///
/// ```
/// use truth_rs::config::Config;
///
/// let config = Config::default().with_pruning(false).with_header(true);
/// assert!(!config.pruning);
/// assert!(config.header);
/// ```
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Config {
    /// Skip `show_ones` subtrees in which no output can become true (default: true).
    ///
    /// Disabling it never changes the output, only the amount of work.
    pub pruning: bool,
    /// Print a line naming the columns above each table (default: false).
    pub header: bool,
    /// Initial capacity of the evaluator caches, as a power of two (default: 10).
    pub cache_bits: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pruning: true,
            header: false,
            cache_bits: 10,
        }
    }
}

impl Config {
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    pub fn with_cache_bits(mut self, cache_bits: usize) -> Self {
        assert!(cache_bits <= 31, "Cache bits should be in the range 0..=31");
        self.cache_bits = cache_bits;
        self
    }
}
