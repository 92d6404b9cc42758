//! Configuration options for NSV decoding.
//!
//! This module provides types to choose how NSV text is scanned:
//!
//! - [`NsvOptions`]: Main configuration struct
//! - [`Backend`]: Choice of scanning strategy (reference, accelerated, parallel)
//!
//! Every backend produces exactly the same tables; they differ only in speed.
//!
//! ## Examples
//!
//! ```rust
//! use nsv::{loads_with_options, Backend, NsvOptions};
//!
//! let options = NsvOptions::new().with_backend(Backend::Reference);
//! let table = loads_with_options("a\nb\n\n", &options);
//! assert_eq!(table, vec![vec!["a", "b"]]);
//! ```

use std::sync::OnceLock;

/// Environment variable consulted by [`Backend::auto`].
pub const BACKEND_ENV: &str = "NSV_BACKEND";

/// Default input size (in bytes) above which [`Backend::Parallel`] splits work.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1 << 20;

static AUTO_BACKEND: OnceLock<Backend> = OnceLock::new();

/// Scanning strategy for NSV text.
///
/// - **Reference**: Walks the input one character at a time
/// - **Accelerated**: Jumps between line terminators with `memchr`
/// - **Parallel**: Accelerated scanning, plus splitting large complete
///   inputs at row boundaries and decoding the pieces with rayon. Without
///   the `parallel` feature it behaves like `Accelerated`.
///
/// # Examples
///
/// ```rust
/// use nsv::Backend;
///
/// assert_eq!(Backend::parse("reference"), Some(Backend::Reference));
/// assert_eq!(Backend::Accelerated.as_str(), "accelerated");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Backend {
    Reference,
    #[default]
    Accelerated,
    Parallel,
}

impl Backend {
    /// Returns the name accepted by [`Backend::parse`].
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Backend::Reference => "reference",
            Backend::Accelerated => "accelerated",
            Backend::Parallel => "parallel",
        }
    }

    /// Parses a backend name, ignoring ASCII case and surrounding whitespace.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        [Backend::Reference, Backend::Accelerated, Backend::Parallel]
            .into_iter()
            .find(|backend| backend.as_str().eq_ignore_ascii_case(name))
    }

    /// Picks the backend for this process.
    ///
    /// The choice is made on first call and cached: `NSV_BACKEND` wins when it
    /// names a backend, otherwise `Parallel` is used when the crate was built
    /// with the `parallel` feature and `Accelerated` when it was not.
    #[must_use]
    pub fn auto() -> Self {
        *AUTO_BACKEND.get_or_init(|| {
            let requested = std::env::var(BACKEND_ENV).ok();
            let backend = match requested.as_deref().map(Backend::parse) {
                Some(Some(backend)) => backend,
                Some(None) => {
                    tracing::warn!(
                        value = requested.as_deref().unwrap_or_default(),
                        "ignoring unrecognized {}",
                        BACKEND_ENV
                    );
                    Backend::detect()
                }
                None => Backend::detect(),
            };
            tracing::debug!(backend = backend.as_str(), "selected NSV backend");
            backend
        })
    }

    fn detect() -> Self {
        if cfg!(feature = "parallel") {
            Backend::Parallel
        } else {
            Backend::Accelerated
        }
    }
}

/// Configuration options for NSV decoding.
///
/// # Examples
///
/// ```rust
/// use nsv::{Backend, NsvOptions};
///
/// let options = NsvOptions::new()
///     .with_backend(Backend::Parallel)
///     .with_parallel_threshold(64 * 1024);
/// assert_eq!(options.parallel_threshold, 64 * 1024);
/// ```
#[derive(Clone, Debug)]
pub struct NsvOptions {
    pub backend: Backend,
    pub parallel_threshold: usize,
}

impl Default for NsvOptions {
    fn default() -> Self {
        NsvOptions {
            backend: Backend::auto(),
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl NsvOptions {
    /// Creates default options (process-wide backend, 1 MiB parallel threshold).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the scanning backend.
    #[must_use]
    pub fn with_backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }

    /// Sets the input size in bytes from which [`Backend::Parallel`] splits work.
    ///
    /// Inputs shorter than this are decoded on the calling thread.
    #[must_use]
    pub fn with_parallel_threshold(mut self, bytes: usize) -> Self {
        self.parallel_threshold = bytes;
        self
    }
}
