use lazy_static::lazy_static;

use crate::options::SanitizeOptions;
#[cfg(not(feature = "tree"))]
use crate::pattern::PatternSanitizer;
#[cfg(feature = "tree")]
use crate::tree::TreeSanitizer;

/// A sanitization engine: pure `untrusted HTML -> safe HTML`.
///
/// Implementations never fail and never panic on input; unparseable markup
/// degrades to stripped output.
pub trait SanitizeEngine: Send + Sync {
    fn clean(&self, raw: &str) -> String;
}

/// Facade over the engine selected at construction time: the parser-backed
/// engine when the `tree` feature is compiled in, the regex fallback
/// otherwise. Cheap to share; safe to call from any thread.
pub struct Sanitizer {
    engine: Box<dyn SanitizeEngine>,
    opts: SanitizeOptions,
}

impl Sanitizer {
    pub fn new(opts: SanitizeOptions) -> Self {
        #[cfg(feature = "tree")]
        let engine: Box<dyn SanitizeEngine> = Box::new(TreeSanitizer::new(opts));
        #[cfg(not(feature = "tree"))]
        let engine: Box<dyn SanitizeEngine> = Box::new(PatternSanitizer::new(opts));
        Self { engine, opts }
    }

    /// Run a caller-supplied engine (tests, bespoke policies).
    pub fn with_engine(engine: Box<dyn SanitizeEngine>, opts: SanitizeOptions) -> Self {
        Self { engine, opts }
    }

    pub fn options(&self) -> SanitizeOptions {
        self.opts
    }

    pub fn clean(&self, raw: &str) -> String {
        self.engine.clean(raw)
    }
}

lazy_static! {
    static ref DEFAULT_SANITIZER: Sanitizer = Sanitizer::new(SanitizeOptions::DEFAULT);
    static ref STRICT_SANITIZER: Sanitizer = Sanitizer::new(SanitizeOptions::STRICT);
    static ref EMBED_SANITIZER: Sanitizer = Sanitizer::new(SanitizeOptions {
        strict: false,
        allow_embeds: true,
    });
}

/// Sanitize with the default profile (styles and classes kept, no embeds).
pub fn sanitize_html(raw: &str) -> String {
    DEFAULT_SANITIZER.clean(raw)
}

/// Sanitize with the strict profile (no styles, classes, or embeds).
pub fn sanitize_html_strict(raw: &str) -> String {
    STRICT_SANITIZER.clean(raw)
}

/// Sanitize with an arbitrary profile, reusing the cached engines.
pub fn sanitize_with_options(raw: &str, opts: SanitizeOptions) -> String {
    if opts.strict {
        STRICT_SANITIZER.clean(raw)
    } else if opts.embeds_enabled() {
        EMBED_SANITIZER.clean(raw)
    } else {
        DEFAULT_SANITIZER.clean(raw)
    }
}
