//! The process-wide allow lists shared by both sanitization engines.
//!
//! These are fixed at compile time and never mutated; anything not listed
//! here is rejected.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

/// Tags permitted in every mode.
pub const ALLOWED_TAGS: &[&str] = &[
    "a", "p", "br", "strong", "em", "u", "s", "code", "pre", "blockquote", "ul", "ol", "li",
    "img", "h1", "h2", "h3", "h4", "span", "div", "hr",
];

/// Attributes permitted on any allowed tag. `style` and `class` are
/// additionally removed in strict mode.
pub const ALLOWED_ATTRS: &[&str] = &[
    "href", "src", "alt", "title", "target", "rel", "class", "style", "data-align", "data-type",
    "data-id", "aria-label",
];

/// The embeddable-frame tag, permitted only when embeds are explicitly
/// enabled (admin preview contexts).
pub const EMBED_TAG: &str = "iframe";

/// The dedicated attribute list for [`EMBED_TAG`]. Attributes outside this
/// list are dropped from embeds even when generally allowed.
pub const EMBED_ATTRS: &[&str] = &["src", "width", "height", "allow", "allowfullscreen", "loading"];

/// Attributes whose values carry URIs and must match [`struct@SAFE_URI`].
pub const URI_ATTRS: &[&str] = &["href", "src"];

lazy_static! {
    pub static ref ALLOWED_TAG_SET: HashSet<&'static str> =
        ALLOWED_TAGS.iter().copied().collect();
    pub static ref ALLOWED_ATTR_SET: HashSet<&'static str> =
        ALLOWED_ATTRS.iter().copied().collect();
    pub static ref EMBED_ATTR_SET: HashSet<&'static str> =
        EMBED_ATTRS.iter().copied().collect();
    /// Schemes and prefixes permitted in URI-bearing attribute values:
    /// web/mail/phone/ftp schemes, base64 raster-image data URIs,
    /// root-relative paths, and fragment anchors. Everything else fails.
    pub static ref SAFE_URI: Regex = Regex::new(
        r"(?i)^(https?:|mailto:|tel:|ftp:|data:image/(?:png|jpeg|gif|webp);base64,|/|#)"
    )
    .expect("Invalid SAFE_URI regex pattern");
}

/// Whether an (already lowercased) attribute name carries a URI.
pub fn is_uri_attr(name: &str) -> bool {
    URI_ATTRS.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_uri_accepts_expected_prefixes() {
        for uri in [
            "https://example.com/a",
            "http://example.com",
            "HTTPS://EXAMPLE.COM",
            "mailto:me@example.com",
            "tel:+49123456",
            "ftp://host/file",
            "data:image/png;base64,iVBORw0KGgo=",
            "data:image/webp;base64,AAAA",
            "/uploads/figure.png",
            "#section-2",
        ] {
            assert!(SAFE_URI.is_match(uri), "should accept {uri}");
        }
    }

    #[test]
    fn test_safe_uri_rejects_active_or_opaque_schemes() {
        for uri in [
            "javascript:alert(1)",
            "JaVaScRiPt:alert(1)",
            "vbscript:msgbox",
            "data:text/html;base64,PHNjcmlwdD4=",
            "data:image/svg+xml;base64,AAAA",
            "file:///etc/passwd",
            "relative/path.png",
            "",
        ] {
            assert!(!SAFE_URI.is_match(uri), "should reject {uri}");
        }
    }

    #[test]
    fn test_embed_attrs_are_a_narrow_subset() {
        assert!(EMBED_ATTR_SET.contains("src"));
        assert!(!EMBED_ATTR_SET.contains("class"));
        assert!(!EMBED_ATTR_SET.contains("style"));
    }
}
