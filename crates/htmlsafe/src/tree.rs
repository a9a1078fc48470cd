//! Parser-backed engine built on ammonia.
//!
//! Same policy tables as the fallback, enforced through a real HTML parser,
//! so adversarially nested or malformed markup is normalized instead of
//! pattern-matched. This is the default engine.

use std::collections::HashMap;

use ammonia::{Builder, UrlRelative};

use crate::options::SanitizeOptions;
use crate::policy;
use crate::sanitizer::SanitizeEngine;

pub struct TreeSanitizer {
    builder: Builder<'static>,
}

impl TreeSanitizer {
    pub fn new(opts: SanitizeOptions) -> Self {
        let strict = opts.strict;
        let mut builder = Builder::default();
        builder
            .tags(policy::ALLOWED_TAGS.iter().copied().collect())
            // Start from a clean slate so ammonia's own per-tag defaults
            // (hreflang and friends) cannot widen the policy.
            .tag_attributes(HashMap::new())
            .generic_attributes(
                policy::ALLOWED_ATTRS
                    .iter()
                    .copied()
                    .filter(|a| !strict || (*a != "class" && *a != "style"))
                    .collect(),
            )
            // `data` stays broad here; the attribute filter below narrows it
            // to base64 raster images per the safe URI pattern.
            .url_schemes(
                ["http", "https", "mailto", "tel", "ftp", "data"]
                    .into_iter()
                    .collect(),
            )
            .url_relative(UrlRelative::PassThrough)
            // `rel` is caller-controlled, so ammonia must not also manage it.
            .link_rel(None)
            .attribute_filter(|tag, attr, value| {
                // The serializer leaves `<` unescaped inside attribute
                // values, so markup smuggled into a value would reach the
                // output verbatim. Fail closed.
                if value.contains('<') {
                    return None;
                }
                // Embeds keep only their dedicated attribute list; the
                // generic allow list does not apply to them.
                if tag == policy::EMBED_TAG && !policy::EMBED_ATTR_SET.contains(attr) {
                    return None;
                }
                if policy::is_uri_attr(attr) && !policy::SAFE_URI.is_match(value) {
                    return None;
                }
                Some(value.into())
            });
        if opts.embeds_enabled() {
            builder.add_tags([policy::EMBED_TAG]);
            builder.add_tag_attributes(policy::EMBED_TAG, policy::EMBED_ATTRS.iter().copied());
        }
        Self { builder }
    }
}

impl SanitizeEngine for TreeSanitizer {
    fn clean(&self, raw: &str) -> String {
        if raw.is_empty() {
            return String::new();
        }
        self.builder.clean(raw).to_string()
    }
}
