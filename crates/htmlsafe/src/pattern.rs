//! Regex-based fallback engine for parser-less environments.
//!
//! Two passes over the raw string: a strip pass removes outright dangerous
//! constructs (comments, script/style elements, event handlers, the
//! `javascript:` scheme), then an allow-list pass rewrites every `<...>`
//! fragment independently. Regexes cannot parse HTML soundly, so anything
//! the fragment grammar does not recognize is dropped rather than kept.
//!
//! The parser-backed [`crate::tree`] engine is the primary defense when
//! compiled in; this one exists for builds where pulling in an HTML parser
//! is not an option.
//!
//! One deliberate divergence between the engines: dedicated embed
//! attributes are kept verbatim here once the strip pass has run, while the
//! tree engine also applies the safe-URI pattern to the embed `src`. Both
//! refuse embeds unless explicitly enabled.

use lazy_static::lazy_static;
use log::debug;
use regex::{Captures, Regex};

use crate::options::SanitizeOptions;
use crate::policy;
use crate::sanitizer::SanitizeEngine;

lazy_static! {
    static ref COMMENT: Regex =
        Regex::new(r"(?s)<!--.*?-->").expect("Invalid COMMENT regex pattern");
    // Rust regexes have no backreferences, so script and style elements get
    // one pattern each instead of a shared `<(script|style)...</\1>`.
    static ref SCRIPT_EL: Regex =
        Regex::new(r"(?is)<script[^>]*>.*?</script\s*>").expect("Invalid SCRIPT_EL regex pattern");
    static ref STYLE_EL: Regex =
        Regex::new(r"(?is)<style[^>]*>.*?</style\s*>").expect("Invalid STYLE_EL regex pattern");
    static ref STRAY_CLOSER: Regex =
        Regex::new(r"(?i)</(?:script|style)\s*>").expect("Invalid STRAY_CLOSER regex pattern");
    static ref EVENT_DQ: Regex =
        Regex::new(r#"(?i)\son[a-z]+="[^"]*""#).expect("Invalid EVENT_DQ regex pattern");
    static ref EVENT_SQ: Regex =
        Regex::new(r"(?i)\son[a-z]+='[^']*'").expect("Invalid EVENT_SQ regex pattern");
    static ref EVENT_BARE: Regex =
        Regex::new(r#"(?i)\son[a-z]+=[^"'\s>]+"#).expect("Invalid EVENT_BARE regex pattern");
    static ref JS_SCHEME: Regex =
        Regex::new(r"(?i)javascript:").expect("Invalid JS_SCHEME regex pattern");
    static ref STYLE_DQ: Regex =
        Regex::new(r#"(?i)\sstyle="[^"]*""#).expect("Invalid STYLE_DQ regex pattern");
    static ref STYLE_SQ: Regex =
        Regex::new(r"(?i)\sstyle='[^']*'").expect("Invalid STYLE_SQ regex pattern");
    static ref TAG_FRAGMENT: Regex =
        Regex::new(r"<([^>]+)>").expect("Invalid TAG_FRAGMENT regex pattern");
    static ref TAG_PARTS: Regex =
        Regex::new(r"(?s)^(/)?\s*([a-zA-Z0-9-]+)(.*)$").expect("Invalid TAG_PARTS regex pattern");
    static ref ATTR: Regex =
        Regex::new(r#"(?i)([a-z0-9:-]+)=("[^"]*"|'[^']*'|[^\s"'>]+)?"#)
            .expect("Invalid ATTR regex pattern");
}

/// The regex fallback engine. Pure, no state beyond the profile.
pub struct PatternSanitizer {
    opts: SanitizeOptions,
}

impl PatternSanitizer {
    pub fn new(opts: SanitizeOptions) -> Self {
        Self { opts }
    }
}

impl SanitizeEngine for PatternSanitizer {
    fn clean(&self, raw: &str) -> String {
        if raw.is_empty() {
            return String::new();
        }
        let stripped = strip_pass(raw, self.opts.strict);
        allow_pass(&stripped, &self.opts)
    }
}

/// Pass 1: remove constructs that are dangerous wherever they appear.
fn strip_pass(html: &str, strict: bool) -> String {
    let mut out = COMMENT.replace_all(html, "").into_owned();
    out = SCRIPT_EL.replace_all(&out, "").into_owned();
    out = STYLE_EL.replace_all(&out, "").into_owned();
    out = STRAY_CLOSER.replace_all(&out, "").into_owned();
    out = EVENT_DQ.replace_all(&out, "").into_owned();
    out = EVENT_SQ.replace_all(&out, "").into_owned();
    out = EVENT_BARE.replace_all(&out, "").into_owned();
    out = JS_SCHEME.replace_all(&out, "").into_owned();
    if strict {
        out = STYLE_DQ.replace_all(&out, "").into_owned();
        out = STYLE_SQ.replace_all(&out, "").into_owned();
    }
    out
}

/// Pass 2: rewrite each `<...>` fragment against the allow list. Fragments
/// are handled independently, so nested disallowed tags unwrap one marker at
/// a time while their text content stays in place.
fn allow_pass(html: &str, opts: &SanitizeOptions) -> String {
    let embeds = opts.embeds_enabled();
    TAG_FRAGMENT
        .replace_all(html, |caps: &Captures| {
            rewrite_fragment(&caps[1], opts.strict, embeds)
        })
        .into_owned()
}

fn rewrite_fragment(inner: &str, strict: bool, embeds: bool) -> String {
    let Some(parts) = TAG_PARTS.captures(inner) else {
        // Not even tag-shaped. Fail closed.
        return String::new();
    };
    let closing = parts.get(1).is_some();
    let tag = parts[2].to_ascii_lowercase();
    let is_embed = embeds && tag == policy::EMBED_TAG;
    let allowed = policy::ALLOWED_TAG_SET.contains(tag.as_str());

    if closing {
        return if allowed || is_embed {
            format!("</{}>", tag)
        } else {
            String::new()
        };
    }
    if !allowed && !is_embed {
        // Unknown opening tag: drop the markers, keep the inner content.
        return String::new();
    }

    let attr_blob = parts.get(3).map_or("", |m| m.as_str());
    let mut attrs: Vec<String> = Vec::new();
    for cap in ATTR.captures_iter(attr_blob) {
        let name = cap[1].to_ascii_lowercase();
        let value = cap.get(2).map_or("", |m| m.as_str()).trim();

        if is_embed {
            // Embeds keep only their dedicated attribute list.
            if policy::EMBED_ATTR_SET.contains(name.as_str()) {
                attrs.push(format!("{}={}", name, value));
            }
            continue;
        }
        if !policy::ALLOWED_ATTR_SET.contains(name.as_str()) {
            continue;
        }
        if strict && (name == "class" || name == "style") {
            continue;
        }
        if policy::is_uri_attr(&name) {
            let bare: String = value.chars().filter(|c| !matches!(c, '"' | '\'')).collect();
            if !policy::SAFE_URI.is_match(&bare) {
                debug!("dropping unsafe {} value on <{}>", name, tag);
                continue;
            }
        }
        attrs.push(format!("{}={}", name, value));
    }

    if attrs.is_empty() {
        format!("<{}>", tag)
    } else {
        format!("<{} {}>", tag, attrs.join(" "))
    }
}
