use comrak::{markdown_to_html, ComrakOptions};
use log::trace;

pub fn to_html(src: &str) -> String {
    let opt = create_comrak_options();
    markdown_to_html(src, &opt)
}

fn create_comrak_options() -> ComrakOptions<'static> {
    let mut opt = ComrakOptions::default();

    // Extension options - the GFM set the portal editors produce
    opt.extension.strikethrough = true;
    opt.extension.table = true;
    opt.extension.autolink = true;
    opt.extension.tasklist = true;

    // Render options - raw HTML inside markdown is escaped, never passed through
    opt.render.unsafe_ = false;
    opt.render.escape = true;

    opt
}

/// Feedback and chat surfaces: strict profile, no styling, classes, or
/// embeds. Blank input renders as nothing; the caller owns any placeholder.
pub fn render_feedback(src: &str) -> String {
    if src.trim().is_empty() {
        return String::new();
    }
    trace!("rendering {} bytes of feedback markdown", src.len());
    htmlsafe::sanitize_html_strict(&to_html(src))
}

/// Guide and exercise bodies: default profile, styling attributes from the
/// authoring editor are kept.
pub fn render_guide(src: &str) -> String {
    if src.trim().is_empty() {
        return String::new();
    }
    htmlsafe::sanitize_html(&to_html(src))
}
