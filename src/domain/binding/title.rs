//! Title rebranding.

use std::borrow::Cow;

/// Replace every occurrence of `template_name` in a raw `<title>` body.
///
/// `raw_title` is the source text of the element and may carry character
/// references; the result is decoded text ready to be escaped on output.
/// Returns `None` when the title does not need to change.
pub fn rebrand(raw_title: &str, template_name: &str, business_name: &str) -> Option<String> {
    if template_name.is_empty() || template_name == business_name {
        return None;
    }

    let decoded: Cow<'_, str> = html_escape::decode_html_entities(raw_title);
    if !decoded.contains(template_name) {
        return None;
    }
    // A configured name that embeds the template name would otherwise grow on every pass.
    if business_name.contains(template_name) && decoded.contains(business_name) {
        return None;
    }

    Some(decoded.replace(template_name, business_name))
}
