//! Per-page template values.

use tera::Context;
use tracing::debug;

use super::RequestContext;

/// Build the per-page values for rendering `template`: a human-readable
/// `title` derived from the slug, the slug itself under `template`, and the
/// visitor's `authed` status.
pub fn page_values(template: &str, request: &dyn RequestContext) -> Context {
    let title = title_from_slug(template);
    let authed = request.is_authenticated();

    debug!(template, authed, "building page context");

    let mut context = Context::new();
    context.insert("title", &title);
    context.insert("template", template);
    context.insert("authed", &authed);
    context
}

/// Derive a display title from a template slug: `-` and `_` become spaces and
/// each word gets a leading capital (`"new-post"` becomes `"New Post"`).
fn title_from_slug(slug: &str) -> String {
    slug.split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            let Some(first) = chars.next() else {
                return String::new();
            };
            first.to_uppercase().chain(chars).collect::<String>()
        })
        .collect::<Vec<_>>()
        .join(" ")
}
