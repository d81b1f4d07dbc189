//! Navigation menu supplier.

use serde::Serialize;
use tera::Context;
use tracing::debug;

use super::RequestContext;

/// URL of the nextcloud instance shown to authenticated visitors.
const NEXTCLOUD_URL: &str = "https://nextcloud.aino-spring.com";

/// One navigation menu item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    /// Display name shown in the menu.
    pub name: String,
    /// Link target: a route identifier or an absolute URL.
    pub url: String,
    /// Route aliases matched when highlighting the current page. Order is
    /// render order.
    pub urls: Vec<String>,
}

impl NavEntry {
    fn new(name: &str, url: &str, urls: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
            urls: urls.iter().map(|alias| (*alias).to_string()).collect(),
        }
    }
}

/// Build the `NAV_PAGES` context fragment.
///
/// Always `home` then `posts`, in render order. Authenticated visitors get a
/// `nextcloud` entry appended last.
pub fn nav_pages(request: &dyn RequestContext) -> Context {
    let mut pages = vec![
        NavEntry::new("home", "home", &["home"]),
        NavEntry::new("posts", "posts", &["post", "posts"]),
    ];

    if request.is_authenticated() {
        pages.push(NavEntry::new("nextcloud", NEXTCLOUD_URL, &[]));
    }

    debug!(entries = pages.len(), "built navigation menu");

    let mut context = Context::new();
    context.insert("NAV_PAGES", &pages);
    context
}
