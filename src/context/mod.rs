//! Template context suppliers.
//!
//! Each supplier returns a [`tera::Context`] fragment that the host merges
//! into the render context by key union. Keys contributed: `NAV_PAGES`,
//! `CONTACT`, `SITES`, plus the per-page `title`/`template`/`authed` values.

pub mod contact;
pub mod nav;
pub mod page;
pub mod sites;

pub use contact::{CONTACT, ContactLinks, contact_links};
pub use nav::{NavEntry, nav_pages};
pub use page::page_values;
pub use sites::{SITES, SiteLinks, site_links};

use tera::Context;

/// Authentication capability of the incoming request.
///
/// Sessions and credentials belong to the host; suppliers only consume the
/// resolved status.
pub trait RequestContext {
    /// Whether the current visitor is authenticated.
    fn is_authenticated(&self) -> bool;
}

/// Assemble the full base context for rendering `template`: per-page values
/// plus every supplier's fragment.
///
/// Supplier keys are disjoint. A collision between suppliers is a host
/// configuration bug; which value survives is unspecified.
pub fn base_context(template: &str, request: &dyn RequestContext) -> Context {
    let mut context = page::page_values(template, request);
    context.extend(nav::nav_pages(request));
    context.extend(contact::contact_links(request));
    context.extend(sites::site_links(request));
    context
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::RequestContext;

    /// Minimal request double carrying only the authentication flag.
    pub struct Visitor {
        pub authenticated: bool,
    }

    impl RequestContext for Visitor {
        fn is_authenticated(&self) -> bool {
            self.authenticated
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::Visitor;
    use super::*;

    #[test]
    fn base_context_carries_all_supplier_keys() {
        let context = base_context("home", &Visitor {
            authenticated: false,
        });
        let json = context.into_json();

        for key in ["NAV_PAGES", "CONTACT", "SITES", "title", "template", "authed"] {
            assert!(json.get(key).is_some(), "missing key: {key}");
        }
    }

    #[test]
    fn base_context_reflects_authentication() {
        let json = base_context("home", &Visitor {
            authenticated: true,
        })
        .into_json();

        assert_eq!(json["authed"], serde_json::json!(true));
        assert_eq!(json["NAV_PAGES"].as_array().map(Vec::len), Some(3));
    }
}
