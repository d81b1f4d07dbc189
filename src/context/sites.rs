//! External site link supplier.

use serde::Serialize;
use tera::Context;

use super::RequestContext;

/// Fixed external site links, serialized under `SITES`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteLinks {
    pub searxng: &'static str,
}

/// The external sites linked from every page.
pub const SITES: SiteLinks = SiteLinks {
    searxng: "https://search.aino-spring.com",
};

/// Build the `SITES` context fragment. The request is ignored; these links do
/// not vary per visitor.
pub fn site_links(_request: &dyn RequestContext) -> Context {
    let mut context = Context::new();
    context.insert("SITES", &SITES);
    context
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::super::test_support::Visitor;
    use super::*;

    #[test]
    fn sites_matches_literal_table() {
        let context = site_links(&Visitor {
            authenticated: false,
        });

        assert_eq!(
            context.into_json()["SITES"],
            json!({"searxng": "https://search.aino-spring.com"})
        );
    }

    #[test]
    fn sites_is_invariant_across_visitors() {
        let anonymous = site_links(&Visitor {
            authenticated: false,
        });
        let authenticated = site_links(&Visitor {
            authenticated: true,
        });

        assert_eq!(anonymous.into_json(), authenticated.into_json());
    }
}
