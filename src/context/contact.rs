//! Contact link supplier.

use serde::Serialize;
use tera::Context;

use super::RequestContext;

/// Fixed contact and service links, serialized under `CONTACT`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactLinks {
    pub github: &'static str,
    pub github_site: &'static str,
    pub instagram: &'static str,
    pub email: &'static str,
}

/// The site's contact links.
pub const CONTACT: ContactLinks = ContactLinks {
    github: "https://github.com/theaino",
    github_site: "https://github.com/theaino/aino_site",
    instagram: "https://instagram.com/aino.spring",
    email: "info@aino-spring.com",
};

/// Build the `CONTACT` context fragment. The request is ignored; these links
/// do not vary per visitor.
pub fn contact_links(_request: &dyn RequestContext) -> Context {
    let mut context = Context::new();
    context.insert("CONTACT", &CONTACT);
    context
}
