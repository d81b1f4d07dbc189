//! Static template context for aino-spring.com.
//!
//! The host web framework renders pages through Tera; this crate supplies the
//! context values every page needs: navigation entries, contact links,
//! external site links, and per-page title/authentication values. All
//! suppliers are pure functions of the incoming request — fresh values per
//! call, nothing shared, nothing cached.

pub mod context;

pub use context::{RequestContext, base_context};
