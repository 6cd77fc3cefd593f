//! Vitrine Router - Isomorphic Path Matching
//!
//! A pattern-based path router whose matching algorithm is identical on the
//! server and on the client. The route table is immutable once built and
//! safe to share across concurrent requests; all per-request match state is
//! a returned value ([`ActiveRoute`]), never a mutable field.
//!
//! ## Pattern Syntax
//!
//! - `/products/` - static segments, matched exactly
//! - `/product/:id/` - `:name` matches exactly one non-empty path segment;
//!   the captured value is percent-decoded and nothing more
//! - `*` (or `.*`) - catch-all sentinel matching any path, conventionally
//!   registered last
//!
//! ## Example
//!
//! ```
//! use vitrine_router::RouteTable;
//!
//! let mut routes = RouteTable::new();
//! routes.add_route("/", "home").unwrap();
//! routes.add_route("/product/:id/", "detail").unwrap();
//! routes.add_route("*", "not-found").unwrap();
//!
//! let matched = routes.match_path("/product/abc/").unwrap();
//! assert_eq!(matched.handler, "detail");
//! assert_eq!(matched.params.get("id").map(String::as_str), Some("abc"));
//! ```

mod error;
mod navigator;
mod pattern;
mod table;

pub use error::RouterError;
pub use navigator::ClientNavigator;
pub use pattern::PathPattern;
pub use table::{ActiveRoute, Route, RouteMatch, RouteTable};
