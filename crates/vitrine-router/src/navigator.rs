//! Client-mode navigation over a shared route table.

use crate::table::{ActiveRoute, RouteTable};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

/// Client-side navigator: owns the current [`ActiveRoute`] for a page
/// session and re-runs the shared table's matching algorithm on every
/// navigation.
///
/// Server and client behavior stay identical because both go through
/// [`RouteTable::navigate`]; the navigator adds only the stateful shell a
/// browser session needs (current match + change notification). On the
/// server this type is never used; each request calls `navigate` directly.
pub struct ClientNavigator<H> {
	routes: Arc<RouteTable<H>>,
	current: Mutex<ActiveRoute<H>>,
	listeners: Mutex<Vec<Arc<dyn Fn() + Send + Sync>>>,
}

impl<H: Clone> ClientNavigator<H> {
	/// Creates a navigator positioned at the root path.
	pub fn new(routes: Arc<RouteTable<H>>) -> Self {
		let current = routes.navigate("/", &HashMap::new());
		Self {
			routes,
			current: Mutex::new(current),
			listeners: Mutex::new(Vec::new()),
		}
	}

	/// Creates a navigator seeded with the server-rendered location, for
	/// hydration: the client starts exactly where the server left off.
	pub fn hydrate(
		routes: Arc<RouteTable<H>>,
		path: &str,
		query: &HashMap<String, String>,
	) -> Self {
		let current = routes.navigate(path, query);
		Self {
			routes,
			current: Mutex::new(current),
			listeners: Mutex::new(Vec::new()),
		}
	}

	/// Returns the current navigation state.
	pub fn current(&self) -> ActiveRoute<H> {
		self.current.lock().clone()
	}

	/// Navigates to a path, recomputing the match from scratch, and
	/// notifies listeners.
	pub fn push(&self, url: &str, query: &HashMap<String, String>) {
		let next = self.routes.navigate(url, query);
		*self.current.lock() = next;

		let snapshot: Vec<_> = self.listeners.lock().iter().map(Arc::clone).collect();
		for listener in snapshot {
			listener();
		}
	}

	/// Registers a navigation listener.
	///
	/// Listeners live for the page session; there is no unsubscription,
	/// matching the lifetime of a browser history listener.
	pub fn on_navigate<F>(&self, listener: F)
	where
		F: Fn() + Send + Sync + 'static,
	{
		self.listeners.lock().push(Arc::new(listener));
	}

	/// Wires browser back/forward navigation into this navigator.
	///
	/// Only meaningful in a browser runtime; on native targets this is a
	/// no-op so server-side code can call it unconditionally.
	#[cfg(not(target_arch = "wasm32"))]
	pub fn setup_history_listener(&self) {
		// No-op off the browser.
	}
}

impl<H: Clone + std::fmt::Debug> std::fmt::Debug for ClientNavigator<H> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ClientNavigator")
			.field("routes", &self.routes.route_count())
			.field("current", &self.current.lock().path)
			.finish()
	}
}
