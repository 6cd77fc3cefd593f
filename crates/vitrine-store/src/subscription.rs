//! Listener registry and subscription handles.

use parking_lot::Mutex;
use std::sync::{Arc, Weak};

/// Type alias for registered listener callbacks.
pub(crate) type Listener = Arc<dyn Fn() + Send + Sync>;

/// Ordered listener registry shared between a store and its subscriptions.
///
/// Listeners are kept in registration order; each carries the id it was
/// registered under so removal does not disturb the order of the rest.
#[derive(Default)]
pub(crate) struct ListenerSet {
	entries: Vec<(u64, Listener)>,
	next_id: u64,
}

impl ListenerSet {
	/// Registers a listener and returns its id.
	pub(crate) fn insert(&mut self, listener: Listener) -> u64 {
		let id = self.next_id;
		self.next_id += 1;
		self.entries.push((id, listener));
		id
	}

	/// Removes the listener with the given id. Removing an id that is no
	/// longer present is a no-op.
	pub(crate) fn remove(&mut self, id: u64) {
		self.entries.retain(|(entry_id, _)| *entry_id != id);
	}

	/// Clones the current listeners, in registration order.
	pub(crate) fn snapshot(&self) -> Vec<Listener> {
		self.entries
			.iter()
			.map(|(_, listener)| Arc::clone(listener))
			.collect()
	}

	/// Returns the number of registered listeners.
	pub(crate) fn len(&self) -> usize {
		self.entries.len()
	}
}

/// Handle returned by [`Store::subscribe`](crate::Store::subscribe).
///
/// Calling [`unsubscribe`](Subscription::unsubscribe) removes the listener;
/// calling it more than once is a no-op. Dropping the handle without
/// unsubscribing leaves the listener registered for the lifetime of the
/// store.
pub struct Subscription {
	id: u64,
	listeners: Weak<Mutex<ListenerSet>>,
}

impl Subscription {
	pub(crate) fn new(id: u64, listeners: Weak<Mutex<ListenerSet>>) -> Self {
		Self { id, listeners }
	}

	/// Removes the listener this subscription was created for.
	///
	/// Repeated calls are no-ops, as are calls after the store has been
	/// dropped.
	pub fn unsubscribe(&self) {
		if let Some(listeners) = self.listeners.upgrade() {
			listeners.lock().remove(self.id);
		}
	}
}

impl std::fmt::Debug for Subscription {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Subscription").field("id", &self.id).finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_insert_assigns_increasing_ids() {
		let mut set = ListenerSet::default();
		let a = set.insert(Arc::new(|| {}));
		let b = set.insert(Arc::new(|| {}));
		assert!(b > a);
		assert_eq!(set.len(), 2);
	}

	#[test]
	fn test_remove_is_idempotent() {
		let mut set = ListenerSet::default();
		let id = set.insert(Arc::new(|| {}));
		set.remove(id);
		set.remove(id);
		assert_eq!(set.len(), 0);
	}

	#[test]
	fn test_snapshot_preserves_order() {
		let order = Arc::new(Mutex::new(Vec::new()));
		let mut set = ListenerSet::default();
		for n in 0..3 {
			let order = Arc::clone(&order);
			set.insert(Arc::new(move || order.lock().push(n)));
		}
		for listener in set.snapshot() {
			listener();
		}
		assert_eq!(*order.lock(), vec![0, 1, 2]);
	}

	#[test]
	fn test_unsubscribe_after_store_dropped_is_noop() {
		let listeners = Arc::new(Mutex::new(ListenerSet::default()));
		let id = listeners.lock().insert(Arc::new(|| {}));
		let subscription = Subscription::new(id, Arc::downgrade(&listeners));
		drop(listeners);
		subscription.unsubscribe();
	}
}
