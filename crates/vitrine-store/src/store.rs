//! Core Store implementation.

use crate::{ListenerSet, Subscription};
use parking_lot::Mutex;
use std::sync::Arc;

/// A reducer-driven state container.
///
/// The store holds a single state snapshot of type `S` and replaces it
/// through a pure reducer `Fn(&S, &A) -> S` on every [`dispatch`]. It has
/// no knowledge of routing or rendering; the render pipeline creates one
/// store per request so that concurrent requests never share state.
///
/// [`dispatch`]: Store::dispatch
pub struct Store<S, A> {
	state: Mutex<S>,
	reducer: Box<dyn Fn(&S, &A) -> S + Send + Sync>,
	listeners: Arc<Mutex<ListenerSet>>,
}

impl<S, A> std::fmt::Debug for Store<S, A> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Store")
			.field("listeners", &self.listeners.lock().len())
			.finish()
	}
}

impl<S, A> Store<S, A>
where
	S: Clone,
{
	/// Creates a store from a pure reducer and an initial state.
	///
	/// The reducer must be total: it is called for every dispatched action
	/// and returns the next state. Actions it does not handle should return
	/// the state unchanged.
	pub fn new<R>(reducer: R, initial_state: S) -> Self
	where
		R: Fn(&S, &A) -> S + Send + Sync + 'static,
	{
		Self {
			state: Mutex::new(initial_state),
			reducer: Box::new(reducer),
			listeners: Arc::new(Mutex::new(ListenerSet::default())),
		}
	}

	/// Returns a clone of the current state snapshot.
	pub fn state(&self) -> S {
		self.state.lock().clone()
	}

	/// Runs `f` against a borrow of the current state and returns its result.
	///
	/// The state lock is held while `f` runs: `f` must not call back into
	/// this store (no `dispatch`, no `with_state`).
	pub fn with_state<R>(&self, f: impl FnOnce(&S) -> R) -> R {
		f(&self.state.lock())
	}

	/// Computes the next state through the reducer, installs it, and
	/// synchronously notifies every listener registered at the time of this
	/// call, in registration order.
	///
	/// No lock is held while listeners run, so a listener may dispatch
	/// again; the nested dispatch completes (including its notifications)
	/// before the remaining listeners of this pass are invoked. Listeners
	/// that subscribe or unsubscribe mid-pass affect subsequent dispatches
	/// only: the set notified by this pass was snapshotted up front.
	pub fn dispatch(&self, action: &A) {
		{
			let mut state = self.state.lock();
			let next = (self.reducer)(&state, action);
			*state = next;
		}

		let snapshot = self.listeners.lock().snapshot();
		tracing::trace!(listeners = snapshot.len(), "store dispatch");
		for listener in snapshot {
			listener();
		}
	}

	/// Registers `listener` to be called after every dispatch.
	///
	/// Returns a [`Subscription`] whose `unsubscribe` removes the listener;
	/// calling it more than once is a no-op.
	pub fn subscribe<F>(&self, listener: F) -> Subscription
	where
		F: Fn() + Send + Sync + 'static,
	{
		let id = self.listeners.lock().insert(Arc::new(listener));
		Subscription::new(id, Arc::downgrade(&self.listeners))
	}

	/// Returns the number of registered listeners.
	pub fn listener_count(&self) -> usize {
		self.listeners.lock().len()
	}
}
