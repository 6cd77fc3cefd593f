//! Vitrine Store - Unidirectional State Container
//!
//! A minimal reducer-driven store: state is replaced (never mutated in
//! place) by a pure reducer, and subscribers are notified synchronously
//! after every dispatch.
//!
//! ## Notification Contract
//!
//! - Every listener registered at the moment `dispatch` is called is
//!   invoked exactly once per dispatch, in registration order.
//! - Listeners receive no arguments; they read the store themselves.
//! - A listener may dispatch again: the nested dispatch (including its own
//!   notifications) completes before the outer pass resumes (call-stack
//!   discipline, not a queue).
//! - Unsubscribing during a notification pass does not affect listeners
//!   already snapshotted for that pass.
//!
//! ## Example
//!
//! ```
//! use vitrine_store::Store;
//!
//! #[derive(Clone)]
//! struct Counter(i64);
//!
//! enum Action {
//!     Increment,
//!     Add(i64),
//! }
//!
//! let store = Store::new(
//!     |state: &Counter, action: &Action| match action {
//!         Action::Increment => Counter(state.0 + 1),
//!         Action::Add(n) => Counter(state.0 + n),
//!     },
//!     Counter(0),
//! );
//!
//! store.dispatch(&Action::Increment);
//! store.dispatch(&Action::Add(41));
//! assert_eq!(store.state().0, 42);
//! ```

mod store;
mod subscription;

pub use store::Store;
pub use subscription::Subscription;

pub(crate) use subscription::ListenerSet;
