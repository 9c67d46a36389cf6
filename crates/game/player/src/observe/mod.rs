//! Observable state primitives.
//!
//! Push: [`Observable`] and [`ObservableList`] hold a value plus a listener
//! registry and notify synchronously on every effective write. Outside code
//! only ever receives a [`Watch`], which can subscribe but not write.
//!
//! Pull: every write bumps a version counter. [`Memo`] and [`RateLimited`]
//! key their cached value on those versions, so derived values recompute
//! exactly when a dependency changed. [`PlayerFields`] records which player
//! fields changed since the last drain.
mod cell;
mod fields;
mod list;
mod listeners;
mod memo;

pub use cell::Observable;
pub use fields::PlayerFields;
pub use list::ObservableList;
pub use listeners::{Listeners, SubscriptionId, Watch};
pub use memo::{Memo, RateLimited, Tick};
