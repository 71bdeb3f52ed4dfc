//! One-shot rendezvous between a callback and a blocking caller.
//!
//! Driver-facing request APIs deliver their result through a callback that
//! may run on an internal driver thread. The caller that issued the request
//! wants to block until that callback has fired and then read the result.
//! [`rendezvous`] provides exactly that handoff, once per pair.

mod rendezvous;

pub use rendezvous::{Signal, Wait, rendezvous};
