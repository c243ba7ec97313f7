//! Circular doubly linked playlist
//!
//! [`PlaylistRing`] holds the tracks of one playback session as a ring of
//! nodes, so that stepping past either end wraps around without any special
//! casing in the player. Nodes live in an arena and link to each other by slot
//! index; the arena owns every node and `prev` links are only traversal aids.
//!
//! The ring is a plain single-owner value. It does no locking; callers that
//! share it must serialise access themselves.

mod query;
mod ring;
mod shuffle;
mod validate;

pub use ring::{Direction, Iter, PlaylistRing};
