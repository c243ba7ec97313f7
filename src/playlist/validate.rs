//! Structural check of the ring links
//!
//! Walks the arena and reports the first broken invariant. Used by the tests
//! after every mutation, and available to callers that want to assert a ring
//! they built by hand is sound.

use super::PlaylistRing;
use anyhow::{bail, Result};

impl PlaylistRing {
    /// Verify emptiness, ring closure in both directions, link symmetry and
    /// that current is reachable from head
    pub fn check_links(&self) -> Result<()> {
        let live = self.slots.iter().filter(|s| s.is_some()).count();
        if live != self.len {
            bail!("{} live nodes but len is {}", live, self.len);
        }
        if live + self.free.len() != self.slots.len() {
            bail!(
                "{} live + {} free slots do not cover {} slots",
                live,
                self.free.len(),
                self.slots.len()
            );
        }

        let Some(head) = self.head else {
            if self.len != 0 || self.current.is_some() {
                bail!("ring has no head but len {} / current {:?}", self.len, self.current);
            }
            return Ok(());
        };
        let Some(current) = self.current else {
            bail!("non-empty ring has no current node");
        };

        let mut cursor = head;
        let mut current_seen = false;
        for step in 0..self.len {
            let node = self.node(cursor);
            if self.node(node.next).prev != cursor {
                bail!("node {} -> next {} does not link back", cursor, node.next);
            }
            if self.node(node.prev).next != cursor {
                bail!("node {} -> prev {} does not link forward", cursor, node.prev);
            }
            if cursor == current {
                current_seen = true;
            }
            cursor = node.next;
            if cursor == head && step + 1 != self.len {
                bail!("forward walk closed after {} of {} nodes", step + 1, self.len);
            }
        }
        if cursor != head {
            bail!("forward walk of {} nodes did not return to head", self.len);
        }

        let mut cursor = head;
        for _ in 0..self.len {
            cursor = self.node(cursor).prev;
        }
        if cursor != head {
            bail!("backward walk of {} nodes did not return to head", self.len);
        }

        if !current_seen {
            bail!("current node {} is not reachable from head", current);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::model::Track;
    use crate::playlist::PlaylistRing;

    fn ring_of(n: usize) -> PlaylistRing {
        (0..n)
            .map(|i| Track::new(i.to_string(), "T", "A", 1, "file:///x"))
            .collect()
    }

    #[test]
    fn test_sound_rings_pass() {
        for n in 0..5 {
            ring_of(n).check_links().unwrap();
        }
    }

    #[test]
    fn test_detects_broken_back_link() {
        let mut ring = ring_of(3);
        if let Some(node) = ring.slots[1].as_mut() {
            node.prev = 1;
        }
        assert!(ring.check_links().is_err());
    }

    #[test]
    fn test_detects_wrong_len() {
        let mut ring = ring_of(3);
        ring.len = 2;
        assert!(ring.check_links().is_err());
    }
}
