//! Shuffle, restore and rebuild
//!
//! All three relink the ring from scratch: clear it, reinsert the tracks in the
//! wanted order, then find the previously current track again by ID.

use super::PlaylistRing;
use crate::model::Track;
use rand::Rng;

impl PlaylistRing {
    /// Randomise the ring order using the thread-local generator.
    ///
    /// See [`PlaylistRing::shuffle_with`].
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::rng());
    }

    /// Randomise the ring order with a Fisher-Yates pass driven by `rng`.
    ///
    /// The current track stays current. The restore snapshot keeps the order
    /// from before the first shuffle, so shuffling twice and restoring once
    /// still returns to the unshuffled order. Rings of zero or one track are
    /// left alone.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.len <= 1 {
            return;
        }

        let mut order = self.all_tracks();
        for i in (1..order.len()).rev() {
            let j = rng.random_range(0..=i);
            order.swap(i, j);
        }

        // Set before relinking so the reinserts leave the snapshot alone
        self.shuffled = true;
        self.relink(order);

        log::debug!("Shuffled {} tracks", self.len);
    }

    /// Go back to the order from before shuffling.
    ///
    /// Does nothing unless the ring is shuffled and a snapshot exists. Tracks
    /// inserted or removed while shuffled are not reflected in the snapshot,
    /// so restoring brings back exactly the pre-shuffle sequence.
    pub fn restore_order(&mut self) {
        if !self.shuffled || self.original_order.is_empty() {
            return;
        }

        let order = self.original_order.clone();
        self.relink(order);
        self.shuffled = false;

        log::debug!("Restored original order of {} tracks", self.len);
    }

    /// Replace the ring contents with a fresh track list from upstream.
    ///
    /// Shuffle state is dropped and the snapshot follows the new list. If the
    /// previously current track is still present it stays current, otherwise
    /// the new head is.
    pub fn rebuild<I: IntoIterator<Item = Track>>(&mut self, tracks: I) {
        let current_id = self.current().map(|t| t.id.clone());

        self.reset();
        self.extend(tracks);

        if let Some(id) = current_id {
            self.select_by_id(&id);
        }

        log::debug!("Rebuilt ring with {} tracks", self.len);
    }

    /// Clear and reinsert `tracks`, keeping the current track by ID.
    ///
    /// If it has gone, current is wherever the reinserts left it (the head).
    fn relink(&mut self, tracks: Vec<Track>) {
        let current_id = self.current().map(|t| t.id.clone());

        self.clear();
        for track in tracks {
            self.insert(track);
        }

        if let Some(id) = current_id {
            self.select_by_id(&id);
        }
    }
}
