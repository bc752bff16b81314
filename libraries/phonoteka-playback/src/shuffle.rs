//! Collection-balanced shuffle algorithms
//!
//! A plain Fisher-Yates shuffle over the whole archive tends to cluster
//! tracks from the large collections. The balanced shuffle interleaves
//! collections so the same one never plays twice in a row while any
//! alternative remains, and the reliability-aware variant routes around
//! collections with high failure rates first.

use std::collections::{BTreeSet, HashMap};

use rand::seq::SliceRandom;
use rand::thread_rng;

use phonoteka_core::types::{CollectionId, Track};

use crate::reliability::ReliabilityTracker;

/// Shuffle tracks so consecutive entries come from different collections
///
/// Produces a fresh permutation of the input. Within each collection the
/// order is uniformly random; across collections the output rotates so
/// that two adjacent tracks share a collection only when a single
/// collection has tracks left to place. A single-collection input
/// degrades to a plain in-collection shuffle.
pub fn shuffle_balanced(tracks: &[Track]) -> Vec<Track> {
    if tracks.len() <= 1 {
        return tracks.to_vec();
    }

    let mut rng = thread_rng();

    // Partition by collection and randomize within each partition
    let mut partitions: HashMap<CollectionId, Vec<Track>> = HashMap::new();
    for track in tracks {
        partitions
            .entry(track.collection_id.clone())
            .or_default()
            .push(track.clone());
    }
    for partition in partitions.values_mut() {
        partition.shuffle(&mut rng);
    }

    // Working set of collections with tracks left to place
    let mut working: Vec<CollectionId> = partitions.keys().cloned().collect();
    working.shuffle(&mut rng);

    let mut cursors: HashMap<CollectionId, usize> = HashMap::new();
    let mut output = Vec::with_capacity(tracks.len());
    let mut last_collection: Option<CollectionId> = None;

    while !working.is_empty() {
        // Rotate so the previous collection cannot come up again unless
        // it is the only one left
        if working.len() > 1 {
            let held_back = last_collection
                .as_ref()
                .and_then(|last| working.iter().position(|c| c == last))
                .map(|position| working.remove(position));
            working.shuffle(&mut rng);
            if let Some(last) = held_back {
                working.push(last);
            }
        }

        let current = working[0].clone();
        let partition = &partitions[&current];
        let cursor = cursors.entry(current.clone()).or_insert(0);

        output.push(partition[*cursor].clone());
        *cursor += 1;

        if *cursor >= partition.len() {
            working.remove(0);
        }
        last_collection = Some(current);
    }

    output
}

/// Balanced shuffle that skips collections with high failure rates
///
/// Tracks whose collection the tracker marks degraded are dropped before
/// shuffling. If that leaves nothing, the full input is shuffled instead:
/// a playlist of unreliable tracks beats no playlist at all.
pub fn shuffle_reliable(tracks: &[Track], tracker: &ReliabilityTracker) -> Vec<Track> {
    let mut excluded: BTreeSet<CollectionId> = BTreeSet::new();
    let mut candidates = Vec::with_capacity(tracks.len());

    for track in tracks {
        if tracker.is_degraded(&track.collection_id) {
            excluded.insert(track.collection_id.clone());
        } else {
            candidates.push(track.clone());
        }
    }

    for collection in &excluded {
        tracing::info!("Excluding high-error collection {} from shuffle", collection);
    }

    if candidates.is_empty() && !tracks.is_empty() {
        tracing::info!("Every collection exceeds the error threshold, shuffling all tracks");
        return shuffle_balanced(tracks);
    }

    shuffle_balanced(&candidates)
}
