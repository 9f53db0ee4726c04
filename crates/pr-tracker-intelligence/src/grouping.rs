// ABOUTME: Explicit hash-partitioning of workout sets by exercise title
// ABOUTME: Each partition is stable-sorted by timestamp so ties keep input order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pr_tracker_core::models::WorkoutSet;
use std::collections::{BTreeMap, HashMap};

/// Partition sets by exercise, each partition in ascending timestamp order.
///
/// Partitions come back keyed in ascending title order so every caller
/// produces deterministic output. Sets with equal timestamps keep the order in
/// which they were supplied.
#[must_use]
pub fn partition_by_exercise<'a, I>(sets: I) -> BTreeMap<&'a str, Vec<&'a WorkoutSet>>
where
    I: IntoIterator<Item = &'a WorkoutSet>,
{
    let mut partitions: HashMap<&'a str, Vec<&'a WorkoutSet>> = HashMap::new();
    for set in sets {
        partitions
            .entry(set.exercise_title())
            .or_default()
            .push(set);
    }

    partitions
        .into_iter()
        .map(|(title, mut group)| {
            // sort_by_key is stable
            group.sort_by_key(|set| set.timestamp());
            (title, group)
        })
        .collect()
}
