//! Distance ordering of warps relative to a player.

use std::cmp::Ordering;

use crate::entities::Warp;
use crate::value_objects::{DimensionId, Position};

/// Euclidean distance between two points.
pub fn distance(a: &Position, b: &Position) -> f64 {
    a.distance_to(b)
}

/// Distance from `reference` to the warp, or `None` when the warp lives in
/// another dimension (cross-dimension distance is undefined).
pub fn distance_in_dimension(
    warp: &Warp,
    reference: &Position,
    dimension: &DimensionId,
) -> Option<f64> {
    (warp.dimension == *dimension).then(|| distance(reference, &warp.position))
}

/// Returns a new list: warps in `dimension` first, nearest first; warps in other
/// dimensions after them in their original relative order.
///
/// Relies on `sort_by` being stable, since the comparator reports two
/// other-dimension warps as equal whatever their coordinates.
pub fn sort_by_distance_from(
    warps: &[Warp],
    reference: &Position,
    dimension: &DimensionId,
) -> Vec<Warp> {
    let mut sorted = warps.to_vec();
    sorted.sort_by(|a, b| {
        let a_here = a.dimension == *dimension;
        let b_here = b.dimension == *dimension;
        match (a_here, b_here) {
            (true, true) => distance(reference, &a.position)
                .total_cmp(&distance(reference, &b.position)),
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => Ordering::Equal,
        }
    });
    sorted
}
