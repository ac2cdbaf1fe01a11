//! Layer assignment by wave propagation.
//!
//! Every vertex starts in the queue at rank 0. The queue is drained one wave
//! at a time: each dequeued vertex takes the current rank and queues its
//! successors for the next wave. A vertex reached again in a later wave is
//! re-ranked, so the rank that sticks is the length of the longest path
//! ending at it and every edge points from a lower rank to a strictly higher
//! one.

use std::collections::VecDeque;

use tracing::debug;

use super::types::{Layer, Ranking};
use crate::error::{Error, Result};
use crate::graph::Graph;

/// Assign every vertex of an acyclic `graph` a rank.
///
/// Layers are returned in rank order. Within a layer, vertices appear in the
/// order of their final dequeue; alignment refines that order.
///
/// A vertex already queued for the upcoming wave is not queued again, which
/// leaves ranks untouched and keeps the queue linear in the edge count per
/// wave.
///
/// # Errors
///
/// [`Error::Cyclic`] if a cycle keeps the queue alive past the vertex count.
/// Run [`remove_cycles`](super::acyclic::remove_cycles) first.
pub fn rank_vertices(graph: &Graph) -> Result<Ranking> {
    let n = graph.len();
    let mut rank = vec![0usize; n];
    // Dequeue sequence number of each vertex's last dequeue.
    let mut last_seen = vec![0usize; n];
    // Wave each vertex is currently queued for.
    let mut queued_for: Vec<Option<usize>> = vec![Some(0); n];

    let mut queue: VecDeque<_> = graph.vertex_ids().collect();
    let mut current_rank = 0usize;
    let mut rank_len = queue.len();
    let mut tick = 0usize;

    while let Some(v) = queue.pop_front() {
        rank[v.index()] = current_rank;
        last_seen[v.index()] = tick;
        tick += 1;

        let next_wave = Some(current_rank + 1);
        for &w in graph.adj(v) {
            if queued_for[w.index()] != next_wave {
                queued_for[w.index()] = next_wave;
                queue.push_back(w);
            }
        }

        rank_len -= 1;
        if rank_len == 0 {
            current_rank += 1;
            rank_len = queue.len();
            if rank_len > 0 && current_rank >= n {
                return Err(Error::Cyclic {
                    waves: current_rank,
                });
            }
        }
    }

    let layer_count = rank.iter().copied().max().map_or(0, |r| r + 1);
    let mut order: Vec<_> = graph.vertex_ids().collect();
    order.sort_by_key(|v| last_seen[v.index()]);

    let mut layers: Vec<Layer> = vec![Vec::new(); layer_count];
    for v in order {
        layers[rank[v.index()]].push(v);
    }

    debug!(vertices = n, layers = layer_count, dequeues = tick, "ranked vertices");
    Ok(Ranking { layers, rank })
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_rank.rs"]
mod tests;
