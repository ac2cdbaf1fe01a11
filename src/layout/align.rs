//! Single-pass barycenter alignment.
//!
//! Layers are processed top-down. A vertex in column `c` with predecessors
//! `p1..pk` gets `x = (c + x(p1) + .. + x(pk)) / k`; a vertex without
//! predecessors keeps `x = c`. The column sits in the numerator but not the
//! divisor, which biases each vertex toward its starting column. Each layer
//! is then stably sorted by `x`.
//!
//! Predecessors come from `adj_inverted` as supplied by the caller; call
//! [`Graph::derive_inverted`] after the last change to `adj`.

use tracing::debug;

use super::rank::rank_vertices;
use super::types::{Alignment, Ranking};
use crate::error::{Error, Result};
use crate::graph::Graph;

/// Position every vertex within its layer and reorder the layers to match.
///
/// `ranking` is computed with [`rank_vertices`] when not supplied. A
/// predecessor without a position yet (one that is not in an earlier layer)
/// contributes `0.0`.
///
/// # Errors
///
/// [`Error::UnknownVertex`] if `ranking` names a vertex outside `graph`, and
/// any error from [`rank_vertices`].
pub fn align_vertices(graph: &Graph, ranking: Option<Ranking>) -> Result<Alignment> {
    let mut ranking = match ranking {
        Some(r) => r,
        None => rank_vertices(graph)?,
    };

    let n = graph.len();
    if let Some(&v) = ranking.layers.iter().flatten().find(|v| v.index() >= n) {
        return Err(Error::UnknownVertex(v.index()));
    }

    let mut x = vec![0.0f64; n];
    for layer in ranking.layers.iter_mut() {
        for (column, &v) in layer.iter().enumerate() {
            let preds = graph.adj_inverted(v);
            let mut sum = column as f64;
            if preds.is_empty() {
                x[v.index()] = sum;
                continue;
            }
            for p in preds {
                sum += x[p.index()];
            }
            x[v.index()] = sum / preds.len() as f64;
        }
        layer.sort_by(|a, b| x[a.index()].total_cmp(&x[b.index()]));
    }

    debug!(layers = ranking.layers.len(), "aligned layers");
    Ok(Alignment { ranking, x })
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_align.rs"]
mod tests;
