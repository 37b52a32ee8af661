//! Derived metrics over the thematic concept networks.

use crate::models::{Book, ThematicNetwork, ThemeLink};
use serde::Serialize;

/// Summary metrics of one book's thematic network.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct NetworkSummary {
    pub book: Book,
    pub node_count: usize,
    pub link_count: usize,
    pub mean_link_weight: f64,
    /// Share of possible undirected node pairs that are linked, in percent.
    pub density: f64,
    pub strongest_link: ThemeLink,
}

/// Compute the summary metrics for a network.
pub fn summarize_network(network: &ThematicNetwork) -> NetworkSummary {
    let node_count = network.nodes.len();
    let link_count = network.links.len();

    let mean_link_weight =
        network.links.iter().map(|l| l.weight as f64).sum::<f64>() / link_count as f64;

    let possible_pairs = node_count * (node_count - 1) / 2;
    let density = link_count as f64 / possible_pairs as f64 * 100.0;

    let strongest_link = network
        .links
        .iter()
        .copied()
        .fold(network.links[0], |best, link| {
            if link.weight > best.weight {
                link
            } else {
                best
            }
        });

    NetworkSummary {
        book: network.book,
        node_count,
        link_count,
        mean_link_weight,
        density,
        strongest_link,
    }
}
