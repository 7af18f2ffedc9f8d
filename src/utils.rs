//! Rendering helpers for the command-line frontend.

use crate::labels::node_label;
use crate::problem::DistanceMatrix;
use itertools::Itertools;
use std::time::Duration;

/// Format a route as labeled hops: "A -> C -> B -> A".
pub fn format_route(route: &[usize]) -> String {
    route.iter().map(|&i| node_label(i)).join(" -> ")
}

/// Format a distance matrix as an aligned table with label headers.
pub fn format_matrix(matrix: &DistanceMatrix) -> String {
    let labels: Vec<String> = (0..matrix.len()).map(node_label).collect();
    let width = labels
        .iter()
        .map(String::len)
        .chain(
            matrix
                .rows()
                .iter()
                .flatten()
                .map(|d| d.to_string().len()),
        )
        .max()
        .unwrap_or(1)
        + 2;

    let mut out = String::new();

    out.push_str(&" ".repeat(width + 1));
    for label in &labels {
        out.push_str(&format!("{:>width$}", label));
    }
    out.push('\n');

    for (i, row) in matrix.rows().iter().enumerate() {
        out.push_str(&format!("{:>width$}:", labels[i]));
        for d in row {
            out.push_str(&format!("{:>width$}", d));
        }
        out.push('\n');
    }

    out
}

/// Format an elapsed run time in seconds, e.g. "0.0042 s".
pub fn format_seconds(duration: Duration) -> String {
    format!("{:.4} s", duration.as_secs_f64())
}
