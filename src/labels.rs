//! Display labels for node indices.
//!
//! The core works purely on indices; these helpers give the presentation
//! layer the bijective base-26 labels A, B, ..., Z, AA, AB, ...

/// Label for a node index: 0 -> "A", 25 -> "Z", 26 -> "AA", 51 -> "AZ".
pub fn node_label(index: usize) -> String {
    let mut label = String::new();
    let mut n = index as i64;

    loop {
        label.insert(0, (b'A' + (n % 26) as u8) as char);
        n = n / 26 - 1;
        if n < 0 {
            break;
        }
    }

    label
}

/// Inverse of [`node_label`]. Returns `None` for anything that is not a
/// non-empty uppercase ASCII label.
pub fn label_index(label: &str) -> Option<usize> {
    if label.is_empty() {
        return None;
    }

    let mut value = 0usize;
    for c in label.chars() {
        if !c.is_ascii_uppercase() {
            return None;
        }
        value = value * 26 + (c as usize - 'A' as usize + 1);
    }

    Some(value - 1)
}

/// Map a route of indices to its display labels.
pub fn route_labels(route: &[usize]) -> Vec<String> {
    route.iter().map(|&i| node_label(i)).collect()
}
