//! Seat grid generation.
//!
//! Pure construction of the rectangular seat layout; occupancy is layered on
//! top by the views from the seat status map.

/// A single cell of the seat grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seat {
    /// Deterministic identifier, e.g. "A1-1". Doubles as the board key.
    pub number: String,
    /// Short label shown inside the cell.
    pub display_name: String,
}

/// Generate `rows` ordered rows of `cols` seats each. Identifiers are
/// `{prefix}{row}-{col}` with 1-based coordinates. Zero rows or columns
/// produce an empty grid.
pub fn generate(rows: usize, cols: usize, prefix: &str) -> Vec<Vec<Seat>> {
    (1..=rows)
        .map(|row| {
            (1..=cols)
                .map(|col| Seat {
                    number: format!("{}{}-{}", prefix, row, col),
                    display_name: format!("{}-{}", row, col),
                })
                .collect()
        })
        .collect()
}
