//! Textual 9×9 grid rendering.

use diagoku_core::{Board, Cell};

/// Renders a board as a human-readable grid with 3×3 box separators.
///
/// Every cell shows its full candidate set, so partially reduced boards from
/// a replay stay legible; solved cells show a single digit. Column widths
/// adapt to the widest candidate set on the board.
#[must_use]
pub fn render(board: &Board) -> String {
    let width = 1 + Cell::ALL
        .into_iter()
        .map(|cell| board.candidates(cell).len())
        .max()
        .unwrap_or(1);
    let separator = vec!["-".repeat(width * 3); 3].join("+");

    let mut out = String::new();
    for row in 0..9 {
        for col in 0..9 {
            let candidates = board.candidates(Cell::new(row, col)).to_string();
            out.push_str(&format!("{candidates:^width$}"));
            if col == 2 || col == 5 {
                out.push('|');
            }
        }
        out.push('\n');
        if row == 2 || row == 5 {
            out.push_str(&separator);
            out.push('\n');
        }
    }
    out
}
