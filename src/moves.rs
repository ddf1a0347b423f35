//! Move-list presentation for the history log.
//!
//! Labels are derived statelessly from (log length, cursor, sort order)
//! so the list can be tested without any rendering environment.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Display ordering of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    /// Oldest move first.
    Ascending,
    /// Newest move first.
    Descending,
}

impl SortOrder {
    /// Returns the opposite ordering.
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    /// Caption for the sort-toggle control: names the order a toggle
    /// would switch to, not the active one.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "Sort Descending",
            SortOrder::Descending => "Sort Ascending",
        }
    }
}

impl Default for SortOrder {
    fn default() -> Self {
        SortOrder::Ascending
    }
}

/// One entry of the rendered move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    number: usize,
    label: String,
    current: bool,
}

impl MoveEntry {
    /// The move number this entry jumps to. Stable under reordering.
    pub fn number(&self) -> usize {
        self.number
    }

    /// The display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// True for the entry at the cursor, which is shown as text
    /// rather than a jump control.
    pub fn is_current(&self) -> bool {
        self.current
    }
}

/// Builds the move list for a history log of `len` entries with the
/// cursor at `cursor`, ordered per `order`.
///
/// Reordering is a pure display transform: entry numbers keep their
/// original move index regardless of sort order.
#[instrument]
pub fn move_list(len: usize, cursor: usize, order: SortOrder) -> Vec<MoveEntry> {
    let mut entries: Vec<MoveEntry> = (0..len)
        .map(|number| MoveEntry {
            number,
            label: label_for(number, cursor),
            current: number == cursor,
        })
        .collect();

    if order == SortOrder::Descending {
        entries.reverse();
    }

    entries
}

/// Derives the label for one move entry.
///
/// Row and column come from the move number itself, not from the cell
/// the move changed.
fn label_for(number: usize, cursor: usize) -> String {
    let row = number / 3 + 1;
    let col = number % 3 + 1;

    if number == cursor {
        format!("You are at move #{number} (row: {row}, col: {col})")
    } else if number > 0 {
        format!("Go to move #{number} (row: {row}, col: {col})")
    } else {
        "Go to game start".to_string()
    }
}
