use crate::mvi::Intent;

/// Table navigation. `total` is the number of visible rows at dispatch time.
#[derive(Debug, Clone, Copy)]
pub enum TableIntent {
    MoveUp { total: usize },
    MoveDown { total: usize },
    NextPage { total: usize },
    PrevPage { total: usize },
    /// Rows changed (fetch, delete, search); keep the selection in range.
    Clamp { total: usize },
    /// Jump back to the first row.
    Reset,
}

impl Intent for TableIntent {}
