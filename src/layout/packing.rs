/// Number of left-to-right cooker slots a station provides.
pub const COOKER_SLOTS: usize = 4;

/// Items per row in the paired ingredient and condiment columns.
pub const ITEMS_PER_ROW: usize = 2;

/// Where an item sits inside a paired column.
///
/// Both row orientations are carried so renderers can draw from whichever
/// edge their coordinate system grows from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairedSlot {
    /// 0 = left, 1 = right.
    pub column: u32,
    /// 0 = bottom row.
    pub row_from_bottom: u32,
    /// 0 = top row.
    pub row_from_top: u32,
}

/// Number of rows a paired column needs to hold `count` items.
pub fn paired_rows(count: usize) -> usize {
    count.div_ceil(ITEMS_PER_ROW)
}

/// The slot of sequence index `index` (0-based) in a paired column holding
/// `count` items in total.
///
/// The column fills bottom-to-top, left slot before right: index 0 lands
/// bottom-left, index 1 bottom-right, index 2 on the row above, and so on.
/// An odd `count` leaves the topmost right slot empty. `index` must be below
/// `count`.
pub fn paired_slot(index: usize, count: usize) -> PairedSlot {
    let row = index / ITEMS_PER_ROW;
    let rows = paired_rows(count);
    PairedSlot {
        column: (index % ITEMS_PER_ROW) as u32,
        row_from_bottom: row as u32,
        row_from_top: (rows - 1 - row) as u32,
    }
}

/// The 1-based slot of cooker sequence index `index` in the left-to-right
/// cooker row. Slot numbering is sequential for every row width; capacity is
/// enforced by the planner, not here.
pub fn cooker_slot(index: usize) -> u32 {
    (index + 1) as u32
}
