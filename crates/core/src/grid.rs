//! Grid placement engine for the media-grid layout editor.
//!
//! This module lives in `core` (zero internal deps) so it can be used by
//! both the API/repository layer and any future CLI or import tooling.
//!
//! The logical grid is a fixed 6x4 matrix of 1-based cells. Placement
//! state is never updated incrementally: every mutation rebuilds the
//! occupancy matrix from the full item list. The grid is small enough
//! that the O(rows x cols x items) rebuild is irrelevant.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::DbId;

// ---------------------------------------------------------------------------
// Grid dimensions
// ---------------------------------------------------------------------------

/// Number of columns in the logical grid.
pub const GRID_COLS: u8 = 6;

/// Number of rows in the logical grid.
pub const GRID_ROWS: u8 = 4;

/// Total number of cells in the logical grid.
pub const GRID_CELLS: usize = (GRID_COLS as usize) * (GRID_ROWS as usize);

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors produced by placement and editing operations.
///
/// The `Display` strings for [`GridError::OutOfBounds`] and
/// [`GridError::Occupied`] are surfaced verbatim to the admin UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("Invalid Position")]
    OutOfBounds,

    #[error("Position Occupied")]
    Occupied,

    #[error("No Available Position")]
    GridFull,

    #[error("Unknown item {0}")]
    UnknownItem(Uuid),

    #[error("Duplicate item {0}")]
    DuplicateItem(Uuid),
}

// ---------------------------------------------------------------------------
// Placement
// ---------------------------------------------------------------------------

/// The rectangle of cells an item occupies, in 1-based grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub start_col: u8,
    pub start_row: u8,
    pub col_span: u8,
    pub row_span: u8,
}

impl Placement {
    /// Placement of a `col_span` x `row_span` rectangle at (col, row).
    pub fn new(start_col: u8, start_row: u8, col_span: u8, row_span: u8) -> Self {
        Placement {
            start_col,
            start_row,
            col_span,
            row_span,
        }
    }

    /// Last column covered by this placement. Computed widened so a
    /// degenerate zero span cannot underflow.
    fn col_end(&self) -> i32 {
        i32::from(self.start_col) + i32::from(self.col_span) - 1
    }

    /// Last row covered by this placement.
    fn row_end(&self) -> i32 {
        i32::from(self.start_row) + i32::from(self.row_span) - 1
    }

    /// Whether the whole rectangle lies within the grid and both spans
    /// are at least 1.
    pub fn in_bounds(&self) -> bool {
        self.start_col >= 1
            && self.start_row >= 1
            && self.col_span >= 1
            && self.row_span >= 1
            && self.col_end() <= i32::from(GRID_COLS)
            && self.row_end() <= i32::from(GRID_ROWS)
    }

    /// Whether two placements cover at least one common cell.
    pub fn overlaps(&self, other: &Placement) -> bool {
        i32::from(self.start_col) <= other.col_end()
            && i32::from(other.start_col) <= self.col_end()
            && i32::from(self.start_row) <= other.row_end()
            && i32::from(other.start_row) <= self.row_end()
    }

    /// Iterate the `(col, row)` cells covered by this placement, clipped
    /// to the grid. Degenerate placements yield no cells.
    pub fn cells(&self) -> impl Iterator<Item = (u8, u8)> {
        let start_col = self.start_col.max(1);
        let start_row = self.start_row.max(1);
        let col_end = self.col_end().min(i32::from(GRID_COLS)).max(0) as u8;
        let row_end = self.row_end().min(i32::from(GRID_ROWS)).max(0) as u8;
        (start_row..=row_end)
            .flat_map(move |row| (start_col..=col_end).map(move |col| (col, row)))
    }
}

// ---------------------------------------------------------------------------
// LayoutItem
// ---------------------------------------------------------------------------

/// One placed media reference in a layout.
///
/// `placement` is the base coordinate set; `sm` and `md` are optional
/// per-breakpoint overrides on the same 6x4 grid. The item array is
/// persisted wholesale as JSONB, so the struct doubles as the wire and
/// storage representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutItem {
    pub id: Uuid,
    pub media_id: DbId,
    pub placement: Placement,
    #[serde(default)]
    pub sm: Option<Placement>,
    #[serde(default)]
    pub md: Option<Placement>,
    #[serde(default)]
    pub link_href: Option<String>,
    #[serde(default)]
    pub aria_label: Option<String>,
}

impl LayoutItem {
    /// New item with a fresh identifier and no overrides.
    pub fn new(media_id: DbId, placement: Placement) -> Self {
        LayoutItem {
            id: Uuid::new_v4(),
            media_id,
            placement,
            sm: None,
            md: None,
            link_href: None,
            aria_label: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Occupancy matrix
// ---------------------------------------------------------------------------

/// The derived 6x4 matrix marking which item (if any) owns each cell.
///
/// Always rebuilt from the full item list; never patched in place.
#[derive(Debug, Clone, Default)]
pub struct Occupancy {
    /// `cells[row - 1][col - 1]`, 1-based coordinates at the API surface.
    cells: [[Option<Uuid>; GRID_COLS as usize]; GRID_ROWS as usize],
}

impl Occupancy {
    /// An occupancy matrix with every cell unoccupied.
    pub fn empty() -> Self {
        Occupancy::default()
    }

    /// Rebuild the matrix from scratch: reset all cells, then mark each
    /// item's rectangle with the item's identifier.
    ///
    /// When items overlap (possible after a concurrent-editor save), the
    /// later item in the list wins the contested cells.
    pub fn recompute(items: &[LayoutItem]) -> Self {
        let mut occ = Occupancy::empty();
        for item in items {
            for (col, row) in item.placement.cells() {
                occ.cells[usize::from(row) - 1][usize::from(col) - 1] = Some(item.id);
            }
        }
        occ
    }

    /// The item occupying the given 1-based cell, if any. Out-of-range
    /// coordinates read as unoccupied.
    pub fn cell(&self, col: u8, row: u8) -> Option<Uuid> {
        if col < 1 || col > GRID_COLS || row < 1 || row > GRID_ROWS {
            return None;
        }
        self.cells[usize::from(row) - 1][usize::from(col) - 1]
    }

    /// Whether every cell of `placement` is unoccupied, treating cells
    /// owned by `ignore` as free. Rectangles outside the grid are never
    /// free.
    pub fn is_rect_free(&self, placement: &Placement, ignore: Option<Uuid>) -> bool {
        if !placement.in_bounds() {
            return false;
        }
        placement.cells().all(|(col, row)| {
            match self.cells[usize::from(row) - 1][usize::from(col) - 1] {
                None => true,
                Some(id) => Some(id) == ignore,
            }
        })
    }

    /// First top-left cell where a `col_span` x `row_span` rectangle fits
    /// entirely on unoccupied cells, scanning rows top-to-bottom and
    /// columns left-to-right. `None` when no placement fits.
    pub fn find_available_position(&self, col_span: u8, row_span: u8) -> Option<(u8, u8)> {
        for row in 1..=GRID_ROWS {
            for col in 1..=GRID_COLS {
                let candidate = Placement::new(col, row, col_span, row_span);
                if self.is_rect_free(&candidate, None) {
                    return Some((col, row));
                }
            }
        }
        None
    }
}

// ---------------------------------------------------------------------------
// Item-list validation
// ---------------------------------------------------------------------------

/// Validate a wholesale item list for persistence: every coordinate set
/// (base, `sm`, `md`) must lie within grid bounds and item identifiers
/// must be unique.
///
/// Overlap between items is deliberately NOT rejected here; see
/// [`find_overlaps`].
pub fn validate_items(items: &[LayoutItem]) -> Result<(), GridError> {
    let mut seen = Vec::with_capacity(items.len());
    for item in items {
        if seen.contains(&item.id) {
            return Err(GridError::DuplicateItem(item.id));
        }
        seen.push(item.id);

        let placements = [Some(&item.placement), item.sm.as_ref(), item.md.as_ref()];
        for placement in placements.into_iter().flatten() {
            if !placement.in_bounds() {
                return Err(GridError::OutOfBounds);
            }
        }
    }
    Ok(())
}

/// All pairs of distinct items whose base placements overlap.
///
/// Two editors saving concurrently can persist an overlap (last write
/// wins, no transactional guard), so the save path logs these instead of
/// rejecting.
pub fn find_overlaps(items: &[LayoutItem]) -> Vec<(Uuid, Uuid)> {
    let mut pairs = Vec::new();
    for (i, a) in items.iter().enumerate() {
        for b in &items[i + 1..] {
            if a.placement.overlaps(&b.placement) {
                pairs.push((a.id, b.id));
            }
        }
    }
    pairs
}

// ---------------------------------------------------------------------------
// Resize direction
// ---------------------------------------------------------------------------

/// Axis a resize operation acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeDirection {
    Horizontal,
    Vertical,
}

// ---------------------------------------------------------------------------
// Layout editor
// ---------------------------------------------------------------------------

/// In-memory editing state for one layout.
///
/// The admin UI drives this engine interactively; nothing is persisted
/// until the caller takes the item snapshot and saves it wholesale. A
/// layout that has never been saved has no identifier yet.
#[derive(Debug, Clone)]
pub struct LayoutEditor {
    id: Option<DbId>,
    slug: String,
    items: Vec<LayoutItem>,
    published: bool,
    occupancy: Occupancy,
}

impl LayoutEditor {
    /// Start editing a brand-new, empty, unpublished layout.
    pub fn new(slug: impl Into<String>) -> Self {
        LayoutEditor {
            id: None,
            slug: slug.into(),
            items: Vec::new(),
            published: false,
            occupancy: Occupancy::empty(),
        }
    }

    /// Resume editing a previously saved layout.
    pub fn from_saved(id: DbId, slug: impl Into<String>, items: Vec<LayoutItem>, published: bool) -> Self {
        let occupancy = Occupancy::recompute(&items);
        LayoutEditor {
            id: Some(id),
            slug: slug.into(),
            items,
            published,
            occupancy,
        }
    }

    pub fn id(&self) -> Option<DbId> {
        self.id
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn published(&self) -> bool {
        self.published
    }

    /// Snapshot of the item list, in insertion order. This is what a
    /// wholesale save persists.
    pub fn items(&self) -> &[LayoutItem] {
        &self.items
    }

    /// Current occupancy matrix.
    pub fn occupancy(&self) -> &Occupancy {
        &self.occupancy
    }

    /// Record the identifier assigned by the first save.
    pub fn mark_saved(&mut self, id: DbId) {
        self.id = Some(id);
    }

    /// Add a new item at the first available position (row-major scan).
    ///
    /// Returns the new item's identifier, or [`GridError::GridFull`] when
    /// no `col_span` x `row_span` rectangle fits.
    pub fn add_item(&mut self, media_id: DbId, col_span: u8, row_span: u8) -> Result<Uuid, GridError> {
        let (col, row) = self
            .occupancy
            .find_available_position(col_span, row_span)
            .ok_or(GridError::GridFull)?;

        let item = LayoutItem::new(media_id, Placement::new(col, row, col_span, row_span));
        let id = item.id;
        self.items.push(item);
        self.occupancy = Occupancy::recompute(&self.items);
        Ok(id)
    }

    /// Move an item's top-left corner to `(target_col, target_row)`.
    ///
    /// Rejects with [`GridError::OutOfBounds`] when the moved rectangle
    /// would leave the grid, and with [`GridError::Occupied`] when any
    /// target cell belongs to a different item. On rejection the item's
    /// position is unchanged.
    pub fn move_item(&mut self, item_id: Uuid, target_col: u8, target_row: u8) -> Result<(), GridError> {
        let idx = self.index_of(item_id)?;

        let target = Placement {
            start_col: target_col,
            start_row: target_row,
            ..self.items[idx].placement
        };

        if !target.in_bounds() {
            return Err(GridError::OutOfBounds);
        }
        if !self.occupancy.is_rect_free(&target, Some(item_id)) {
            return Err(GridError::Occupied);
        }

        self.items[idx].placement = target;
        self.occupancy = Occupancy::recompute(&self.items);
        Ok(())
    }

    /// Grow or shrink one span of an item by `delta` cells.
    ///
    /// The new span is clamped to `[1, grid dimension]` and to the edge of
    /// the grid from the item's current start position. Span growth is
    /// clamped but not collision-checked: an enlarged item may overlap a
    /// neighbour, which the editor surfaces visually rather than rejecting.
    pub fn resize_item(
        &mut self,
        item_id: Uuid,
        direction: ResizeDirection,
        delta: i8,
    ) -> Result<(), GridError> {
        let idx = self.index_of(item_id)?;
        let placement = &mut self.items[idx].placement;

        match direction {
            ResizeDirection::Horizontal => {
                let max_span = GRID_COLS - placement.start_col + 1;
                placement.col_span = clamp_span(placement.col_span, delta, max_span);
            }
            ResizeDirection::Vertical => {
                let max_span = GRID_ROWS - placement.start_row + 1;
                placement.row_span = clamp_span(placement.row_span, delta, max_span);
            }
        }

        self.occupancy = Occupancy::recompute(&self.items);
        Ok(())
    }

    /// Remove an item. Returns `true` if it existed.
    pub fn remove_item(&mut self, item_id: Uuid) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != item_id);
        if self.items.len() == before {
            return false;
        }
        self.occupancy = Occupancy::recompute(&self.items);
        true
    }

    /// Flip the publish flag. A layout that has never been saved cannot
    /// be published; the call is then a no-op and returns `false`.
    pub fn toggle_publish(&mut self) -> bool {
        if self.id.is_none() {
            return false;
        }
        self.published = !self.published;
        true
    }

    fn index_of(&self, item_id: Uuid) -> Result<usize, GridError> {
        self.items
            .iter()
            .position(|item| item.id == item_id)
            .ok_or(GridError::UnknownItem(item_id))
    }
}

/// Apply `delta` to `span`, clamped to `[1, max_span]`.
fn clamp_span(span: u8, delta: i8, max_span: u8) -> u8 {
    let next = i16::from(span) + i16::from(delta);
    next.clamp(1, i16::from(max_span)) as u8
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
