//! Responsive breakpoint resolution for the public grid view.
//!
//! Pure read-path selection: given a viewport width, each item renders at
//! its `sm` or `md` override when one exists, and at its base placement
//! otherwise. Nothing here touches persistence.

use crate::grid::{LayoutItem, Placement};

/// Upper bound (exclusive) of the `sm` viewport class, in CSS pixels.
pub const SM_MAX_WIDTH: u32 = 640;

/// Upper bound (exclusive) of the `md` viewport class, in CSS pixels.
pub const MD_MAX_WIDTH: u32 = 1024;

/// Viewport width class used to select a coordinate set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    /// Phones: width below [`SM_MAX_WIDTH`].
    Sm,
    /// Tablets: width below [`MD_MAX_WIDTH`].
    Md,
    /// Everything wider; also the fallback coordinate set.
    Base,
}

impl Breakpoint {
    /// Classify a viewport width in CSS pixels.
    pub fn from_viewport_width(width: u32) -> Self {
        if width < SM_MAX_WIDTH {
            Breakpoint::Sm
        } else if width < MD_MAX_WIDTH {
            Breakpoint::Md
        } else {
            Breakpoint::Base
        }
    }
}

/// The placement an item renders at for the given breakpoint, falling
/// back to the base placement when no override exists for that class.
pub fn resolve(item: &LayoutItem, breakpoint: Breakpoint) -> Placement {
    let override_slot = match breakpoint {
        Breakpoint::Sm => item.sm,
        Breakpoint::Md => item.md,
        Breakpoint::Base => None,
    };
    override_slot.unwrap_or(item.placement)
}
