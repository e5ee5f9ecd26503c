//! Section navigation and the horizontal viewport.
//!
//! The three sections sit side by side in a virtual strip, each as wide as
//! the terminal. [`NavigationController`] owns the active section and turns
//! navigation and resize events into [`ScrollRequest`]s; [`HorizontalViewport`]
//! applies them, animating smooth requests one tick at a time.

use folio_types::{ScrollBehavior, ScrollRequest, Section};

/// Fraction of the remaining distance covered per animation tick.
const SMOOTH_SCROLL_DIVISOR: u32 = 4;

/// Tracks the active section.
///
/// There are exactly two writers: explicit selection and the resize
/// correction, and only selection changes the active section.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NavigationController {
    active: Section,
}

impl NavigationController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Section {
        self.active
    }

    /// Makes `section` active and requests a smooth scroll to its offset.
    pub fn select_section(&mut self, section: Section, viewport_width: u16) -> ScrollRequest {
        self.active = section;
        ScrollRequest::to_section(section, viewport_width, ScrollBehavior::Smooth)
    }

    /// Re-aligns the active section after the viewport changed width.
    pub fn on_resize(&self, new_width: u16) -> ScrollRequest {
        ScrollRequest::to_section(self.active, new_width, ScrollBehavior::Immediate)
    }
}

/// Columns of one section that are visible through the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleSlice {
    pub section: Section,
    /// First visible column within the section
    pub source_x: u16,
    /// Column within the viewport where that slice starts
    pub dest_x: u16,
    pub width: u16,
}

/// Terminal-wide window over the section strip.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HorizontalViewport {
    width: u16,
    offset: u32,
    target: u32,
}

impl HorizontalViewport {
    pub fn new(width: u16) -> Self {
        Self {
            width,
            offset: 0,
            target: 0,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn is_animating(&self) -> bool {
        self.offset != self.target
    }

    pub fn set_width(&mut self, width: u16) {
        self.width = width;
    }

    pub fn apply(&mut self, request: ScrollRequest) {
        self.target = request.offset;
        if request.behavior == ScrollBehavior::Immediate {
            self.offset = request.offset;
        }
    }

    /// Advances a smooth scroll by one frame. Returns `true` when the offset
    /// moved.
    pub fn step(&mut self) -> bool {
        if !self.is_animating() {
            return false;
        }
        let distance = self.offset.abs_diff(self.target);
        let stride = distance.div_ceil(SMOOTH_SCROLL_DIVISOR).max(1);
        if self.offset < self.target {
            self.offset += stride;
        } else {
            self.offset -= stride;
        }
        true
    }

    /// The (at most two) section slices covering the viewport, left to right.
    pub fn visible_slices(&self) -> Vec<VisibleSlice> {
        let width = u32::from(self.width);
        if width == 0 {
            return Vec::new();
        }
        let window_end = self.offset + width;
        Section::ALL
            .iter()
            .filter_map(|&section| {
                let start = section.index() as u32 * width;
                let end = start + width;
                let low = self.offset.max(start);
                let high = window_end.min(end);
                (low < high).then(|| VisibleSlice {
                    section,
                    source_x: (low - start) as u16,
                    dest_x: (low - self.offset) as u16,
                    width: (high - low) as u16,
                })
            })
            .collect()
    }
}
