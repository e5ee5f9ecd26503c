//! Section and scroll primitives shared by the navigation controller and the
//! viewport.

use std::fmt;

/// One of the three full-width panels of the portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Home,
    Projects,
    Resume,
}

impl Section {
    /// All sections in display order.
    pub const ALL: [Section; 3] = [Section::Home, Section::Projects, Section::Resume];

    /// Number of sections laid out in the horizontal strip.
    pub const COUNT: usize = Self::ALL.len();

    pub fn index(self) -> usize {
        match self {
            Section::Home => 0,
            Section::Projects => 1,
            Section::Resume => 2,
        }
    }

    /// Maps a position in [`Section::ALL`] back to a section. Returns `None`
    /// for out-of-range indices so an invalid section is never constructed.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Projects => "Projects",
            Section::Resume => "Resume",
        }
    }

    /// Next section to the right, wrapping around.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::COUNT]
    }

    /// Previous section to the left, wrapping around.
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::COUNT - 1) % Self::COUNT]
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// How the viewport should reach a new offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    /// Animate toward the offset over several ticks.
    Smooth,
    /// Jump straight to the offset.
    Immediate,
}

/// A request to move the horizontal viewport to `offset` columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    pub offset: u32,
    pub behavior: ScrollBehavior,
}

impl ScrollRequest {
    /// Offset of `section` in a strip of `viewport_width`-wide panels.
    pub fn to_section(section: Section, viewport_width: u16, behavior: ScrollBehavior) -> Self {
        Self {
            offset: section.index() as u32 * u32::from(viewport_width),
            behavior,
        }
    }
}
