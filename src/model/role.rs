use std::fmt;

/// Every cursor the application asks for. The set is closed; the registry
/// holds exactly one handle per role once it is ready.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CursorRole {
    Default,
    SizeWE,
    SizeNS,
    Move,
    Drag,
    Copy,
    Eyedropper,
    IBeam,
    Hand,
}

/// Shapes requested from the windowing library's standard cursor set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardShape {
    Arrow,
    IBeam,
    Hand,
    HResize,
    VResize,
}

impl CursorRole {
    pub const COUNT: usize = 9;

    pub const ALL: [CursorRole; Self::COUNT] = [
        CursorRole::Default,
        CursorRole::SizeWE,
        CursorRole::SizeNS,
        CursorRole::Move,
        CursorRole::Drag,
        CursorRole::Copy,
        CursorRole::Eyedropper,
        CursorRole::IBeam,
        CursorRole::Hand,
    ];

    /// Position of the role in the registry table.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The standard shape used until (or instead of) a better cursor is
    /// found. Drag, copy and move start out as a hand.
    pub fn standard_shape(self) -> Option<StandardShape> {
        match self {
            CursorRole::Default => Some(StandardShape::Arrow),
            CursorRole::SizeWE => Some(StandardShape::HResize),
            CursorRole::SizeNS => Some(StandardShape::VResize),
            CursorRole::Move | CursorRole::Drag | CursorRole::Copy | CursorRole::Hand => {
                Some(StandardShape::Hand)
            }
            CursorRole::IBeam => Some(StandardShape::IBeam),
            CursorRole::Eyedropper => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CursorRole::Default => "default",
            CursorRole::SizeWE => "size-we",
            CursorRole::SizeNS => "size-ns",
            CursorRole::Move => "move",
            CursorRole::Drag => "drag",
            CursorRole::Copy => "copy",
            CursorRole::Eyedropper => "eyedropper",
            CursorRole::IBeam => "ibeam",
            CursorRole::Hand => "hand",
        }
    }
}

impl fmt::Display for CursorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
