/// A single user intent, produced from one raw input event.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    PanUp,
    PanDown,
    PanLeft,
    PanRight,
    ZoomIn,
    ZoomOut,
    DepthIncrease,
    DepthDecrease,
    ToggleHelp,
    ToggleInfo,
    Reset,
    Quit,
    NoOp,
}

impl Command {
    pub const ALL: &'static [Self] = &[
        Self::PanUp,
        Self::PanDown,
        Self::PanLeft,
        Self::PanRight,
        Self::ZoomIn,
        Self::ZoomOut,
        Self::DepthIncrease,
        Self::DepthDecrease,
        Self::ToggleHelp,
        Self::ToggleInfo,
        Self::Reset,
        Self::Quit,
        Self::NoOp,
    ];
}
