/// Typed intents pushed by the input adapters onto the event queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Next,
    Previous,
    GoTo { index: i64 },
    Reset,
    Last,
    ToggleFullscreen,
    ExitFullscreen,
    Print,
    /// Pointer movement or a click that did not hit a control.
    Activity,
    Quit,
}

impl Intent {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Next => "next",
            Self::Previous => "previous",
            Self::GoTo { .. } => "go-to",
            Self::Reset => "reset",
            Self::Last => "last",
            Self::ToggleFullscreen => "toggle-fullscreen",
            Self::ExitFullscreen => "exit-fullscreen",
            Self::Print => "print",
            Self::Activity => "activity",
            Self::Quit => "quit",
        }
    }
}
