#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CyclePhase {
    Idle,      // Nothing scheduled
    Holding,   // Fade-in played, waiting for the timeout
    FadingOut, // Fade-out played, waiting for it to complete
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Fade {
    In,
    Out,
}

/// Output of the state machine, applied by whatever renders the label.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Command {
    Display(String),
    Play(Fade),
    CancelFade,
}
