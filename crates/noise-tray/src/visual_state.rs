/// Rendered transport states of the indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualState {
    /// Noise audible; the menu offers "Pause".
    Playing,
    /// Playback held; the menu offers "Play".
    Paused,
}
