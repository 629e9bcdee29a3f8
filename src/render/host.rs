use super::primitives::Color;

/// Host element the chart is mounted into.
pub trait HostContainer {
    /// Current content box as `(width, height)`, `None` while unattached.
    fn content_box(&self) -> Option<(u32, u32)>;
}

/// Host-side registration point for the window resize signal.
///
/// `connect`/`disconnect` are only ever called on state transitions; the
/// resize controller guarantees neither is invoked twice in a row.
pub trait ResizeSignal {
    fn connect(&mut self);
    fn disconnect(&mut self);
}

/// Drawing surface for the legend overlay: a list of colored text rows.
pub trait OverlayRenderer {
    fn clear(&mut self);
    fn push_row(&mut self, text: &str, color: Color);
}
