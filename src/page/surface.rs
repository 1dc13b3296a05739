use crate::{eval::frame::PageFrame, foundation::core::PanelIndex};

/// Drawing collaborator. The controller never draws; it only scrolls and hands over frames.
pub trait ContentSurface {
    /// Bring `panel` into view.
    fn scroll_to(&mut self, panel: PanelIndex);

    /// Draw one evaluated frame. The default ignores frames.
    fn render(&mut self, _frame: &PageFrame) {}
}

/// Surface that only remembers what it was asked to do.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    /// Every scroll command, oldest first.
    pub scrolls: Vec<PanelIndex>,
    /// Number of frames rendered.
    pub rendered: usize,
    /// Most recent frame.
    pub last_frame: Option<PageFrame>,
}

impl ContentSurface for RecordingSurface {
    fn scroll_to(&mut self, panel: PanelIndex) {
        self.scrolls.push(panel);
    }

    fn render(&mut self, frame: &PageFrame) {
        self.rendered += 1;
        self.last_frame = Some(frame.clone());
    }
}
