/// Horizontal camera over a level wider than the screen
///
/// The offset only moves once the followed column leaves the band between
/// one quarter and three quarters of the visible width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// First visible level column
    pub offset: i32,
    /// Number of visible columns
    pub visible_width: i32,
}

impl Viewport {
    pub fn new(visible_width: i32) -> Self {
        Self {
            offset: 0,
            visible_width,
        }
    }

    /// Scroll so that column `x` sits inside the dead zone
    pub fn follow(&mut self, x: i32, level_width: i32) {
        let low = self.visible_width / 4;
        let high = self.visible_width * 3 / 4;

        let relative = x - self.offset;
        if relative > high {
            self.offset = x - high;
        } else if relative < low {
            self.offset = x - low;
        }

        let max_offset = (level_width - self.visible_width).max(0);
        self.offset = self.offset.clamp(0, max_offset);
    }
}
