//! Window layout: a fixed-height toolbar strip on top, the active tab's
//! view filling the rest. Sizes are logical pixels.

/// Height of the toolbar view (tab strip plus navigation row).
pub const TOOLBAR_HEIGHT: f64 = 84.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Area {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    width: f64,
    height: f64,
}

impl Layout {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn toolbar(&self) -> Area {
        Area {
            x: 0.0,
            y: 0.0,
            width: self.width,
            height: TOOLBAR_HEIGHT.min(self.height),
        }
    }

    pub fn content(&self) -> Area {
        let top = TOOLBAR_HEIGHT.min(self.height);
        Area {
            x: 0.0,
            y: top,
            width: self.width,
            height: self.height - top,
        }
    }
}
