//! Responsive chart layout parameters, derived from the viewport width.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartLayout {
    pub card_x_spacing: u32,
    pub card_y_spacing: u32,
    pub orientation: Orientation,
    pub transition_ms: u32,
}

/// Viewports narrower than this switch to the compact vertical layout.
pub const COMPACT_WIDTH: u32 = 768;

pub fn layout_for_width(width: u32) -> ChartLayout {
    if width < COMPACT_WIDTH {
        ChartLayout {
            card_x_spacing: 160,
            card_y_spacing: 120,
            orientation: Orientation::Vertical,
            transition_ms: 600,
        }
    } else {
        ChartLayout {
            card_x_spacing: 250,
            card_y_spacing: 170,
            orientation: Orientation::Horizontal,
            transition_ms: 600,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_viewports_use_the_horizontal_layout() {
        let layout = layout_for_width(1280);
        assert_eq!(layout.orientation, Orientation::Horizontal);
        assert_eq!(layout.card_x_spacing, 250);
        assert_eq!(layout.card_y_spacing, 170);
    }

    #[test]
    fn narrow_viewports_switch_to_vertical() {
        let layout = layout_for_width(COMPACT_WIDTH - 1);
        assert_eq!(layout.orientation, Orientation::Vertical);
        assert!(layout.card_x_spacing < 250);
    }
}
