//! Display geometry.
//!
//! None of this affects the rules. The engine computes token positions so
//! that every renderer places pieces the same way.

use serde::{Deserialize, Serialize};

/// Rectangle on the board image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Area {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Area {
    #[must_use]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }
}

/// Point on the board image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// How player tokens pack into a location.
///
/// The first token sits at the area origin plus the offset. Each further
/// token steps `step_x` along the row; after `columns` tokens the row
/// restarts one `row_step` lower. `columns: None` never wraps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenLayout {
    pub offset_x: i32,
    pub offset_y: i32,
    pub step_x: i32,
    pub columns: Option<u8>,
    pub row_step: i32,
}

impl Default for TokenLayout {
    fn default() -> Self {
        Self {
            offset_x: 0,
            offset_y: 120,
            step_x: 45,
            columns: Some(4),
            row_step: 45,
        }
    }
}

impl TokenLayout {
    /// Layout used by the trailer and casting office: tokens sit inside the
    /// room rather than below it.
    #[must_use]
    pub const fn room() -> Self {
        Self {
            offset_x: 10,
            offset_y: 80,
            step_x: 45,
            columns: Some(4),
            row_step: 45,
        }
    }

    /// Position of the token placed after `occupants` others.
    ///
    /// ```
    /// use deadwood::core::{Area, Position, TokenLayout};
    ///
    /// let layout = TokenLayout::room();
    /// let area = Area::new(1000, 250, 200, 200);
    /// assert_eq!(layout.slot(&area, 0), Position::new(1010, 330));
    /// assert_eq!(layout.slot(&area, 4), Position::new(1010, 375));
    /// ```
    #[must_use]
    pub fn slot(&self, area: &Area, occupants: usize) -> Position {
        let mut x = area.x + self.offset_x;
        let mut y = area.y + self.offset_y;
        let mut column: u8 = 0;

        for _ in 0..occupants {
            x += self.step_x;
            column += 1;
            if self.columns == Some(column) {
                x -= self.step_x * i32::from(column);
                y += self.row_step;
                column = 0;
            }
        }

        Position::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_slots() {
        let layout = TokenLayout::default();
        let area = Area::new(100, 100, 200, 115);

        assert_eq!(layout.slot(&area, 0), Position::new(100, 220));
        assert_eq!(layout.slot(&area, 1), Position::new(145, 220));
        assert_eq!(layout.slot(&area, 3), Position::new(235, 220));
        assert_eq!(layout.slot(&area, 4), Position::new(100, 265));
        assert_eq!(layout.slot(&area, 5), Position::new(145, 265));
    }

    #[test]
    fn test_unbounded_row() {
        let layout = TokenLayout {
            columns: None,
            ..TokenLayout::default()
        };
        let area = Area::new(0, 0, 0, 0);
        assert_eq!(layout.slot(&area, 7), Position::new(315, 120));
    }

    #[test]
    fn test_leftward_layout() {
        let layout = TokenLayout {
            offset_x: 120,
            offset_y: 120,
            step_x: -45,
            columns: Some(4),
            row_step: 50,
        };
        let area = Area::new(300, 30, 150, 100);

        assert_eq!(layout.slot(&area, 1), Position::new(375, 150));
        assert_eq!(layout.slot(&area, 4), Position::new(420, 200));
    }

    #[test]
    fn test_layout_serde_defaults() {
        let layout: TokenLayout = serde_json::from_str(r#"{"columns": 3}"#).unwrap();
        assert_eq!(layout.columns, Some(3));
        assert_eq!(layout.step_x, 45);
        assert_eq!(layout.offset_y, 120);
    }
}
