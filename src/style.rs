use crate::geometry::{color, Color};

// Opaque font handle. It is passed through to the measurement callbacks and
// into Text commands untouched; only the client knows what it refers to.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Default)]
pub struct FontId(pub usize);

// Color roles. The hover/focus variants of Button and Base sit directly after
// their base role; draw_control_frame brightens controls by offsetting the id,
// so the order is part of the contract.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum ColorId {
    Text,
    Border,
    WindowBg,
    TitleBg,
    TitleText,
    PanelBg,
    Button,
    ButtonHover,
    ButtonFocus,
    Base,
    BaseHover,
    BaseFocus,
    ScrollBase,
    ScrollThumb,
}

pub const COLOR_COUNT: usize = 14;

impl ColorId {
    const ALL: [ColorId; COLOR_COUNT] = [
        ColorId::Text, ColorId::Border, ColorId::WindowBg, ColorId::TitleBg,
        ColorId::TitleText, ColorId::PanelBg, ColorId::Button, ColorId::ButtonHover,
        ColorId::ButtonFocus, ColorId::Base, ColorId::BaseHover, ColorId::BaseFocus,
        ColorId::ScrollBase, ColorId::ScrollThumb,
    ];

    pub fn offset(self, n: usize) -> ColorId { Self::ALL[self as usize + n] }
}

#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum IconId {
    Close = 1,
    Check,
    Collapsed,
    Expanded,
}

// All the knobs the widgets read. Plain data; the client may swap any of it
// between frames.
#[derive(Clone, Debug)]
pub struct Style {
    pub font: FontId,
    pub size: [i32; 2], // default widget size, before padding
    pub padding: i32,
    pub spacing: i32,
    pub indent: i32,
    pub title_height: i32,
    pub scrollbar_size: i32,
    pub thumb_size: i32,
    pub colors: [Color; COLOR_COUNT],
}

impl Style {
    pub fn color(&self, id: ColorId) -> Color { self.colors[id as usize] }
}

impl Default for Style {
    fn default() -> Self {
        Self {
            font: FontId(0),
            size: [68, 10],
            padding: 5,
            spacing: 4,
            indent: 24,
            title_height: 24,
            scrollbar_size: 12,
            thumb_size: 8,
            colors: [
                color(230, 230, 230, 255), // Text
                color(25, 25, 25, 255),    // Border
                color(50, 50, 50, 255),    // WindowBg
                color(25, 25, 25, 255),    // TitleBg
                color(240, 240, 240, 255), // TitleText
                color(0, 0, 0, 0),         // PanelBg
                color(75, 75, 75, 255),    // Button
                color(95, 95, 95, 255),    // ButtonHover
                color(115, 115, 115, 255), // ButtonFocus
                color(30, 30, 30, 255),    // Base
                color(35, 35, 35, 255),    // BaseHover
                color(40, 40, 40, 255),    // BaseFocus
                color(43, 43, 43, 255),    // ScrollBase
                color(30, 30, 30, 255),    // ScrollThumb
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::style::*;

    #[test]
    fn color_offsets() {
        assert_eq!(ColorId::Button.offset(0), ColorId::Button);
        assert_eq!(ColorId::Button.offset(1), ColorId::ButtonHover);
        assert_eq!(ColorId::Button.offset(2), ColorId::ButtonFocus);
        assert_eq!(ColorId::Base.offset(2), ColorId::BaseFocus);
    }
}
