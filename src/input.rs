use bitflags::*;

bitflags! {
#[derive(Default)]
pub struct MouseButton: u32 {
    const LEFT = 1 << 0;
    const RIGHT = 1 << 1;
    const MIDDLE = 1 << 2;
}}

bitflags! {
#[derive(Default)]
pub struct Key: u32 {
    const SHIFT = 1 << 0;
    const CTRL = 1 << 1;
    const ALT = 1 << 2;
    const BACKSPACE = 1 << 3;
    const RETURN = 1 << 4;
}}

pub const MAX_TEXT_INPUT: usize = 32;

// Input fed by the client between frames and observed wholesale during the
// next begin/end pair. `pressed`/`keys_pressed` last exactly one frame;
// `down`/`keys_down` track current state. Events accumulate: button masks
// are OR-ed, scroll deltas summed, text concatenated.
#[derive(Default)]
pub struct Input {
    pub mouse_pos: [i32; 2],
    pub(crate) last_mouse_pos: [i32; 2],
    pub mouse_delta: [i32; 2],
    pub down: MouseButton,
    pub pressed: MouseButton,
    pub keys_down: Key,
    pub keys_pressed: Key,
    pub scroll_delta: [i32; 2],
    pub(crate) text_entered: String,
}

impl Input {
    pub fn mouse_move(&mut self, x: i32, y: i32) {
        self.mouse_pos = [x, y];
    }

    pub fn mouse_down(&mut self, x: i32, y: i32, btn: MouseButton) {
        self.mouse_move(x, y);
        self.down.insert(btn);
        self.pressed.insert(btn);
    }

    pub fn mouse_up(&mut self, x: i32, y: i32, btn: MouseButton) {
        self.mouse_move(x, y);
        self.down.remove(btn);
    }

    pub fn scroll(&mut self, dx: i32, dy: i32) {
        self.scroll_delta[0] += dx;
        self.scroll_delta[1] += dy;
    }

    pub fn key_down(&mut self, key: Key) {
        self.keys_pressed.insert(key);
        self.keys_down.insert(key);
    }

    pub fn key_up(&mut self, key: Key) {
        self.keys_down.remove(key);
    }

    pub fn text(&mut self, s: &str) {
        assert!(self.text_entered.len() + s.len() <= MAX_TEXT_INPUT, "text input overflow");
        self.text_entered.push_str(s);
    }

    pub(crate) fn begin_frame(&mut self) {
        self.mouse_delta = [
            self.mouse_pos[0] - self.last_mouse_pos[0],
            self.mouse_pos[1] - self.last_mouse_pos[1],
        ];
    }

    pub(crate) fn end_frame(&mut self) {
        self.keys_pressed = Key::empty();
        self.text_entered.clear();
        self.pressed = MouseButton::empty();
        self.scroll_delta = [0, 0];
        self.last_mouse_pos = self.mouse_pos;
    }
}
