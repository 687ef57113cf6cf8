use crate::command::Command;
use crate::context::{Context, Id, Opt};
use crate::geometry::*;
use crate::style::{ColorId, FontId, IconId};

// "No clipping", as seen by the renderer. A Clip command carrying this rect
// tells it to clear its scissor.
pub const UNCLIPPED_RECT: Rect = Rect {pos: [0, 0], size: [0x1000000, 0x1000000]};

#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum Clip {
    None = 0,
    Part = 1,
    All = 2,
}

impl Context {
    // The stack only ever shrinks the clip region; pushing intersects with
    // the current top.
    pub fn push_clip_rect(&mut self, r: Rect) {
        let last = self.get_clip_rect();
        self.clip_stack.push(r.intersection(last));
    }

    pub fn pop_clip_rect(&mut self) {
        self.clip_stack.pop();
    }

    pub fn get_clip_rect(&self) -> Rect {
        *self.clip_stack.top()
    }

    pub fn check_clip(&self, r: Rect) -> Clip {
        let cr = self.get_clip_rect();
        if r.x() > cr.right() || r.right() < cr.x() || r.y() > cr.bottom() || r.bottom() < cr.y() {
            return Clip::All;
        }
        if r.x() >= cr.x() && r.right() <= cr.right() && r.y() >= cr.y() && r.bottom() <= cr.bottom() {
            return Clip::None;
        }
        Clip::Part
    }

    pub fn set_clip(&mut self, r: Rect) {
        self.commands.push(Command::Clip {rect: r});
    }

    pub fn draw_rect(&mut self, r: Rect, color: Color) {
        let r = r.intersection(self.get_clip_rect());
        if !r.is_empty() {
            self.commands.push(Command::Rect {rect: r, color});
        }
    }

    pub fn draw_box(&mut self, r: Rect, color: Color) {
        self.draw_rect(rect(r.x() + 1, r.y(), r.w() - 2, 1), color);
        self.draw_rect(rect(r.x() + 1, r.bottom() - 1, r.w() - 2, 1), color);
        self.draw_rect(rect(r.x(), r.y(), 1, r.h()), color);
        self.draw_rect(rect(r.right() - 1, r.y(), 1, r.h()), color);
    }

    // Text and icons can't be clipped geometrically here, so a partially
    // visible one is bracketed by Clip commands: one establishing the current
    // clip for the renderer, one releasing it afterwards.
    pub fn draw_text(&mut self, font: FontId, s: &str, pos: [i32; 2], color: Color) {
        let r = rect(pos[X], pos[Y], self.measure_width(font, s), self.measure_height(font));
        let clipped = self.check_clip(r);
        if clipped == Clip::All {
            return;
        }
        if clipped == Clip::Part {
            let cr = self.get_clip_rect();
            self.set_clip(cr);
        }
        let str = self.commands.push_text_str(s);
        self.commands.push(Command::Text {font, pos, color, str});
        if clipped != Clip::None {
            self.set_clip(UNCLIPPED_RECT);
        }
    }

    pub fn draw_icon(&mut self, id: IconId, r: Rect, color: Color) {
        let clipped = self.check_clip(r);
        if clipped == Clip::All {
            return;
        }
        if clipped == Clip::Part {
            let cr = self.get_clip_rect();
            self.set_clip(cr);
        }
        self.commands.push(Command::Icon {id, rect: r, color});
        if clipped != Clip::None {
            self.set_clip(UNCLIPPED_RECT);
        }
    }

    pub fn draw_control_frame(&mut self, id: Id, r: Rect, colorid: ColorId, opt: Opt) {
        if opt.contains(Opt::NO_FRAME) {
            return;
        }
        let n = if self.focus == Some(id) { 2 } else if self.hover == Some(id) { 1 } else { 0 };
        let f = self.draw_frame;
        f(self, r, colorid.offset(n));
    }

    pub fn draw_control_text(&mut self, s: &str, r: Rect, colorid: ColorId, opt: Opt) {
        let font = self.style.font;
        let tw = self.measure_width(font, s);
        self.push_clip_rect(r);
        let y = r.y() + (r.h() - self.measure_height(font)) / 2;
        let x = if opt.contains(Opt::ALIGN_CENTER) {
            r.x() + (r.w() - tw) / 2
        } else if opt.contains(Opt::ALIGN_RIGHT) {
            r.x() + r.w() - tw - self.style.padding
        } else {
            r.x() + self.style.padding
        };
        let color = self.style.color(colorid);
        self.draw_text(font, s, [x, y], color);
        self.pop_clip_rect();
    }
}

// Default window chrome: filled rect plus a 1-px border, except for the roles
// that read better borderless. Replaceable via Context::draw_frame.
pub fn default_draw_frame(ctx: &mut Context, r: Rect, colorid: ColorId) {
    ctx.draw_rect(r, ctx.style.color(colorid));
    if matches!(colorid, ColorId::ScrollBase | ColorId::ScrollThumb | ColorId::TitleBg) {
        return;
    }
    if ctx.style.color(ColorId::Border).3 != 0 {
        ctx.draw_box(r.expand(1), ctx.style.color(ColorId::Border));
    }
}
