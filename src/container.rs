use crate::context::*;
use crate::geometry::*;
use crate::input::MouseButton;
use crate::pool::*;
use crate::style::{ColorId, IconId};
use crate::draw::UNCLIPPED_RECT;
use log::debug;

// Retained per-id state for a window, popup or panel. `head`/`tail` are the
// indices of the bracketing jump commands and are set only for root
// containers; that is also how "is a root" is encoded.
#[derive(Clone, Copy, Default)]
pub struct Container {
    pub rect: Rect,
    pub body: Rect,
    pub content_size: [i32; 2],
    pub scroll: [i32; 2],
    pub zindex: i32,
    pub open: bool,
    pub(crate) head: Option<usize>,
    pub(crate) tail: Option<usize>,
}

impl Context {
    pub fn current_container(&self) -> usize {
        assert!(!self.container_stack.is_empty(), "no container is open");
        *self.container_stack.top()
    }

    pub fn container(&self, idx: usize) -> &Container {
        &self.containers[idx]
    }

    pub fn container_mut(&mut self, idx: usize) -> &mut Container {
        &mut self.containers[idx]
    }

    // Looks up or creates the container for `name`, for clients that want to
    // reposition a window or adjust its scroll directly.
    pub fn get_container(&mut self, name: &str) -> usize {
        let id = self.get_id(name.as_bytes());
        self.get_container_by_id(id, Opt::empty()).unwrap()
    }

    pub(crate) fn get_container_by_id(&mut self, id: Id, opt: Opt) -> Option<usize> {
        if let Some(idx) = pool_get(&self.container_pool, id) {
            if self.containers[idx].open || !opt.contains(Opt::CLOSED) {
                pool_update(&mut self.container_pool, self.frame, idx);
            }
            return Some(idx);
        }
        if opt.contains(Opt::CLOSED) {
            return None;
        }
        let idx = pool_init(&mut self.container_pool, self.frame, id);
        if self.containers[idx].zindex > 0 {
            debug!("container slot recycled; a window is losing its retained geometry");
        }
        self.containers[idx] = Container::default();
        self.containers[idx].open = true;
        self.bring_to_front(idx);
        Some(idx)
    }

    pub(crate) fn pop_container(&mut self) {
        let idx = self.current_container();
        let layout = *self.layout_stack.top();
        let cnt = &mut self.containers[idx];
        cnt.content_size[X] = layout.max[X] - layout.body.pos[X];
        cnt.content_size[Y] = layout.max[Y] - layout.body.pos[Y];
        self.container_stack.pop();
        self.layout_stack.pop();
        self.pop_id();
    }

    fn begin_root_container(&mut self, idx: usize) {
        self.container_stack.push(idx);
        self.root_list.push(idx);
        let head = self.commands.push_jump(usize::MAX);
        self.containers[idx].head = Some(head);
        // the topmost container under the mouse becomes next frame's hover root
        if self.containers[idx].rect.contains(self.input.mouse_pos)
            && self.next_hover_root.map_or(true, |h| self.containers[idx].zindex > self.containers[h].zindex)
        {
            self.next_hover_root = Some(idx);
        }
        // a root container opened inside another root's begin/end block must
        // not inherit the outer clip
        self.clip_stack.push(UNCLIPPED_RECT);
    }

    fn end_root_container(&mut self) {
        let idx = self.current_container();
        let tail = self.commands.push_jump(usize::MAX);
        self.containers[idx].tail = Some(tail);
        // the head jump skips this container's commands entirely until end()
        // threads the chain in z order
        let head = self.containers[idx].head.unwrap();
        let end = self.commands.len();
        self.commands.patch_jump(head, end);
        self.pop_clip_rect();
        self.pop_container();
    }

    fn push_container_body(&mut self, idx: usize, mut body: Rect, opt: Opt) {
        if !opt.contains(Opt::NO_SCROLL) {
            self.scrollbars(idx, &mut body);
        }
        let padding = self.style.padding;
        let scroll = self.containers[idx].scroll;
        self.push_layout(body.expand(-padding), scroll);
        self.containers[idx].body = body;
    }

    fn scrollbars(&mut self, idx: usize, body: &mut Rect) {
        let sz = self.style.scrollbar_size;
        let mut cs = self.containers[idx].content_size;
        cs[X] += self.style.padding * 2;
        cs[Y] += self.style.padding * 2;
        self.push_clip_rect(*body);
        // overflow on one axis eats room on the other to fit the bar
        if cs[Y] > self.containers[idx].body.size[Y] {
            body.size[X] -= sz;
        }
        if cs[X] > self.containers[idx].body.size[X] {
            body.size[Y] -= sz;
        }
        self.scrollbar(idx, body, cs, Y);
        self.scrollbar(idx, body, cs, X);
        self.pop_clip_rect();
    }

    // One scrollbar scrolling along `axis`, laid out against the body's far
    // edge on the perpendicular axis.
    fn scrollbar(&mut self, idx: usize, body: &Rect, cs: [i32; 2], axis: usize) {
        let perp = axis ^ 1;
        let maxscroll = cs[axis] - body.size[axis];
        if maxscroll > 0 && body.size[axis] > 0 {
            let id = self.get_id(if axis == Y { b"!scrollbary" } else { b"!scrollbarx" });

            let mut base = *body;
            base.pos[perp] = body.pos[perp] + body.size[perp];
            base.size[perp] = self.style.scrollbar_size;

            self.update_control(id, base, Opt::empty());
            if self.focus == Some(id) && self.input.down == MouseButton::LEFT {
                self.containers[idx].scroll[axis] += self.input.mouse_delta[axis] * cs[axis] / base.size[axis];
            }
            self.containers[idx].scroll[axis] = clamp(self.containers[idx].scroll[axis], 0, maxscroll);

            let f = self.draw_frame;
            f(self, base, ColorId::ScrollBase);
            let mut thumb = base;
            thumb.size[axis] = self.style.thumb_size.max(base.size[axis] * body.size[axis] / cs[axis]);
            thumb.pos[axis] += self.containers[idx].scroll[axis] * (base.size[axis] - thumb.size[axis]) / maxscroll;
            f(self, thumb, ColorId::ScrollThumb);

            // wheel deltas land on the container under the mouse
            if self.mouse_over(*body) {
                self.scroll_target = Some(idx);
            }
        } else {
            self.containers[idx].scroll[axis] = 0;
        }
    }

    pub fn begin_window(&mut self, title: &str, r: Rect) -> ResultFlags {
        self.begin_window_ex(title, r, Opt::empty())
    }

    pub fn begin_window_ex(&mut self, title: &str, r: Rect, opt: Opt) -> ResultFlags {
        let id = self.get_id(title.as_bytes());
        let idx = match self.get_container_by_id(id, opt) {
            Some(idx) if self.containers[idx].open => idx,
            _ => return ResultFlags::empty(),
        };
        self.id_stack.push(id);

        if self.containers[idx].rect.size[X] == 0 {
            self.containers[idx].rect = r;
        }
        self.begin_root_container(idx);
        let r = self.containers[idx].rect;
        let mut body = r;

        if !opt.contains(Opt::NO_FRAME) {
            let f = self.draw_frame;
            f(self, r, ColorId::WindowBg);
        }

        if !opt.contains(Opt::NO_TITLE) {
            let mut tr = r;
            tr.size[Y] = self.style.title_height;
            let f = self.draw_frame;
            f(self, tr, ColorId::TitleBg);

            {
                let tid = self.get_id(b"!title");
                self.update_control(tid, tr, opt);
                self.draw_control_text(title, tr, ColorId::TitleText, opt);
                if self.focus == Some(tid) && self.input.down == MouseButton::LEFT {
                    self.containers[idx].rect.pos[X] += self.input.mouse_delta[X];
                    self.containers[idx].rect.pos[Y] += self.input.mouse_delta[Y];
                }
                body.pos[Y] += tr.size[Y];
                body.size[Y] -= tr.size[Y];
            }

            if !opt.contains(Opt::NO_CLOSE) {
                let cid = self.get_id(b"!close");
                let cr = rect(tr.x() + tr.w() - tr.h(), tr.y(), tr.h(), tr.h());
                self.draw_icon(IconId::Close, cr, self.style.color(ColorId::TitleText));
                self.update_control(cid, cr, opt);
                if self.input.pressed == MouseButton::LEFT && self.focus == Some(cid) {
                    self.containers[idx].open = false;
                }
            }
        }

        self.push_container_body(idx, body, opt);

        if !opt.contains(Opt::NO_RESIZE) {
            let sz = self.style.title_height;
            let rid = self.get_id(b"!resize");
            let rr = rect(r.x() + r.w() - sz, r.y() + r.h() - sz, sz, sz);
            self.update_control(rid, rr, opt);
            if self.focus == Some(rid) && self.input.down == MouseButton::LEFT {
                let delta = self.input.mouse_delta;
                let cnt = &mut self.containers[idx];
                cnt.rect.size[X] = (cnt.rect.size[X] + delta[X]).max(96);
                cnt.rect.size[Y] = (cnt.rect.size[Y] + delta[Y]).max(64);
            }
        }

        // snap to the measured content size; the measurement is last frame's,
        // so the rect trails content changes by one frame
        if opt.contains(Opt::AUTO_SIZE) {
            let lb = self.layout_stack.top().body;
            let cnt = &mut self.containers[idx];
            cnt.rect.size[X] = cnt.content_size[X] + (cnt.rect.size[X] - lb.size[X]);
            cnt.rect.size[Y] = cnt.content_size[Y] + (cnt.rect.size[Y] - lb.size[Y]);
        }

        // popups close as soon as anything else is clicked
        if opt.contains(Opt::POPUP) && !self.input.pressed.is_empty() && self.hover_root != Some(idx) {
            self.containers[idx].open = false;
        }

        let body = self.containers[idx].body;
        self.push_clip_rect(body);
        ResultFlags::ACTIVE
    }

    pub fn end_window(&mut self) {
        self.pop_clip_rect();
        self.end_root_container();
    }

    // Positions the popup at the mouse cursor, opens it and fronts it. Also
    // adopts it as the hover root so the click that opened it doesn't count
    // as an outside click and dismiss it immediately.
    pub fn open_popup(&mut self, name: &str) {
        let idx = self.get_container(name);
        self.hover_root = Some(idx);
        self.next_hover_root = Some(idx);
        self.containers[idx].rect = rect(self.input.mouse_pos[X], self.input.mouse_pos[Y], 1, 1);
        self.containers[idx].open = true;
        self.bring_to_front(idx);
    }

    pub fn begin_popup(&mut self, name: &str) -> ResultFlags {
        let opt = Opt::POPUP | Opt::AUTO_SIZE | Opt::NO_RESIZE | Opt::NO_SCROLL | Opt::NO_TITLE | Opt::CLOSED;
        self.begin_window_ex(name, rect(0, 0, 0, 0), opt)
    }

    pub fn end_popup(&mut self) {
        self.end_window();
    }

    pub fn begin_panel(&mut self, name: &str) {
        self.begin_panel_ex(name, Opt::empty());
    }

    // Panels draw inline inside their parent's command region; they get their
    // own body, clip and scroll but no z order.
    pub fn begin_panel_ex(&mut self, name: &str, opt: Opt) {
        self.push_id(name.as_bytes());
        let id = self.last_id.unwrap();
        let idx = self.get_container_by_id(id, opt).expect("a panel cannot start closed");
        let r = self.layout_next();
        self.containers[idx].rect = r;
        if !opt.contains(Opt::NO_FRAME) {
            let f = self.draw_frame;
            f(self, r, ColorId::PanelBg);
        }
        self.container_stack.push(idx);
        self.push_container_body(idx, r, opt);
        let body = self.containers[idx].body;
        self.push_clip_rect(body);
    }

    pub fn end_panel(&mut self) {
        self.pop_clip_rect();
        self.pop_container();
    }
}
