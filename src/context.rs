use crate::command::CommandList;
use crate::container::Container;
use crate::draw::default_draw_frame;
use crate::geometry::*;
use crate::input::Input;
use crate::layout::Layout;
use crate::pool::PoolItem;
use crate::style::{ColorId, FontId, Style};
use crate::util::FixedStack;
use bitflags::*;

pub const ROOT_LIST_SIZE: usize = 32;
pub const CONTAINER_STACK_SIZE: usize = 32;
pub const CLIP_STACK_SIZE: usize = 32;
pub const ID_STACK_SIZE: usize = 32;
pub const LAYOUT_STACK_SIZE: usize = 16;
pub const CONTAINER_POOL_SIZE: usize = 48;
pub const TREENODE_POOL_SIZE: usize = 48;
pub const MAX_FMT: usize = 127;

// Widget identity. Stable across frames for the same seed bytes under the
// same id-stack scope, which is what lets hover/focus/scroll state survive
// the per-frame rebuild of the whole UI.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Default)]
pub struct Id(pub u32);

const HASH_INITIAL: u32 = 2166136261;

// 32-bit FNV-1a.
fn hash(mut h: u32, data: &[u8]) -> u32 {
    for &b in data {
        h = (h ^ b as u32).wrapping_mul(16777619);
    }
    h
}

bitflags! {
#[derive(Default)]
pub struct Opt: u32 {
    const ALIGN_CENTER = 1 << 0;
    const ALIGN_RIGHT = 1 << 1;
    const NO_INTERACT = 1 << 2;
    const NO_FRAME = 1 << 3;
    const NO_RESIZE = 1 << 4;
    const NO_SCROLL = 1 << 5;
    const NO_CLOSE = 1 << 6;
    const NO_TITLE = 1 << 7;
    const HOLD_FOCUS = 1 << 8;
    const AUTO_SIZE = 1 << 9;
    const POPUP = 1 << 10;
    const CLOSED = 1 << 11;
    const EXPANDED = 1 << 12;
}}

bitflags! {
#[derive(Default)]
pub struct ResultFlags: u32 {
    const ACTIVE = 1 << 0;
    const SUBMIT = 1 << 1;
    const CHANGE = 1 << 2;
}}

pub struct Context {
    // Configuration. The measurement callbacks must be set before the first
    // frame; draw_frame may be replaced to customize chrome.
    pub style: Style,
    pub text_width: Option<Box<dyn Fn(FontId, &str) -> i32>>,
    pub text_height: Option<Box<dyn Fn(FontId) -> i32>>,
    pub draw_frame: fn(&mut Context, Rect, ColorId),

    // Interaction state.
    pub hover: Option<Id>,
    pub focus: Option<Id>,
    pub last_id: Option<Id>,
    pub last_rect: Rect,
    pub(crate) last_zindex: i32,
    pub(crate) updated_focus: bool,
    pub(crate) frame: u32,
    pub(crate) hover_root: Option<usize>,
    pub(crate) next_hover_root: Option<usize>,
    pub(crate) scroll_target: Option<usize>,
    pub(crate) number_edit_buf: String,
    pub(crate) number_edit: Option<Id>,
    pub(crate) fmt_buf: String,

    // Frame-local stacks, all drained by the time end() returns.
    pub(crate) commands: CommandList,
    pub(crate) root_list: FixedStack<usize, ROOT_LIST_SIZE>,
    pub(crate) container_stack: FixedStack<usize, CONTAINER_STACK_SIZE>,
    pub(crate) clip_stack: FixedStack<Rect, CLIP_STACK_SIZE>,
    pub(crate) id_stack: FixedStack<Id, ID_STACK_SIZE>,
    pub(crate) layout_stack: FixedStack<Layout, LAYOUT_STACK_SIZE>,

    // Retained state, keyed by id through the pools.
    pub(crate) container_pool: [PoolItem; CONTAINER_POOL_SIZE],
    pub(crate) containers: [Container; CONTAINER_POOL_SIZE],
    pub(crate) treenode_pool: [PoolItem; TREENODE_POOL_SIZE],

    pub input: Input,
}

impl Context {
    pub fn new() -> Self {
        Self {
            style: Style::default(),
            text_width: None,
            text_height: None,
            draw_frame: default_draw_frame,
            hover: None,
            focus: None,
            last_id: None,
            last_rect: Rect::default(),
            last_zindex: 0,
            updated_focus: false,
            frame: 0,
            hover_root: None,
            next_hover_root: None,
            scroll_target: None,
            number_edit_buf: String::with_capacity(MAX_FMT),
            number_edit: None,
            fmt_buf: String::with_capacity(MAX_FMT),
            commands: CommandList::new(),
            root_list: FixedStack::new(),
            container_stack: FixedStack::new(),
            clip_stack: FixedStack::new(),
            id_stack: FixedStack::new(),
            layout_stack: FixedStack::new(),
            container_pool: [PoolItem::default(); CONTAINER_POOL_SIZE],
            containers: [Container::default(); CONTAINER_POOL_SIZE],
            treenode_pool: [PoolItem::default(); TREENODE_POOL_SIZE],
            input: Input::default(),
        }
    }

    // The finished frame's draw list; iterate after end().
    pub fn commands(&self) -> &CommandList {
        &self.commands
    }

    pub(crate) fn measure_width(&self, font: FontId, s: &str) -> i32 {
        (self.text_width.as_ref().expect("text_width callback not set"))(font, s)
    }

    pub(crate) fn measure_height(&self, font: FontId) -> i32 {
        (self.text_height.as_ref().expect("text_height callback not set"))(font)
    }

    // Seeded by the enclosing scope (top of the id stack), so identical
    // labels under different parents still hash apart.
    pub fn get_id(&mut self, data: &[u8]) -> Id {
        let seed = match self.id_stack.is_empty() {
            true => HASH_INITIAL,
            false => self.id_stack.top().0,
        };
        let id = Id(hash(seed, data));
        self.last_id = Some(id);
        id
    }

    // Positional identity for widgets without a label: hash the address of
    // the caller-owned state slot. The slot has to stay put between frames;
    // callers whose state moves should scope the widget with push_id instead.
    pub fn get_id_from_ptr<T>(&mut self, p: *const T) -> Id {
        self.get_id(&(p as usize).to_ne_bytes())
    }

    pub fn push_id(&mut self, data: &[u8]) {
        let id = self.get_id(data);
        self.id_stack.push(id);
    }

    pub fn pop_id(&mut self) {
        self.id_stack.pop();
    }

    pub fn set_focus(&mut self, id: Option<Id>) {
        self.focus = id;
        self.updated_focus = true;
    }

    pub fn begin(&mut self) {
        assert!(self.text_width.is_some() && self.text_height.is_some(),
                "text measurement callbacks must be set before the first frame");
        self.commands.clear();
        self.root_list.clear();
        self.scroll_target = None;
        self.hover_root = self.next_hover_root.take();
        self.input.begin_frame();
        self.frame += 1;
    }

    pub fn end(&mut self) {
        assert!(self.container_stack.is_empty(), "unbalanced begin/end: container stack not empty");
        assert!(self.clip_stack.is_empty(), "unbalanced begin/end: clip stack not empty");
        assert!(self.id_stack.is_empty(), "unbalanced begin/end: id stack not empty");
        assert!(self.layout_stack.is_empty(), "unbalanced begin/end: layout stack not empty");

        // wheel input goes to whichever container the mouse was over
        if let Some(idx) = self.scroll_target {
            self.containers[idx].scroll[X] += self.input.scroll_delta[X];
            self.containers[idx].scroll[Y] += self.input.scroll_delta[Y];
        }

        // focus is a per-frame lease: if no update_control call named the
        // focused widget this frame, the widget is gone and focus goes too
        if !self.updated_focus {
            self.focus = None;
        }
        self.updated_focus = false;

        // clicking a background window brings it forward
        if !self.input.pressed.is_empty() {
            if let Some(idx) = self.next_hover_root {
                if self.containers[idx].zindex < self.last_zindex && self.containers[idx].zindex >= 0 {
                    self.bring_to_front(idx);
                }
            }
        }

        self.input.end_frame();

        // sort roots by zindex and thread the jump chain through them;
        // nothing moves, only jump destinations change
        let n = self.root_list.len();
        let mut roots = [0usize; ROOT_LIST_SIZE];
        roots[..n].copy_from_slice(self.root_list.as_slice());
        roots[..n].sort_by_key(|&i| self.containers[i].zindex);

        for i in 0..n {
            let head = self.containers[roots[i]].head.expect("root container without a head jump");
            if i == 0 {
                // the first command in the buffer is the first root's head jump
                self.commands.patch_jump(0, head + 1);
            } else {
                let tail = self.containers[roots[i - 1]].tail.expect("root container without a tail jump");
                self.commands.patch_jump(tail, head + 1);
            }
            if i == n - 1 {
                let tail = self.containers[roots[i]].tail.expect("root container without a tail jump");
                self.commands.patch_jump(tail, self.commands.len());
            }
        }
    }

    // True while the current container chain reaches the hover root. Without
    // this, widgets in a window underneath a covering window would light up.
    pub(crate) fn in_hover_root(&self) -> bool {
        let hover_root = match self.hover_root {
            Some(i) => i,
            None => return false,
        };
        for &idx in self.container_stack.as_slice().iter().rev() {
            if idx == hover_root {
                return true;
            }
            // only root containers have a head jump; stop at the nearest one
            if self.containers[idx].head.is_some() {
                break;
            }
        }
        false
    }

    pub fn mouse_over(&self, r: Rect) -> bool {
        r.contains(self.input.mouse_pos)
            && self.get_clip_rect().contains(self.input.mouse_pos)
            && self.in_hover_root()
    }

    pub fn update_control(&mut self, id: Id, r: Rect, opt: Opt) {
        let mouseover = self.mouse_over(r);

        if self.focus == Some(id) {
            self.updated_focus = true;
        }
        if opt.contains(Opt::NO_INTERACT) {
            return;
        }
        if mouseover && self.input.down.is_empty() {
            self.hover = Some(id);
        }

        if self.focus == Some(id) {
            if !self.input.pressed.is_empty() && !mouseover {
                self.set_focus(None);
            }
            if self.input.down.is_empty() && !opt.contains(Opt::HOLD_FOCUS) {
                self.set_focus(None);
            }
        }

        if self.hover == Some(id) {
            if !self.input.pressed.is_empty() {
                self.set_focus(Some(id));
            } else if !mouseover {
                self.hover = None;
            }
        }
    }

    pub fn bring_to_front(&mut self, idx: usize) {
        self.last_zindex += 1;
        self.containers[idx].zindex = self.last_zindex;
    }
}
