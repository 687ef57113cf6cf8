// Immediate-mode UI core. The application re-declares its whole UI every
// frame against one long-lived Context; widgets emit a flat list of draw
// commands (rect/text/icon/clip) that the application's own renderer replays.
// Nothing here rasterizes, polls events or measures glyphs; text metrics come
// from client callbacks set on the context.

pub mod geometry;
pub mod util;
pub mod pool;
pub mod command;
pub mod input;
pub mod style;
pub mod layout;
pub mod draw;
pub mod context;
pub mod container;
pub mod widgets;

pub use crate::command::{CommandList, Commands, DrawCommand};
pub use crate::container::Container;
pub use crate::context::{Context, Id, Opt, ResultFlags};
pub use crate::draw::{Clip, UNCLIPPED_RECT};
pub use crate::geometry::{color, rect, vec2, Color, Rect, X, Y};
pub use crate::input::{Input, Key, MouseButton};
pub use crate::style::{ColorId, FontId, IconId, Style};

pub type Real = f32;

pub const VERSION: &str = "2.02";
