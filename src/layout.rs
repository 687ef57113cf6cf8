use crate::context::Context;
use crate::geometry::*;

pub const MAX_WIDTHS: usize = 16;

// Row/column cursor for one nesting level. Coordinates inside are local to
// `body`; widgets are translated to screen space as they are handed out.
// Width/height entries of 0 mean "style default", negative -k means "fill to
// k short of the right/bottom edge".
#[derive(Clone, Copy)]
pub struct Layout {
    pub(crate) body: Rect,
    pub(crate) position: [i32; 2],
    pub(crate) size: [i32; 2],
    pub(crate) max: [i32; 2],
    pub(crate) widths: [i32; MAX_WIDTHS],
    pub(crate) items: usize,
    pub(crate) item_index: usize,
    pub(crate) next_row: i32,
    pub(crate) next: Rect,
    pub(crate) next_type: NextType,
    pub(crate) indent: i32,
}

#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub(crate) enum NextType {
    None,
    Relative,
    Absolute,
}

impl Default for NextType {
    fn default() -> Self { NextType::None }
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            body: Rect::default(), position: [0, 0], size: [0, 0], max: [0, 0],
            widths: [0; MAX_WIDTHS], items: 0, item_index: 0, next_row: 0,
            next: Rect::default(), next_type: NextType::None, indent: 0,
        }
    }
}

impl Context {
    pub(crate) fn push_layout(&mut self, body: Rect, scroll: [i32; 2]) {
        let mut layout = Layout::default();
        layout.body = rect(body.x() - scroll[X], body.y() - scroll[Y], body.w(), body.h());
        layout.max = [-0x1000000, -0x1000000];
        self.layout_stack.push(layout);
        self.layout_row(&[0], 0);
    }

    // Begins a new row. The column widths stay in effect for subsequent rows
    // until the next call, so tables repeat by just placing widgets.
    pub fn layout_row(&mut self, widths: &[i32], height: i32) {
        assert!(widths.len() <= MAX_WIDTHS, "too many row columns");
        let layout = self.layout_stack.top_mut();
        layout.widths[..widths.len()].copy_from_slice(widths);
        layout.items = widths.len();
        layout.position = [layout.indent, layout.next_row];
        layout.size[Y] = height;
        layout.item_index = 0;
    }

    pub fn layout_width(&mut self, width: i32) {
        self.layout_stack.top_mut().size[X] = width;
    }

    pub fn layout_height(&mut self, height: i32) {
        self.layout_stack.top_mut().size[Y] = height;
    }

    // Overrides the rectangle of the next widget. Relative rects are offset
    // by the layout body and advance the cursor; absolute rects are returned
    // as-is and leave the cursor alone.
    pub fn layout_set_next(&mut self, r: Rect, relative: bool) {
        let layout = self.layout_stack.top_mut();
        layout.next = r;
        layout.next_type = if relative { NextType::Relative } else { NextType::Absolute };
    }

    pub fn layout_next(&mut self) -> Rect {
        let style_size = self.style.size;
        let (padding, spacing) = (self.style.padding, self.style.spacing);
        let layout = self.layout_stack.top_mut();
        let mut res;

        if layout.next_type != NextType::None {
            let ty = layout.next_type;
            layout.next_type = NextType::None;
            res = layout.next;
            if ty == NextType::Absolute {
                self.last_rect = res;
                return res;
            }
        } else {
            // row exhausted: wrap to the next one with the same columns
            if layout.item_index == layout.items {
                layout.position = [layout.indent, layout.next_row];
                layout.item_index = 0;
            }

            res = rect(
                layout.position[X],
                layout.position[Y],
                if layout.items > 0 { layout.widths[layout.item_index] } else { layout.size[X] },
                layout.size[Y],
            );
            if res.size[X] == 0 { res.size[X] = style_size[X] + padding * 2; }
            if res.size[Y] == 0 { res.size[Y] = style_size[Y] + padding * 2; }
            if res.size[X] < 0 { res.size[X] += layout.body.size[X] - res.pos[X] + 1; }
            if res.size[Y] < 0 { res.size[Y] += layout.body.size[Y] - res.pos[Y] + 1; }

            layout.item_index += 1;
        }

        layout.position[X] += res.size[X] + spacing;
        layout.next_row = layout.next_row.max(res.pos[Y] + res.size[Y] + spacing);

        res.pos[X] += layout.body.pos[X];
        res.pos[Y] += layout.body.pos[Y];

        layout.max[X] = layout.max[X].max(res.end(X));
        layout.max[Y] = layout.max[Y].max(res.end(Y));

        self.last_rect = res;
        res
    }

    // A column is a nested layout occupying the next widget's cell. On end,
    // the parent's cursor and extent absorb the column's, translated through
    // the difference of body origins.
    pub fn layout_begin_column(&mut self) {
        let body = self.layout_next();
        self.push_layout(body, [0, 0]);
    }

    pub fn layout_end_column(&mut self) {
        let b = self.layout_stack.pop();
        let a = self.layout_stack.top_mut();
        a.position[X] = a.position[X].max(b.position[X] + b.body.pos[X] - a.body.pos[X]);
        a.next_row = a.next_row.max(b.next_row + b.body.pos[Y] - a.body.pos[Y]);
        a.max[X] = a.max[X].max(b.max[X]);
        a.max[Y] = a.max[Y].max(b.max[Y]);
    }
}

#[cfg(test)]
mod tests {
    use crate::context::Context;
    use crate::geometry::*;

    fn test_ctx() -> Context {
        let mut ctx = Context::new();
        ctx.text_width = Some(Box::new(|_, s| s.chars().count() as i32 * 6));
        ctx.text_height = Some(Box::new(|_| 10));
        ctx
    }

    #[test]
    fn fixed_default_and_fill_widths() {
        let mut ctx = test_ctx();
        ctx.push_layout(rect(10, 20, 100, 200), [0, 0]);

        ctx.layout_row(&[10, 0, -1], 8);
        let a = ctx.layout_next();
        assert_eq!(a, rect(10, 20, 10, 8));
        // 0 means style default plus padding on both sides
        let b = ctx.layout_next();
        assert_eq!(b, rect(10 + 10 + 4, 20, 68 + 10, 8));
        // -1 fills to the right edge: body width - cursor x + 1 - 1
        let c = ctx.layout_next();
        assert_eq!(c.w(), 100 - (10 + 4 + 78 + 4) + 1 - 1);
        assert_eq!(c.right(), 10 + 100);

        ctx.layout_stack.clear();
    }

    #[test]
    fn single_fill_column_spans_body() {
        let mut ctx = test_ctx();
        ctx.push_layout(rect(0, 0, 90, 90), [0, 0]);
        ctx.layout_row(&[-1], 0);
        let r = ctx.layout_next();
        assert_eq!(r.w(), 90);
        ctx.layout_stack.clear();
    }

    #[test]
    fn rows_repeat_with_same_columns() {
        let mut ctx = test_ctx();
        ctx.push_layout(rect(0, 0, 100, 100), [0, 0]);
        ctx.layout_row(&[10, 10], 5);
        let a = ctx.layout_next();
        let b = ctx.layout_next();
        let c = ctx.layout_next(); // wraps to a second row
        assert_eq!(a, rect(0, 0, 10, 5));
        assert_eq!(b, rect(14, 0, 10, 5));
        assert_eq!(c, rect(0, 9, 10, 5));
        ctx.layout_stack.clear();
    }

    #[test]
    fn scroll_offsets_body() {
        let mut ctx = test_ctx();
        ctx.push_layout(rect(0, 0, 100, 100), [0, 30]);
        ctx.layout_row(&[10], 10);
        let r = ctx.layout_next();
        assert_eq!(r.y(), -30);
        ctx.layout_stack.clear();
    }

    #[test]
    fn set_next_relative_and_absolute() {
        let mut ctx = test_ctx();
        ctx.push_layout(rect(10, 10, 100, 100), [0, 0]);

        ctx.layout_set_next(rect(5, 5, 20, 20), true);
        let r = ctx.layout_next();
        assert_eq!(r, rect(15, 15, 20, 20));
        assert_eq!(ctx.last_rect, r);

        ctx.layout_set_next(rect(500, 500, 20, 20), false);
        let r = ctx.layout_next();
        assert_eq!(r, rect(500, 500, 20, 20));
        // absolute rects don't move the cursor or grow the extent
        assert!(ctx.layout_stack.top().max[X] < 500);
        ctx.layout_stack.clear();
    }

    #[test]
    fn columns_merge_back() {
        let mut ctx = test_ctx();
        ctx.push_layout(rect(0, 0, 200, 200), [0, 0]);
        ctx.layout_row(&[40, 40], 0);
        ctx.layout_begin_column();
        ctx.layout_row(&[10], 10);
        ctx.layout_next();
        ctx.layout_next();
        ctx.layout_end_column();
        // the next widget in the parent row starts right of the column
        let r = ctx.layout_next();
        assert_eq!(r.x(), 44);
        // the parent's next row clears the column's two stacked widgets
        let layout = *ctx.layout_stack.top();
        assert!(layout.next_row >= 28);
        ctx.layout_stack.clear();
    }
}
