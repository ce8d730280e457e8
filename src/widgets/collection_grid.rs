use ratatui::prelude::*;
use ratatui::widgets::{Block, Widget};
use unicode_width::UnicodeWidthStr;

use crate::catalog::CatalogItem;
use crate::resources::Resources;

const CARD_WIDTH: u16 = 26;
const CARD_GAP: u16 = 2;
const GRID_ROWS: u16 = 2;

#[derive(Clone)]
pub struct ViewContext<'a> {
    pub resources: &'a Resources,
}

/// Fixed two-row horizontal grid of wide collection cards: a glyph beside a
/// label. Items fill column by column, so consecutive items stack vertically
/// before a new column starts. `offset` scrolls whole columns out of view.
#[derive(Clone)]
pub struct CollectionGrid<'a> {
    items: &'a [CatalogItem],
    offset: usize,
    ctx: ViewContext<'a>,
}

impl<'a> CollectionGrid<'a> {
    pub fn new(items: &'a [CatalogItem], offset: usize, ctx: ViewContext<'a>) -> Self {
        Self { items, offset, ctx }
    }

    pub fn columns(&self) -> usize {
        self.items.len().div_ceil(GRID_ROWS as usize)
    }
}

fn truncated(s: &str, max_width: u16) -> String {
    let mut out = String::new();
    let mut used = 0u16;
    for c in s.chars() {
        let w = c.to_string().width() as u16;
        if used + w > max_width {
            break;
        }
        used += w;
        out.push(c);
    }
    out
}

impl Widget for CollectionGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        if area.width == 0 || area.height < GRID_ROWS {
            return;
        }

        let row_height = (area.height / GRID_ROWS).min(4);
        let mut x = area.x;
        let mut column = self.offset;
        loop {
            if x + CARD_WIDTH > area.right() {
                break;
            }
            let base = column * GRID_ROWS as usize;
            if base >= self.items.len() {
                break;
            }
            for row in 0..GRID_ROWS {
                let Some(item) = self.items.get(base + row as usize) else {
                    break;
                };
                let card = Rect::new(x, area.y + row * row_height, CARD_WIDTH, row_height);
                let block = Block::bordered();
                let inner = block.inner(card);
                block.render(card, buf);
                if inner.height == 0 {
                    continue;
                }

                let glyph = self.ctx.resources.glyph(item.image);
                let glyph_width = glyph.width() as u16;
                buf.set_string(inner.x + 1, inner.y, glyph, Style::default());

                let label_x = inner.x + 1 + glyph_width + 2;
                let label_width = inner.right().saturating_sub(label_x);
                let label = truncated(self.ctx.resources.string(item.label), label_width);
                buf.set_string(label_x, inner.y, label, Style::default());
            }
            x += CARD_WIDTH + CARD_GAP;
            column += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::catalog::FAVORITE_COLLECTIONS;

    fn row_text(buffer: &Buffer, y: u16) -> String {
        let area = buffer.area;
        (area.x..area.right())
            .map(|x| buffer[(x, y)].symbol())
            .collect()
    }

    fn buffer_content(buffer: &Buffer) -> String {
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_render_does_not_panic() {
        let resources = Resources::default();
        let ctx = ViewContext {
            resources: &resources,
        };
        let widget = CollectionGrid::new(&FAVORITE_COLLECTIONS, 0, ctx);
        let area = Rect::new(0, 0, 90, 6);
        let mut buffer = Buffer::empty(area);
        widget.render(area, &mut buffer);
    }

    #[test]
    fn test_columns_count() {
        let resources = Resources::default();
        let ctx = ViewContext {
            resources: &resources,
        };
        let widget = CollectionGrid::new(&FAVORITE_COLLECTIONS, 0, ctx);
        assert_eq!(widget.columns(), 3);
    }

    #[test]
    fn test_items_fill_column_major() {
        let resources = Resources::default();
        let ctx = ViewContext {
            resources: &resources,
        };
        let widget = CollectionGrid::new(&FAVORITE_COLLECTIONS, 0, ctx);
        let area = Rect::new(0, 0, 90, 6);
        let mut buffer = Buffer::empty(area);
        widget.render(area, &mut buffer);

        // First column: item 0 on the top row, item 1 stacked below it.
        let top = row_text(&buffer, 1);
        let bottom = row_text(&buffer, 4);
        assert!(top.contains("Short mantras"));
        assert!(bottom.contains("Nature meditations"));
    }

    #[test]
    fn test_offset_scrolls_whole_columns() {
        let resources = Resources::default();
        let ctx = ViewContext {
            resources: &resources,
        };
        let widget = CollectionGrid::new(&FAVORITE_COLLECTIONS, 1, ctx);
        let area = Rect::new(0, 0, 90, 6);
        let mut buffer = Buffer::empty(area);
        widget.render(area, &mut buffer);

        let content = buffer_content(&buffer);
        assert!(!content.contains("Short mantras"));
        assert!(content.contains("Stress and anxiety"));
    }

    #[test]
    fn test_render_small_area() {
        let resources = Resources::default();
        let ctx = ViewContext {
            resources: &resources,
        };
        let widget = CollectionGrid::new(&FAVORITE_COLLECTIONS, 0, ctx);
        let area = Rect::new(0, 0, 10, 1);
        let mut buffer = Buffer::empty(area);
        widget.render(area, &mut buffer);
    }

    #[test]
    fn test_render_never_filters() {
        let resources = Resources::default();
        let ctx = ViewContext {
            resources: &resources,
        };
        let widget = CollectionGrid::new(&FAVORITE_COLLECTIONS, 0, ctx);
        let area = Rect::new(0, 0, 200, 6);
        let mut buffer = Buffer::empty(area);
        widget.render(area, &mut buffer);

        let content = buffer_content(&buffer);
        for item in &FAVORITE_COLLECTIONS {
            assert!(content.contains(resources.string(item.label)));
        }
    }
}
