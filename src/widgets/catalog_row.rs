use ratatui::prelude::*;
use ratatui::widgets::{Block, Widget};
use unicode_width::UnicodeWidthStr;

use crate::catalog::CatalogItem;
use crate::resources::Resources;

const CARD_WIDTH: u16 = 16;
const CARD_GAP: u16 = 1;

#[derive(Clone)]
pub struct ViewContext<'a> {
    pub resources: &'a Resources,
}

/// Horizontally scrolling row of catalog cards: a glyph above a label,
/// one bordered card per item. Items before `offset` are scrolled out of
/// view; whatever fits after that is rendered.
#[derive(Clone)]
pub struct CatalogRow<'a> {
    items: Vec<&'a CatalogItem>,
    offset: usize,
    ctx: ViewContext<'a>,
}

impl<'a> CatalogRow<'a> {
    pub fn new(items: Vec<&'a CatalogItem>, offset: usize, ctx: ViewContext<'a>) -> Self {
        Self { items, offset, ctx }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn centered(s: &str, width: u16) -> u16 {
    let w = s.width() as u16;
    width.saturating_sub(w) / 2
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

impl Widget for CatalogRow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let mut x = area.x;
        for item in self.items.iter().skip(self.offset) {
            if x + CARD_WIDTH > area.right() {
                break;
            }
            let card = Rect::new(x, area.y, CARD_WIDTH, area.height.min(4));
            let block = Block::bordered();
            let inner = block.inner(card);
            block.render(card, buf);

            if inner.height >= 1 {
                let glyph = self.ctx.resources.glyph(item.image);
                buf.set_string(
                    inner.x + centered(glyph, inner.width),
                    inner.y,
                    glyph,
                    Style::default(),
                );
            }
            if inner.height >= 2 {
                let label = truncated(self.ctx.resources.string(item.label), inner.width);
                buf.set_string(
                    inner.x + centered(&label, inner.width),
                    inner.y + 1,
                    label,
                    Style::default(),
                );
            }

            x += CARD_WIDTH + CARD_GAP;
        }
    }
}
