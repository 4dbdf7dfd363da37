//! One-line terminal rendering of a [`Navigation`].

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::pager::{Navigation, PagerLink};
use crate::ui::theme::{PAGER_CURRENT, PAGER_SHORTCUT, PAGER_TEXT};

const SEPARATOR: &str = " ";

pub struct PagerBar<'a> {
    nav: &'a Navigation,
    alignment: Alignment,
}

impl<'a> PagerBar<'a> {
    pub fn new(nav: &'a Navigation) -> Self {
        Self {
            nav,
            alignment: Alignment::Left,
        }
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// The styled line, for callers composing their own widgets.
    pub fn line(&self) -> Line<'a> {
        let nav = self.nav;
        let mut spans = Vec::with_capacity(nav.links.len() * 2);
        for (idx, link) in nav.links.iter().enumerate() {
            if idx > 0 {
                spans.push(Span::raw(SEPARATOR));
            }
            spans.push(Span::styled(link.text.as_str(), link_style(link)));
        }
        Line::from(spans)
    }
}

fn link_style(link: &PagerLink) -> Style {
    if link.aria_current && !link.kind.is_shortcut() {
        Style::default()
            .fg(PAGER_CURRENT)
            .add_modifier(Modifier::BOLD)
    } else if link.kind.is_shortcut() {
        Style::default().fg(PAGER_SHORTCUT).add_modifier(Modifier::DIM)
    } else {
        Style::default().fg(PAGER_TEXT)
    }
}

impl Widget for PagerBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.line())
            .alignment(self.alignment)
            .render(area, buf);
    }
}
