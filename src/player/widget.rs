//! Ratatui widgets drawing terminal boxes and the scrolled page.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::Widget;

use crate::page::{Page, CONTENT_INDENT, PADDING_ROWS, TITLE_ROWS};
use crate::sequencer::{Child, Line, Sequencer};
use crate::theme::{ClassColors, Theme};

const DOT: &str = "●";

/// One terminal box: title bar, container rows, bottom padding.
///
/// `skip` drops rows from the top so a box scrolled partly out of the
/// viewport renders its lower part only.
pub struct TerminalWidget<'a> {
    sequencer: &'a Sequencer,
    theme: &'a Theme,
    classes: &'a ClassColors,
    title: String,
    focused: bool,
    skip: usize,
}

impl<'a> TerminalWidget<'a> {
    pub fn new(sequencer: &'a Sequencer, theme: &'a Theme, classes: &'a ClassColors) -> Self {
        Self {
            sequencer,
            theme,
            classes,
            title: String::new(),
            focused: false,
            skip: 0,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn skip(mut self, rows: usize) -> Self {
        self.skip = rows;
        self
    }

    pub fn height(&self) -> usize {
        TITLE_ROWS + self.sequencer.container().layout_height() + PADDING_ROWS
    }

    fn render_title(&self, x: u16, y: u16, width: u16, buf: &mut Buffer) {
        for (i, color) in self.theme.dots.iter().enumerate() {
            let dx = 1 + 2 * i as u16;
            if dx < width {
                buf.set_string(x + dx, y, DOT, Style::default().fg(*color));
            }
        }
        if !self.title.is_empty() && width > 8 {
            let style = if self.focused {
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.theme.text_secondary)
            };
            let line = TextLine::from(Span::styled(self.title.clone(), style));
            buf.set_line(x + 8, y, &line, width - 8);
        }
    }

    /// Content of container row `index`, or `None` for a blank row.
    fn content_row(&self, index: usize) -> Option<TextLine<'a>> {
        match *self.sequencer.container().children().get(index)? {
            Child::Line(line) => self.line_spans(&self.sequencer.lines()[line]),
            Child::Control {
                kind,
                visible: true,
            } => Some(TextLine::from(Span::styled(
                kind.label(),
                Style::default()
                    .fg(self.theme.control)
                    .add_modifier(Modifier::UNDERLINED),
            ))),
            Child::Control { visible: false, .. } => None,
        }
    }

    fn line_spans(&self, line: &'a Line) -> Option<TextLine<'a>> {
        if !line.visible {
            return None;
        }
        let line_class = line.spec.class.as_deref();
        let mut spans: Vec<Span<'a>> = line
            .nodes
            .iter()
            .filter(|node| !node.text.is_empty())
            .map(|node| {
                let style = if node.prompt {
                    Style::default().fg(self.theme.accent)
                } else {
                    let color = self
                        .classes
                        .get(node.class.as_deref())
                        .or_else(|| self.classes.get(line_class))
                        .unwrap_or(self.theme.text_primary);
                    Style::default().fg(color)
                };
                Span::styled(node.text.as_str(), style)
            })
            .collect();
        if let Some(cursor) = &line.cursor {
            spans.push(Span::styled(
                cursor.as_str(),
                Style::default().fg(self.theme.cursor),
            ));
        }
        Some(TextLine::from(spans))
    }
}

impl Widget for TerminalWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(
            area,
            Style::default()
                .fg(self.theme.text_primary)
                .bg(self.theme.background),
        );
        let indent = CONTENT_INDENT as u16;
        let content_width = area.width.saturating_sub(indent);
        for dy in 0..area.height {
            let row = self.skip + dy as usize;
            let y = area.y + dy;
            if row < TITLE_ROWS {
                self.render_title(area.x, y, area.width, buf);
            } else if let Some(line) = self.content_row(row - TITLE_ROWS) {
                if content_width > 0 {
                    buf.set_line(area.x + indent, y, &line, content_width);
                }
            }
        }
    }
}

/// Every terminal box of a page that intersects the viewport.
pub struct PageView<'a> {
    page: &'a Page,
    theme: &'a Theme,
    classes: &'a ClassColors,
}

impl<'a> PageView<'a> {
    pub fn new(page: &'a Page, theme: &'a Theme, classes: &'a ClassColors) -> Self {
        Self {
            page,
            theme,
            classes,
        }
    }
}

impl Widget for PageView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let scroll = self.page.scroll();
        let view_end = scroll + area.height as usize;
        let count = self.page.terminals().len();
        let tops = self.page.box_tops();

        for (index, (terminal, top)) in self.page.terminals().iter().zip(tops).enumerate() {
            let bottom = top + terminal.box_height();
            let start = top.max(scroll);
            let end = bottom.min(view_end);
            if start >= end {
                continue;
            }
            let rect = Rect::new(
                area.x,
                area.y + (start - scroll) as u16,
                area.width,
                (end - start) as u16,
            );
            let title = if count > 1 {
                format!("{}/{}", index + 1, count)
            } else {
                String::new()
            };
            TerminalWidget::new(&terminal.sequencer, self.theme, self.classes)
                .title(title)
                .focused(index == self.page.focus())
                .skip(start - top)
                .render(rect, buf);
        }
    }
}
