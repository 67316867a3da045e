//! List rendering with per-row modification indicators.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Paragraph, Widget};

use super::theme::{spinner_frame, COLOR_ACCENT, COLOR_DIM, COLOR_LOADING};
use crate::view_state::ViewStateController;

/// A row identified by the id used in the controller's modifying ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    pub id: String,
    pub label: String,
}

impl ListRow {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Rows of a loaded list. Rows the controller reports as modifying get a
/// spinner and are dimmed; the rest of the list stays interactive.
pub struct ModifyingList<'a, Info> {
    controller: &'a ViewStateController<Info>,
    rows: &'a [ListRow],
    selected: Option<usize>,
    tick: u64,
}

impl<'a, Info> ModifyingList<'a, Info> {
    pub fn new(controller: &'a ViewStateController<Info>, rows: &'a [ListRow]) -> Self {
        Self {
            controller,
            rows,
            selected: None,
            tick: 0,
        }
    }

    pub fn selected(mut self, selected: Option<usize>) -> Self {
        self.selected = selected;
        self
    }

    pub fn tick(mut self, tick: u64) -> Self {
        self.tick = tick;
        self
    }

    /// One line per row.
    pub fn lines(&self) -> Vec<Line<'static>> {
        self.rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let is_selected = self.selected == Some(i);
                let cursor = if is_selected { "› " } else { "  " };

                if self.controller.is_modifying(&row.id) {
                    Line::from(vec![
                        Span::raw(cursor),
                        Span::styled(
                            format!("{} ", spinner_frame(self.tick)),
                            Style::default().fg(COLOR_LOADING),
                        ),
                        Span::styled(
                            format!("{} (updating…)", row.label),
                            Style::default().fg(COLOR_DIM),
                        ),
                    ])
                } else {
                    let style = if is_selected {
                        Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
                    } else {
                        Style::default()
                    };
                    Line::from(vec![
                        Span::raw(cursor),
                        Span::raw("• "),
                        Span::styled(row.label.clone(), style),
                    ])
                }
            })
            .collect()
    }

    pub fn text(&self) -> Text<'static> {
        Text::from(self.lines())
    }
}

impl<Info> Widget for ModifyingList<'_, Info> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.text()).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    fn rows() -> Vec<ListRow> {
        vec![ListRow::new("1", "Apples"), ListRow::new("2", "Pears")]
    }

    #[test]
    fn test_plain_rows() {
        let controller = ViewStateController::<()>::new();
        let rows = rows();
        let lines = ModifyingList::new(&controller, &rows).lines();

        assert_eq!(lines.len(), 2);
        assert_eq!(line_text(&lines[0]), "  • Apples");
        assert_eq!(line_text(&lines[1]), "  • Pears");
    }

    #[test]
    fn test_selected_row_has_cursor() {
        let controller = ViewStateController::<()>::new();
        let rows = rows();
        let lines = ModifyingList::new(&controller, &rows).selected(Some(1)).lines();

        assert_eq!(line_text(&lines[0]), "  • Apples");
        assert_eq!(line_text(&lines[1]), "› • Pears");
    }

    #[test]
    fn test_modifying_row_shows_spinner() {
        let mut controller = ViewStateController::<()>::new();
        controller.set_modifying_ids(Some(vec!["2".to_string()]));
        let rows = rows();
        let lines = ModifyingList::new(&controller, &rows).tick(2).lines();

        assert_eq!(line_text(&lines[0]), "  • Apples");
        assert_eq!(line_text(&lines[1]), "  ⠹ Pears (updating…)");
    }

    #[test]
    fn test_widget_renders_rows() {
        let controller = ViewStateController::<()>::new();
        let rows = rows();
        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);
        ModifyingList::new(&controller, &rows).render(area, &mut buf);

        let out: String = buf.content().iter().map(|cell| cell.symbol()).collect();
        assert!(out.contains("Apples"));
        assert!(out.contains("Pears"));
    }
}
