//! Widget rendering a [`ViewStateController`].

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap};

use super::theme::{spinner_frame, COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_LOADING};
use crate::error::ErrorValue;
use crate::presentation::{ErrorViewStyle, LoadingStyle, Presentation, PresentationConfig};
use crate::view_state::ViewStateController;

/// Renders whatever a controller's [`Presentation`] calls for inside a
/// bordered panel, with loading indicators drawn per [`PresentationConfig`].
///
/// # Example
///
/// ```
/// use ratatui::{buffer::Buffer, layout::Rect, text::Text, widgets::Widget};
/// use view_state_controller::ui::StateView;
/// use view_state_controller::{ViewState, ViewStateController};
///
/// let mut controller = ViewStateController::new();
/// controller.set_state(ViewState::Loaded(3));
///
/// let area = Rect::new(0, 0, 30, 5);
/// let mut buf = Buffer::empty(area);
/// StateView::new(&controller, |n: &i32| Text::raw(format!("{n} rows"))).render(area, &mut buf);
/// ```
pub struct StateView<'a, Info, F> {
    controller: &'a ViewStateController<Info>,
    render_info: F,
    placeholder: Text<'a>,
    title: String,
    config: PresentationConfig,
    error_style: ErrorViewStyle,
    tick: u64,
}

impl<'a, Info, F> StateView<'a, Info, F>
where
    F: Fn(&Info) -> Text<'static>,
{
    /// `render_info` turns loaded info into the panel body. It returns owned
    /// text since it runs on every frame.
    pub fn new(controller: &'a ViewStateController<Info>, render_info: F) -> Self {
        Self {
            controller,
            render_info,
            placeholder: Text::default(),
            title: String::new(),
            config: PresentationConfig::default(),
            error_style: ErrorViewStyle::default(),
            tick: 0,
        }
    }

    /// Body shown before anything has loaded.
    pub fn placeholder(mut self, placeholder: impl Into<Text<'a>>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn config(mut self, config: PresentationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn error_style(mut self, style: ErrorViewStyle) -> Self {
        self.error_style = style;
        self
    }

    /// Animation tick, selects the spinner frame.
    pub fn tick(mut self, tick: u64) -> Self {
        self.tick = tick;
        self
    }

    fn error_text(&self, error: &ErrorValue) -> Text<'static> {
        let lines = self.error_style.lines(&**error);
        let last = lines.len().saturating_sub(1);
        let has_hint = self.error_style.retry_hint.is_some();

        lines
            .into_iter()
            .enumerate()
            .map(|(i, line)| {
                let style = if i == 0 {
                    Style::default().fg(COLOR_ERROR).add_modifier(Modifier::BOLD)
                } else if has_hint && i == last {
                    Style::default().fg(COLOR_DIM)
                } else {
                    Style::default()
                };
                Line::from(Span::styled(line, style))
            })
            .collect::<Vec<_>>()
            .into()
    }
}

impl<'a, Info, F> Widget for StateView<'a, Info, F>
where
    F: Fn(&Info) -> Text<'static>,
{
    fn render(self, area: Rect, buf: &mut Buffer) {
        let presentation = self.controller.presentation();
        let loading = self
            .config
            .loading_style(&presentation)
            .filter(|style| *style != LoadingStyle::Hidden);
        let spinner = spinner_frame(self.tick);

        let mut title = self.title.clone();
        if loading == Some(LoadingStyle::Title) {
            title = format!("{} {}", title, spinner).trim().to_string();
        }
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(COLOR_BORDER));
        if !title.is_empty() {
            block = block.title(Span::styled(
                format!(" {} ", title),
                Style::default().fg(COLOR_ACCENT),
            ));
        }
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.is_empty() {
            return;
        }

        let mut body_area = inner;
        if loading == Some(LoadingStyle::Banner) {
            let banner = Rect { height: 1, ..inner };
            Paragraph::new(format!("{} Refreshing…", spinner))
                .style(Style::default().fg(COLOR_LOADING))
                .render(banner, buf);
            body_area = Rect {
                y: inner.y + 1,
                height: inner.height - 1,
                ..inner
            };
        }

        let (body, alignment) = match presentation {
            Presentation::Loaded { info, .. } => ((self.render_info)(info), Alignment::Left),
            Presentation::Errored { error, .. } => (self.error_text(error), Alignment::Center),
            Presentation::InitialLoading | Presentation::Content => {
                (self.placeholder.clone(), Alignment::Center)
            }
        };

        let mut body_style = Style::default();
        if loading.is_some_and(LoadingStyle::dims_content) {
            body_style = body_style.add_modifier(Modifier::DIM);
        }
        Paragraph::new(body)
            .style(body_style)
            .alignment(alignment)
            .wrap(Wrap { trim: false })
            .render(body_area, buf);

        match loading {
            Some(LoadingStyle::Material) => {
                let row = Rect {
                    y: inner.y + inner.height / 2,
                    height: 1,
                    ..inner
                };
                Clear.render(row, buf);
                Paragraph::new(format!("{} Loading…", spinner))
                    .style(Style::default().fg(COLOR_LOADING))
                    .alignment(Alignment::Center)
                    .render(row, buf);
            }
            Some(LoadingStyle::Corner) => {
                // Drawn on the top border so the error panel stays readable.
                let label = format!("{} Retrying", spinner);
                let width = (label.chars().count() as u16).min(inner.width);
                let corner = Rect {
                    x: inner.x + inner.width - width,
                    y: area.y,
                    width,
                    height: 1,
                };
                Clear.render(corner, buf);
                Paragraph::new(label)
                    .style(Style::default().fg(COLOR_LOADING))
                    .render(corner, buf);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view_state::ViewState;

    fn render_to_string<F>(view: StateView<'_, u32, F>, width: u16, height: u16) -> String
    where
        F: Fn(&u32) -> Text<'static>,
    {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        view.render(area, &mut buf);
        buf.content().iter().map(|cell| cell.symbol()).collect()
    }

    fn rows(n: &u32) -> Text<'static> {
        Text::raw(format!("{} rows", n))
    }

    #[test]
    fn test_renders_placeholder_before_loading() {
        let controller = ViewStateController::<u32>::new();
        let view = StateView::new(&controller, rows)
            .title("Items")
            .placeholder("Press f to fetch");
        let out = render_to_string(view, 40, 6);
        assert!(out.contains("Items"));
        assert!(out.contains("Press f to fetch"));
        assert!(!out.contains("Loading"));
    }

    #[test]
    fn test_renders_initial_loading_indicator() {
        let mut controller = ViewStateController::<u32>::new();
        controller.set_state(ViewState::Loading);
        let out = render_to_string(StateView::new(&controller, rows), 40, 6);
        assert!(out.contains("Loading…"));
    }

    #[test]
    fn test_renders_loaded_info() {
        let mut controller = ViewStateController::new();
        controller.set_state(ViewState::Loading);
        controller.set_state(ViewState::Loaded(42));
        let out = render_to_string(StateView::new(&controller, rows), 40, 6);
        assert!(out.contains("42 rows"));
        assert!(!out.contains("Refreshing"));
    }

    #[test]
    fn test_renders_banner_while_reloading_info() {
        let mut controller = ViewStateController::new();
        controller.set_state(ViewState::Loaded(42));
        controller.set_state(ViewState::Loading);
        let out = render_to_string(StateView::new(&controller, rows), 40, 6);
        assert!(out.contains("Refreshing…"));
        assert!(out.contains("42 rows"));
    }

    #[test]
    fn test_renders_error_panel() {
        let mut controller = ViewStateController::<u32>::new();
        controller.set_state(ViewState::Loading);
        controller.set_state(ViewState::errored("net-fail"));
        let out = render_to_string(StateView::new(&controller, rows), 40, 8);
        assert!(out.contains("Something went wrong"));
        assert!(out.contains("net-fail"));
        assert!(out.contains("[r] Retry"));
    }

    #[test]
    fn test_renders_corner_indicator_while_retrying() {
        let mut controller = ViewStateController::<u32>::new();
        controller.set_state(ViewState::errored("net-fail"));
        controller.set_state(ViewState::Loading);
        let out = render_to_string(StateView::new(&controller, rows), 40, 8);
        assert!(out.contains("Retrying"));
        assert!(out.contains("net-fail"));
    }

    #[test]
    fn test_title_style_puts_spinner_in_title() {
        let mut controller = ViewStateController::<u32>::new();
        controller.set_state(ViewState::Loading);
        let config = PresentationConfig::default().with_initial_loading(LoadingStyle::Title);
        let view = StateView::new(&controller, rows)
            .title("Items")
            .config(config)
            .tick(1);
        let out = render_to_string(view, 40, 6);
        assert!(out.contains("Items ⠙"));
        assert!(!out.contains("Loading…"));
    }

    #[test]
    fn test_hidden_style_draws_no_indicator() {
        let mut controller = ViewStateController::<u32>::new();
        controller.set_state(ViewState::Loaded(1));
        controller.set_state(ViewState::Loading);
        let config = PresentationConfig::default().with_loading_after_info(LoadingStyle::Hidden);
        let out = render_to_string(StateView::new(&controller, rows).config(config), 40, 6);
        assert!(!out.contains("Refreshing"));
        assert!(out.contains("1 rows"));
    }

    #[test]
    fn test_custom_error_style_hides_message_and_hint() {
        let mut controller = ViewStateController::<u32>::new();
        controller.set_state(ViewState::Loading);
        controller.set_state(ViewState::errored("net-fail"));
        let style = ErrorViewStyle::default()
            .with_title("Could not load items")
            .with_show_message(false)
            .with_retry_hint(None);
        let out = render_to_string(StateView::new(&controller, rows).error_style(style), 40, 8);

        assert!(out.contains("Could not load items"));
        assert!(!out.contains("Something went wrong"));
        assert!(!out.contains("net-fail"));
        assert!(!out.contains("Retry"));
    }

    #[test]
    fn test_error_text_dims_only_the_retry_hint() {
        let controller = ViewStateController::<u32>::new();
        let state = ViewState::<u32>::errored("net-fail");
        let error = state.error().expect("errored state carries an error");
        let dim = Style::default().fg(COLOR_DIM);

        let with_hint = StateView::new(&controller, rows).error_text(error);
        assert_eq!(with_hint.lines.len(), 4);
        assert_eq!(with_hint.lines[3].spans[0].content, "[r] Retry");
        assert_eq!(with_hint.lines[3].spans[0].style, dim);

        let without_hint = StateView::new(&controller, rows)
            .error_style(ErrorViewStyle::default().with_retry_hint(None))
            .error_text(error);
        assert_eq!(without_hint.lines.len(), 2);
        assert_eq!(without_hint.lines[1].spans[0].content, "net-fail");
        assert_eq!(without_hint.lines[1].spans[0].style, Style::default());

        let title_only = StateView::new(&controller, rows)
            .error_style(
                ErrorViewStyle::default()
                    .with_show_message(false)
                    .with_retry_hint(None),
            )
            .error_text(error);
        assert_eq!(title_only.lines.len(), 1);
        assert_eq!(
            title_only.lines[0].spans[0].style,
            Style::default().fg(COLOR_ERROR).add_modifier(Modifier::BOLD)
        );
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        let mut controller = ViewStateController::<u32>::new();
        controller.set_state(ViewState::errored("net-fail"));
        controller.set_state(ViewState::Loading);
        let _ = render_to_string(StateView::new(&controller, rows), 2, 2);
        let _ = render_to_string(StateView::new(&controller, rows), 5, 3);
    }
}
