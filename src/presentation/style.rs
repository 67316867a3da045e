//! Presentation styling options.

use super::Presentation;

/// How a loading indicator is drawn over a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadingStyle {
    /// No indicator; content is drawn as is.
    Hidden,
    /// Content dimmed with a centered indicator on top.
    #[default]
    Material,
    /// A one-line indicator row above the content.
    Banner,
    /// Indicator drawn in the top-right corner over the content.
    Corner,
    /// Indicator appended to the block title.
    Title,
}

impl LoadingStyle {
    /// Whether the content underneath is dimmed while loading.
    pub fn dims_content(self) -> bool {
        matches!(self, LoadingStyle::Material)
    }
}

/// Which [`LoadingStyle`] applies in each loading situation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresentationConfig {
    /// First fetch, nothing settled yet
    pub initial_loading: LoadingStyle,
    /// Fetch in flight while showing loaded info
    pub loading_after_info: LoadingStyle,
    /// Fetch in flight while showing an error
    pub loading_after_error: LoadingStyle,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            initial_loading: LoadingStyle::Material,
            loading_after_info: LoadingStyle::Banner,
            loading_after_error: LoadingStyle::Corner,
        }
    }
}

impl PresentationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_initial_loading(mut self, style: LoadingStyle) -> Self {
        self.initial_loading = style;
        self
    }

    pub fn with_loading_after_info(mut self, style: LoadingStyle) -> Self {
        self.loading_after_info = style;
        self
    }

    pub fn with_loading_after_error(mut self, style: LoadingStyle) -> Self {
        self.loading_after_error = style;
        self
    }

    /// The loading style for `presentation`, or `None` if nothing is loading.
    pub fn loading_style<Info>(&self, presentation: &Presentation<'_, Info>) -> Option<LoadingStyle> {
        match presentation {
            Presentation::InitialLoading => Some(self.initial_loading),
            Presentation::Loaded { reloading: true, .. } => Some(self.loading_after_info),
            Presentation::Errored { reloading: true, .. } => Some(self.loading_after_error),
            _ => None,
        }
    }
}

/// Look of the error panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorViewStyle {
    pub title: String,
    /// Whether the error's own message is shown under the title
    pub show_message: bool,
    /// Hint telling the user how to retry, if retrying is possible
    pub retry_hint: Option<String>,
}

impl Default for ErrorViewStyle {
    fn default() -> Self {
        Self {
            title: "Something went wrong".to_string(),
            show_message: true,
            retry_hint: Some("[r] Retry".to_string()),
        }
    }
}

impl ErrorViewStyle {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_show_message(mut self, show: bool) -> Self {
        self.show_message = show;
        self
    }

    pub fn with_retry_hint(mut self, hint: Option<String>) -> Self {
        self.retry_hint = hint;
        self
    }

    /// Lines of the error panel for `error`.
    pub fn lines(&self, error: &dyn std::error::Error) -> Vec<String> {
        let mut lines = vec![self.title.clone()];
        if self.show_message {
            lines.push(error.to_string());
        }
        if let Some(hint) = &self.retry_hint {
            lines.push(String::new());
            lines.push(hint.clone());
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view_state::{ViewState, ViewStateController};

    #[test]
    fn test_default_styles() {
        let config = PresentationConfig::default();
        assert_eq!(config.initial_loading, LoadingStyle::Material);
        assert_eq!(config.loading_after_info, LoadingStyle::Banner);
        assert_eq!(config.loading_after_error, LoadingStyle::Corner);
        assert!(LoadingStyle::Material.dims_content());
        assert!(!LoadingStyle::Banner.dims_content());
    }

    #[test]
    fn test_loading_style_per_situation() {
        let config = PresentationConfig::new()
            .with_initial_loading(LoadingStyle::Title)
            .with_loading_after_info(LoadingStyle::Hidden);

        let mut controller = ViewStateController::<&str>::new();
        assert_eq!(config.loading_style(&controller.presentation()), None);

        controller.set_state(ViewState::Loading);
        assert_eq!(
            config.loading_style(&controller.presentation()),
            Some(LoadingStyle::Title)
        );

        controller.set_state(ViewState::Loaded("rows"));
        assert_eq!(config.loading_style(&controller.presentation()), None);

        controller.set_state(ViewState::Loading);
        assert_eq!(
            config.loading_style(&controller.presentation()),
            Some(LoadingStyle::Hidden)
        );

        controller.set_state(ViewState::errored("boom"));
        controller.set_state(ViewState::Loading);
        assert_eq!(
            config.loading_style(&controller.presentation()),
            Some(LoadingStyle::Corner)
        );
    }

    #[test]
    fn test_error_view_lines() {
        let error = crate::error::DebugError::DEFAULT;

        let lines = ErrorViewStyle::default().lines(&error);
        assert_eq!(
            lines,
            vec![
                "Something went wrong".to_string(),
                "mock error (code 12)".to_string(),
                String::new(),
                "[r] Retry".to_string(),
            ]
        );

        let lines = ErrorViewStyle::default()
            .with_title("Offline")
            .with_show_message(false)
            .with_retry_hint(None)
            .lines(&error);
        assert_eq!(lines, vec!["Offline".to_string()]);
    }
}
