//! Scroll position and one-shot view requests.

use advisor_types::ui::UiOptions;

const LINE_STEP: u16 = 3;
const PAGE_STEP: u16 = 10;

/// Presentation state owned by the engine and driven by the UI.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Offset of the first visible row of the page.
    pub scroll: u16,
    /// Maximum scroll offset (content length - viewport).
    pub scroll_max: u16,
    /// Whether the results region has been laid out at least once.
    pub results_mounted: bool,
    /// Request to bring the results region into view (handled by the UI).
    pub scroll_to_results: bool,
    /// UI options (theme, motion, glyphs).
    pub ui_options: UiOptions,
}

impl ViewState {
    #[must_use]
    pub fn new(ui_options: UiOptions) -> Self {
        Self {
            ui_options,
            ..Self::default()
        }
    }

    /// Ask the UI to scroll to the results. Dropped if they were never laid out.
    pub fn request_scroll_to_results(&mut self) {
        if self.results_mounted {
            self.scroll_to_results = true;
        }
    }

    pub fn take_scroll_to_results(&mut self) -> bool {
        std::mem::take(&mut self.scroll_to_results)
    }

    pub fn update_scroll_max(&mut self, max: u16) {
        self.scroll_max = max;
        self.scroll = self.scroll.min(max);
    }

    pub fn scroll_to(&mut self, offset: u16) {
        self.scroll = offset.min(self.scroll_max);
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(LINE_STEP);
    }

    pub fn scroll_down(&mut self) {
        self.scroll_to(self.scroll.saturating_add(LINE_STEP));
    }

    pub fn scroll_page_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(PAGE_STEP);
    }

    pub fn scroll_page_down(&mut self) {
        self.scroll_to(self.scroll.saturating_add(PAGE_STEP));
    }
}
