//! Static information page.

use lander_renderer::render_info_page;

use crate::view::PageView;

/// Static information page. Has no content dependency.
#[derive(Debug, Clone, Copy, Default)]
pub struct InfoPage;

impl InfoPage {
    /// Compose the page.
    #[must_use]
    pub fn render(self) -> PageView {
        PageView::bare(render_info_page())
    }
}
