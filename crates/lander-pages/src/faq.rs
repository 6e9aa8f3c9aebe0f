/// FAQ accordion state: at most one entry is expanded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FaqAccordion {
    open: Option<usize>,
}

impl FaqAccordion {
    /// Accordion with `open` expanded.
    #[must_use]
    pub fn with_open(open: Option<usize>) -> Self {
        Self { open }
    }

    /// Toggle entry `index`. Toggling the open entry closes it; any other
    /// entry replaces the open one.
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    /// Expanded entry, if any.
    #[must_use]
    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    /// Whether `index` is expanded.
    #[must_use]
    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }
}
