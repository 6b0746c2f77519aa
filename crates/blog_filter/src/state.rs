use shared::domain::ALL_CATEGORIES;

/// Live filter inputs for the blog listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub selected_category: String,
    pub search_query: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            selected_category: ALL_CATEGORIES.to_string(),
            search_query: String::new(),
        }
    }
}

impl FilterState {
    pub fn new(category: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            selected_category: category.into(),
            search_query: query.into(),
        }
    }

    pub fn with_category(self, category: impl Into<String>) -> Self {
        Self {
            selected_category: category.into(),
            ..self
        }
    }

    pub fn with_query(self, query: impl Into<String>) -> Self {
        Self {
            search_query: query.into(),
            ..self
        }
    }

    pub fn filters_category(&self) -> bool {
        self.selected_category != ALL_CATEGORIES
    }

    pub fn filters_text(&self) -> bool {
        !self.search_query.is_empty()
    }

    /// True when neither input narrows the corpus; the featured slot is shown then.
    pub fn is_unfiltered(&self) -> bool {
        !self.filters_category() && !self.filters_text()
    }
}
