use shared::domain::Post;
use tracing::debug;

use crate::state::FilterState;

/// Filter predicate with the query lowercased once per pass.
struct Predicate<'s> {
    category: Option<&'s str>,
    needle: String,
}

impl<'s> Predicate<'s> {
    fn new(state: &'s FilterState) -> Self {
        Self {
            category: state
                .filters_category()
                .then_some(state.selected_category.as_str()),
            needle: state.search_query.to_lowercase(),
        }
    }

    fn accepts(&self, post: &Post) -> bool {
        let category_match = self.category.map_or(true, |c| post.category == c);
        category_match
            && (contains_folded(&post.title, &self.needle)
                || contains_folded(&post.excerpt, &self.needle))
    }
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(needle)
}

/// Whether a single post passes the category and text filters.
pub fn matches(post: &Post, state: &FilterState) -> bool {
    Predicate::new(state).accepts(post)
}

/// Visible subset of `corpus`, in corpus order.
///
/// Unknown categories and queries that match nothing both yield an empty list.
pub fn filter<'a>(corpus: &'a [Post], state: &FilterState) -> Vec<&'a Post> {
    let predicate = Predicate::new(state);
    let visible: Vec<&Post> = corpus.iter().filter(|post| predicate.accepts(post)).collect();
    debug!(
        category = %state.selected_category,
        query = %state.search_query,
        visible = visible.len(),
        total = corpus.len(),
        "filtered blog corpus"
    );
    visible
}

/// The first corpus entry, shown only while no filter is active.
pub fn featured_post<'a>(corpus: &'a [Post], state: &FilterState) -> Option<&'a Post> {
    if state.is_unfiltered() {
        corpus.first()
    } else {
        None
    }
}

/// Everything the listing page renders for one filter state.
#[derive(Debug, Clone, PartialEq)]
pub struct BlogView<'a> {
    pub featured: Option<&'a Post>,
    pub posts: Vec<&'a Post>,
}

impl<'a> BlogView<'a> {
    pub fn compute(corpus: &'a [Post], state: &FilterState) -> Self {
        Self {
            featured: featured_post(corpus, state),
            posts: filter(corpus, state),
        }
    }

    /// No post in the grid; the page shows its "no articles found" notice.
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/engine_tests.rs"]
mod tests;
