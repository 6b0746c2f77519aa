use serde::Serialize;
use shared::domain::{CategoryIcon, ALL_CATEGORIES};

use crate::state::FilterState;

/// One button in the category bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryOption {
    pub name: String,
    pub icon: CategoryIcon,
    pub selected: bool,
}

/// `"All"` followed by the known categories, in order.
pub fn category_options<S: AsRef<str>>(categories: &[S], state: &FilterState) -> Vec<CategoryOption> {
    std::iter::once(ALL_CATEGORIES)
        .chain(categories.iter().map(AsRef::as_ref))
        .map(|name| CategoryOption {
            name: name.to_string(),
            icon: CategoryIcon::for_category(name),
            selected: state.selected_category == name,
        })
        .collect()
}
