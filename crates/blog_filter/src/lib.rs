//! Blog listing logic: category + free-text filtering over a fixed corpus.

pub mod categories;
pub mod corpus;
pub mod engine;
pub mod state;

pub use categories::{category_options, CategoryOption};
pub use corpus::{Corpus, CorpusError};
pub use engine::{featured_post, filter, matches, BlogView};
pub use state::FilterState;
