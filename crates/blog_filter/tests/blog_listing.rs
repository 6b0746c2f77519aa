use blog_filter::{category_options, filter, BlogView, Corpus, FilterState};

const SITE_CORPUS: &str = r#"{
    "categories": ["Innovation", "Product Leadership", "Team Building", "Personal Growth"],
    "posts": [
        {
            "id": 1,
            "title": "The Future of HR Tech",
            "excerpt": "How AI is reshaping the employee experience",
            "category": "Innovation",
            "image": "https://images.example/hr.jpg",
            "date": "2024-03-15"
        },
        {
            "id": 2,
            "title": "Building High-Performance Teams",
            "excerpt": "Lessons from scaling a product organization",
            "category": "Team Building"
        },
        {
            "id": 3,
            "title": "Designing for Delight",
            "excerpt": "Innovation starts with empathy",
            "category": "Innovation"
        }
    ]
}"#;

fn titles(view: &BlogView<'_>) -> Vec<String> {
    view.posts.iter().map(|p| p.title.clone()).collect()
}

#[test]
fn innovation_category_shows_both_innovation_posts_in_order() {
    let corpus = Corpus::from_json(SITE_CORPUS).expect("corpus");
    let state = FilterState::default().with_category("Innovation");
    let view = BlogView::compute(&corpus.posts, &state);

    assert!(view.featured.is_none());
    assert_eq!(
        titles(&view),
        vec!["The Future of HR Tech", "Designing for Delight"]
    );
}

#[test]
fn query_without_hits_renders_empty_grid() {
    let corpus = Corpus::from_json(SITE_CORPUS).expect("corpus");
    let view = BlogView::compute(&corpus.posts, &FilterState::default().with_query("zzz"));
    assert!(view.is_empty());
    assert!(view.featured.is_none());
}

#[test]
fn landing_view_features_first_post_and_lists_everything() {
    let corpus = Corpus::from_json(SITE_CORPUS).expect("corpus");
    let view = BlogView::compute(&corpus.posts, &FilterState::default());
    assert_eq!(view.featured.map(|p| p.id.0.as_str()), Some("1"));
    assert_eq!(view.posts.len(), 3);
}

#[test]
fn typing_narrows_results_per_keystroke() {
    let corpus = Corpus::from_json(SITE_CORPUS).expect("corpus");
    let mut state = FilterState::default();
    let mut counts = Vec::new();
    for typed in ["e", "em", "emp", "empa"] {
        state = state.with_query(typed);
        counts.push(filter(&corpus.posts, &state).len());
    }
    assert_eq!(counts, vec![3, 2, 2, 1]);
}

#[test]
fn category_bar_lists_all_then_known_categories() {
    let corpus = Corpus::from_json(SITE_CORPUS).expect("corpus");
    let options = category_options(&corpus.categories, &FilterState::default());
    assert_eq!(options.len(), 5);
    assert_eq!(options[0].name, "All");
    assert!(options[0].selected);
    assert!(options[1..].iter().all(|o| !o.selected));
}
