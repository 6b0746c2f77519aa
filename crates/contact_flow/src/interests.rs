use serde::Serialize;
use shared::domain::CategoryIcon;

/// An option on the "What brings you here?" step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Interest {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: CategoryIcon,
}

const INTERESTS: [Interest; 4] = [
    Interest {
        title: "Product Innovation",
        description: "Discuss transformative product ideas",
        icon: CategoryIcon::Brain,
    },
    Interest {
        title: "Leadership",
        description: "Strategic guidance for your team",
        icon: CategoryIcon::Target,
    },
    Interest {
        title: "Mentorship",
        description: "Accelerate your product career",
        icon: CategoryIcon::Heart,
    },
    Interest {
        title: "Speaking",
        description: "Events and workshops",
        icon: CategoryIcon::Star,
    },
];

pub fn interests() -> &'static [Interest] {
    &INTERESTS
}

/// Case-insensitive lookup by title.
pub fn find_interest(title: &str) -> Option<&'static Interest> {
    INTERESTS
        .iter()
        .find(|interest| interest.title.eq_ignore_ascii_case(title.trim()))
}
