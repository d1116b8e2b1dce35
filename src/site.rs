// Page content for the St. Movens front-of-house terminal
//
// Pages, navigation links, program choices, news cards, and carousel slides
// are declared here as static data. The interactive components treat this
// module as an external contract: they look controls and cards up by identity
// and never define content themselves.

/// Pages reachable from the navigation menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Programs,
    News,
    Contact,
}

impl Page {
    /// All pages in navigation order
    pub const ALL: [Page; 4] = [Page::Home, Page::Programs, Page::News, Page::Contact];

    /// Display name for the nav menu and title bar
    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Programs => "Programs",
            Page::News => "News & Events",
            Page::Contact => "Contact",
        }
    }
}

/// Program choices offered by the enrollment form's select field
pub const PROGRAMS: [&str; 4] = [
    "Early Childhood",
    "Primary School",
    "Junior Secondary",
    "Senior Secondary",
];

/// Category tag carried by every news card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NewsCategory {
    #[default]
    Upcoming,
    Sports,
    Academics,
    Community,
}

impl NewsCategory {
    /// All filter controls in display order
    pub const ALL: [NewsCategory; 4] = [
        NewsCategory::Upcoming,
        NewsCategory::Sports,
        NewsCategory::Academics,
        NewsCategory::Community,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            NewsCategory::Upcoming => "Upcoming",
            NewsCategory::Sports => "Sports",
            NewsCategory::Academics => "Academics",
            NewsCategory::Community => "Community",
        }
    }
}

/// A news card with its immutable category tag
#[derive(Debug, Clone, Copy)]
pub struct NewsCard {
    pub title: &'static str,
    pub date: &'static str,
    pub summary: &'static str,
    pub category: NewsCategory,
}

/// The fixed card set partitioned by the news filter
pub static NEWS_CARDS: [NewsCard; 8] = [
    NewsCard {
        title: "Open Day 2026",
        date: "2026-09-12",
        summary: "Tour the campus, meet the teachers, and see classrooms in action.",
        category: NewsCategory::Upcoming,
    },
    NewsCard {
        title: "Term 3 Enrollment Window",
        date: "2026-08-20",
        summary: "Applications for the third term open this month.",
        category: NewsCategory::Upcoming,
    },
    NewsCard {
        title: "Inter-School Football Finals",
        date: "2026-07-28",
        summary: "Our senior team reached the provincial finals in Lusaka.",
        category: NewsCategory::Sports,
    },
    NewsCard {
        title: "Swimming Gala Results",
        date: "2026-07-14",
        summary: "Three new school records set at the annual gala.",
        category: NewsCategory::Sports,
    },
    NewsCard {
        title: "National Exam Distinctions",
        date: "2026-06-30",
        summary: "Grade 12 class posts its best science results to date.",
        category: NewsCategory::Academics,
    },
    NewsCard {
        title: "Library Wing Reopens",
        date: "2026-06-05",
        summary: "Renovated reading rooms and a new study annex are open.",
        category: NewsCategory::Academics,
    },
    NewsCard {
        title: "Community Clean-Up Drive",
        date: "2026-05-22",
        summary: "Learners and parents joined the ward clean-up campaign.",
        category: NewsCategory::Community,
    },
    NewsCard {
        title: "Charity Fun Run",
        date: "2026-05-02",
        summary: "Proceeds support the school feeding programme.",
        category: NewsCategory::Community,
    },
];

/// A carousel slide shown on the home page
#[derive(Debug, Clone, Copy)]
pub struct Slide {
    pub heading: &'static str,
    pub body: &'static str,
}

/// Announcement slides the carousel cycles through
pub static SLIDES: [Slide; 3] = [
    Slide {
        heading: "Welcome to St. Movens",
        body: "A learning community in the heart of Lusaka since 1978.",
    },
    Slide {
        heading: "Enrollment Open",
        body: "Places available across all programs for the coming term.",
    },
    Slide {
        heading: "Open Day - 12 September",
        body: "Visit us and experience a school day first hand.",
    },
];

/// School name shown in the title bar
pub const SCHOOL_NAME: &str = "St. Movens School";
