use crate::models::{Status, Technology};

/// Default technology list used on first run and whenever the store
/// document cannot be read. 8 items: 3 completed, 2 in progress,
/// 3 not started.
pub fn default_technologies() -> Vec<Technology> {
    vec![
        Technology::new(
            1,
            "React Components",
            "Learning the basic building blocks of a UI",
            Status::Completed,
            "frontend",
        ),
        Technology::new(
            2,
            "JSX Syntax",
            "Getting comfortable with the JSX syntax",
            Status::InProgress,
            "frontend",
        ),
        Technology::new(
            3,
            "useState Hook",
            "Managing local component state",
            Status::Completed,
            "frontend",
        ),
        Technology::new(
            4,
            "useEffect Hook",
            "Side effects and the component lifecycle",
            Status::InProgress,
            "frontend",
        ),
        Technology::new(
            5,
            "Node.js Basics",
            "Server-side JavaScript fundamentals",
            Status::NotStarted,
            "backend",
        ),
        Technology::new(
            6,
            "Express.js",
            "Building REST APIs",
            Status::NotStarted,
            "backend",
        ),
        Technology::new(
            7,
            "MongoDB",
            "Working with a NoSQL database",
            Status::NotStarted,
            "database",
        ),
        Technology::new(
            8,
            "React Router",
            "Navigation in React applications",
            Status::Completed,
            "frontend",
        ),
    ]
}
