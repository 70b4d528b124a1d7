//! The static portfolio pages and the contact form.

mod contact;
mod page;

use axum::{routing::get, Router};

use crate::AppState;

pub use contact::{ContactError, ContactForm};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/portfolio", get(page::home))
        .route("/about", get(page::about))
        .route("/projects", get(page::projects))
        .route("/contact", get(contact::contact_page).post(contact::contact))
}

pub const OWNER: &str = "John Doe";
pub const TAGLINE: &str =
    "Full Stack Developer & UI/UX Enthusiast. Crafting digital experiences with passion and precision";

pub const BIO: &str = "I'm a passionate full-stack developer with over 4 years of experience creating \
    innovative digital solutions. I specialize in modern web technologies and have a keen eye for \
    user experience design. When I'm not coding, you'll find me exploring new technologies, \
    contributing to open-source projects, or enjoying the great outdoors.";

pub const SKILLS: [&str; 8] = [
    "React", "TypeScript", "Node.js", "Python", "MongoDB", "PostgreSQL", "AWS", "Docker",
];

pub const HOBBIES: [&str; 6] = ["Photography", "Rock Climbing", "Chess", "Cooking", "Travel", "Reading"];

pub struct ContactInfo {
    pub email: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
}

pub const CONTACT: ContactInfo = ContactInfo {
    email: "john.doe@example.com",
    phone: "+1 (555) 123-4567",
    location: "San Francisco, CA",
};

/// A line on the about page, for schooling or for a job.
pub struct Entry {
    pub title: &'static str,
    pub place: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

pub const EDUCATION: [Entry; 2] = [
    Entry {
        title: "Master of Computer Science",
        place: "Stanford University",
        period: "2020-2022",
        description: "Specialized in Machine Learning and AI",
    },
    Entry {
        title: "Bachelor of Software Engineering",
        place: "UC Berkeley",
        period: "2016-2020",
        description: "Graduated Magna Cum Laude",
    },
];

pub const EXPERIENCE: [Entry; 2] = [
    Entry {
        title: "Senior Full Stack Developer",
        place: "Tech Innovations Inc.",
        period: "2022-Present",
        description: "Leading development of scalable web applications using React, Node.js, and AWS",
    },
    Entry {
        title: "Software Developer",
        place: "StartUp Solutions",
        period: "2020-2022",
        description: "Developed mobile and web applications for various clients",
    },
];

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
}

pub const PROJECTS: [Project; 6] = [
    Project {
        title: "E-Commerce Platform",
        description: "A full-stack e-commerce solution built with React, Node.js, and MongoDB. \
            Features include user authentication, payment processing, and admin dashboard.",
        technologies: &["React", "Node.js", "MongoDB", "Stripe", "AWS"],
    },
    Project {
        title: "Task Management App",
        description: "A collaborative project management tool with real-time updates, \
            drag-and-drop functionality, and team collaboration features.",
        technologies: &["React", "TypeScript", "Socket.io", "PostgreSQL"],
    },
    Project {
        title: "Weather Dashboard",
        description: "An interactive weather application with data visualization, \
            location-based forecasts, and responsive design.",
        technologies: &["Vue.js", "D3.js", "OpenWeather API", "CSS3"],
    },
    Project {
        title: "Social Media Analytics",
        description: "A comprehensive analytics dashboard for social media metrics with \
            real-time data processing and visualization.",
        technologies: &["Python", "Django", "Chart.js", "Redis"],
    },
    Project {
        title: "AI Chatbot Platform",
        description: "An intelligent chatbot platform with natural language processing and \
            machine learning capabilities.",
        technologies: &["Python", "TensorFlow", "Flask", "NLP"],
    },
    Project {
        title: "Blockchain Voting System",
        description: "A secure and transparent voting system built on blockchain technology \
            with smart contracts.",
        technologies: &["Solidity", "Web3.js", "React", "Ethereum"],
    },
];
