use axum::{debug_handler, response::Html};

use crate::{
    include_res,
    res::{self, escape_html},
};

use super::{Entry, BIO, EDUCATION, EXPERIENCE, HOBBIES, OWNER, PROJECTS, SKILLS, TAGLINE};

#[debug_handler]
pub(crate) async fn home() -> Html<String> {
    let owner = escape_html(OWNER);
    let tagline = escape_html(TAGLINE);
    let skills = escape_html(&SKILLS.join(" · "));
    res::page(
        OWNER,
        &res::fill(
            include_res!(str, "/pages/portfolio/home.html"),
            &[
                ("owner", owner.as_str()),
                ("tagline", tagline.as_str()),
                ("skills", skills.as_str()),
            ],
        ),
    )
}

fn entries_html(entries: &[Entry]) -> String {
    let mut html = String::new();
    for entry in entries {
        let title = escape_html(entry.title);
        let place = escape_html(entry.place);
        let period = escape_html(entry.period);
        let description = escape_html(entry.description);
        html += &res::fill(
            include_res!(str, "/pages/portfolio/entry.html"),
            &[
                ("title", title.as_str()),
                ("place", place.as_str()),
                ("period", period.as_str()),
                ("description", description.as_str()),
            ],
        );
    }
    html
}

#[debug_handler]
pub(crate) async fn about() -> Html<String> {
    let bio = escape_html(BIO);
    let education = entries_html(&EDUCATION);
    let experience = entries_html(&EXPERIENCE);
    let hobbies = escape_html(&HOBBIES.join(" · "));
    res::page(
        "About Me",
        &res::fill(
            include_res!(str, "/pages/portfolio/about.html"),
            &[
                ("bio", bio.as_str()),
                ("education", education.as_str()),
                ("experience", experience.as_str()),
                ("hobbies", hobbies.as_str()),
            ],
        ),
    )
}

#[debug_handler]
pub(crate) async fn projects() -> Html<String> {
    let mut project_items = String::new();
    for project in &PROJECTS {
        let title = escape_html(project.title);
        let description = escape_html(project.description);
        let technologies = escape_html(&project.technologies.join(", "));
        project_items += &res::fill(
            include_res!(str, "/pages/portfolio/project_item.html"),
            &[
                ("title", title.as_str()),
                ("description", description.as_str()),
                ("technologies", technologies.as_str()),
            ],
        );
    }

    res::page(
        "My Projects",
        &res::fill(
            include_res!(str, "/pages/portfolio/projects.html"),
            &[("project_items", project_items.as_str())],
        ),
    )
}
