use std::sync::LazyLock;

use axum::{
    debug_handler,
    extract::State,
    response::{Html, IntoResponse, Response},
    Form,
};
use regex::Regex;
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::{
    config::Config,
    include_res,
    res::{self, escape_html},
    AppState,
};

use super::CONTACT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("Please enter your name")]
    EmptyName,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a subject")]
    EmptySubject,
    #[error("Please enter your message")]
    EmptyMessage,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Checks the fields in form order and reports the first problem.
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::EmptyName);
        }
        if !is_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail);
        }
        if self.subject.trim().is_empty() {
            return Err(ContactError::EmptySubject);
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::EmptyMessage);
        }
        Ok(())
    }
}

/// `local@domain.tld`: one `@`, no whitespace, and a dot in the domain with
/// something on both sides of it.
static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

fn is_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

fn contact_html(form: &ContactForm, error: &str, notice: &str) -> Html<String> {
    let name = escape_html(&form.name);
    let from = escape_html(&form.email);
    let subject = escape_html(&form.subject);
    let message = escape_html(&form.message);
    let error = escape_html(error);
    let notice = escape_html(notice);
    res::page(
        "Contact",
        &res::fill(
            include_res!(str, "/pages/portfolio/contact.html"),
            &[
                ("email", CONTACT.email),
                ("phone", CONTACT.phone),
                ("location", CONTACT.location),
                ("name", name.as_str()),
                ("from", from.as_str()),
                ("subject", subject.as_str()),
                ("message", message.as_str()),
                ("error", error.as_str()),
                ("notice", notice.as_str()),
            ],
        ),
    )
}

#[debug_handler]
pub(crate) async fn contact_page() -> Html<String> {
    contact_html(&ContactForm::default(), "", "")
}

#[debug_handler(state = AppState)]
pub(crate) async fn contact(
    State(config): State<Config>,

    Form(form): Form<ContactForm>,
) -> Response {
    if let Err(err) = form.validate() {
        return res::rejected(contact_html(&form, &err.to_string(), ""));
    }

    tokio::time::sleep(config.contact_delay).await;
    info!(subject = %form.subject.trim(), "contact message received");

    contact_html(
        &ContactForm::default(),
        "",
        "Message Sent! Thank you for your message. I'll get back to you soon!",
    )
    .into_response()
}
