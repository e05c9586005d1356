//! Branded HTML wrapper for outgoing mail.

use askama::Template;

use crate::error::Result;

/// The club email layout with a single content slot.
///
/// `message` is inserted with `|safe`: the caller's HTML is trusted and reaches the
/// recipient unescaped. Anything that can reach the relay endpoint can put arbitrary
/// markup into club email.
#[derive(Template)]
#[template(path = "email.html")]
struct EmailTemplate<'a> {
    message: &'a str,
}

pub fn render_email(message: &str) -> Result<String> {
    let html = EmailTemplate { message }.render()?;
    Ok(html)
}
