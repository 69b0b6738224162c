//! HTML bodies and subjects for operator notifications.

use crate::{ContactMessage, RegistrationNotice};

const BRAND_COLOR: &str = "#6B21A8";

/// Escape text for inclusion in HTML element content or attributes.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn field(label: &str, value: &str) -> String {
    format!("<p><strong>{label}:</strong> {}</p>", escape_html(value))
}

pub fn registration_subject(notice: &RegistrationNotice) -> String {
    format!("New Registration: {} - {}", notice.full_name, notice.event_title)
}

/// Body of the "new registration" mail.
pub fn registration_html(notice: &RegistrationNotice, admin_url: &str) -> String {
    let mut rows = vec![
        field("Event", &notice.event_title),
        field("Name", &notice.full_name),
        field("Email", &notice.email),
        field("Phone", &notice.phone),
    ];
    if let Some(company) = &notice.company_name {
        rows.push(field("Company", company));
    }
    if let Some(notes) = &notice.additional_notes {
        rows.push(field("Notes", notes));
    }

    format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <h2 style="color: {BRAND_COLOR};">New Event Registration</h2>
  {}
  <hr style="margin: 20px 0; border: none; border-top: 1px solid #eee;">
  <p style="color: #666; font-size: 14px;">
    <a href="{}" style="color: {BRAND_COLOR};">View in Admin Panel</a>
  </p>
</div>"#,
        rows.join("\n  "),
        escape_html(admin_url),
    )
}

pub fn contact_subject(message: &ContactMessage) -> String {
    format!("Contact Form: {}", message.subject)
}

/// Body of the contact-form mail.
pub fn contact_html(message: &ContactMessage) -> String {
    format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <h2 style="color: {BRAND_COLOR};">New Contact Form Submission</h2>
  {}
  {}
  {}
  <p><strong>Message:</strong></p>
  <p style="background: #f5f5f5; padding: 15px; border-radius: 5px; white-space: pre-wrap;">{}</p>
</div>"#,
        field("Name", &message.name),
        field("Email", &message.email),
        field("Subject", &message.subject),
        escape_html(&message.message),
    )
}
