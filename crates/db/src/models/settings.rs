//! Site settings singleton model and DTO.

use popevents_core::settings::{DEFAULT_COMPANY_NAME, DEFAULT_TAGLINE, SETTINGS_ID};
use popevents_core::types::Timestamp;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The single row of the `site_settings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SiteSettings {
    pub id: String,
    pub company_name: String,
    pub tagline: Option<String>,
    pub about_text: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub whatsapp: Option<String>,
    pub instagram: Option<String>,
    pub tiktok: Option<String>,
    pub twitter: Option<String>,
    pub address: Option<String>,
    pub map_embed_url: Option<String>,
    pub logo_url: Option<String>,
    pub hero_image_url: Option<String>,
    /// `None` only for the defaults served before the first write.
    pub updated_at: Option<Timestamp>,
}

impl SiteSettings {
    /// Settings served before the row has been written.
    pub fn defaults() -> Self {
        Self {
            id: SETTINGS_ID.to_string(),
            company_name: DEFAULT_COMPANY_NAME.to_string(),
            tagline: Some(DEFAULT_TAGLINE.to_string()),
            about_text: None,
            email: None,
            phone: None,
            whatsapp: None,
            instagram: None,
            tiktok: None,
            twitter: None,
            address: None,
            map_embed_url: None,
            logo_url: None,
            hero_image_url: None,
            updated_at: None,
        }
    }
}

/// Nullable settings columns, in bind order after `company_name`.
pub const OPTIONAL_SETTINGS_COLUMNS: [&str; 12] = [
    "tagline",
    "about_text",
    "email",
    "phone",
    "whatsapp",
    "instagram",
    "tiktok",
    "twitter",
    "address",
    "map_embed_url",
    "logo_url",
    "hero_image_url",
];

/// DTO for `PUT /settings`.
///
/// An absent field keeps the stored value; an empty string clears a
/// nullable field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSiteSettings {
    pub company_name: Option<String>,
    pub tagline: Option<String>,
    pub about_text: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub whatsapp: Option<String>,
    pub instagram: Option<String>,
    pub tiktok: Option<String>,
    pub twitter: Option<String>,
    pub address: Option<String>,
    pub map_embed_url: Option<String>,
    pub logo_url: Option<String>,
    pub hero_image_url: Option<String>,
}

impl UpdateSiteSettings {
    /// Values of the nullable fields, ordered like [`OPTIONAL_SETTINGS_COLUMNS`].
    pub fn optional_values(&self) -> [Option<&str>; 12] {
        [
            self.tagline.as_deref(),
            self.about_text.as_deref(),
            self.email.as_deref(),
            self.phone.as_deref(),
            self.whatsapp.as_deref(),
            self.instagram.as_deref(),
            self.tiktok.as_deref(),
            self.twitter.as_deref(),
            self.address.as_deref(),
            self.map_embed_url.as_deref(),
            self.logo_url.as_deref(),
            self.hero_image_url.as_deref(),
        ]
    }
}
