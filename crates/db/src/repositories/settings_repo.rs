//! Repository for the `site_settings` singleton.

use popevents_core::settings::{DEFAULT_COMPANY_NAME, DEFAULT_TAGLINE, SETTINGS_ID};
use sqlx::PgPool;

use crate::models::settings::{SiteSettings, UpdateSiteSettings, OPTIONAL_SETTINGS_COLUMNS};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, company_name, tagline, about_text, email, phone, whatsapp, \
     instagram, tiktok, twitter, address, map_embed_url, logo_url, hero_image_url, updated_at";

/// Reads and upserts the single settings row.
pub struct SettingsRepo;

impl SettingsRepo {
    /// Fetch the settings row. `None` until the first write.
    pub async fn get(pool: &PgPool) -> Result<Option<SiteSettings>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM site_settings WHERE id = $1");
        sqlx::query_as::<_, SiteSettings>(&query)
            .bind(SETTINGS_ID)
            .fetch_optional(pool)
            .await
    }

    /// Insert or update the settings row.
    ///
    /// Absent fields keep their stored value (or the default on first
    /// insert); an empty string clears a nullable field.
    pub async fn upsert(
        pool: &PgPool,
        input: &UpdateSiteSettings,
    ) -> Result<SiteSettings, sqlx::Error> {
        let query = upsert_query();
        let mut q = sqlx::query_as::<_, SiteSettings>(&query)
            .bind(SETTINGS_ID)
            .bind(&input.company_name);
        for value in input.optional_values() {
            q = q.bind(value);
        }
        q.bind(DEFAULT_COMPANY_NAME)
            .bind(DEFAULT_TAGLINE)
            .fetch_one(pool)
            .await
    }
}

/// Build the upsert statement.
///
/// Placeholders: `$1` id, `$2` company name, `$3..=$14` the nullable
/// columns in [`OPTIONAL_SETTINGS_COLUMNS`] order, `$15` default company
/// name, `$16` default tagline.
fn upsert_query() -> String {
    let first_optional = 3;
    let default_company = first_optional + OPTIONAL_SETTINGS_COLUMNS.len();
    let default_tagline = default_company + 1;

    let mut insert_cols = vec!["id".to_string(), "company_name".to_string()];
    let mut insert_vals = vec![
        "$1".to_string(),
        format!("COALESCE($2, ${default_company})"),
    ];
    let mut updates = vec!["company_name = COALESCE($2, site_settings.company_name)".to_string()];

    for (i, col) in OPTIONAL_SETTINGS_COLUMNS.iter().enumerate() {
        let n = first_optional + i;
        insert_cols.push((*col).to_string());
        if *col == "tagline" {
            insert_vals.push(format!("NULLIF(COALESCE(${n}::TEXT, ${default_tagline}), '')"));
        } else {
            insert_vals.push(format!("NULLIF(${n}::TEXT, '')"));
        }
        updates.push(format!(
            "{col} = CASE WHEN ${n}::TEXT IS NULL THEN site_settings.{col} ELSE NULLIF(${n}, '') END"
        ));
    }

    format!(
        "INSERT INTO site_settings ({}) VALUES ({})
         ON CONFLICT (id) DO UPDATE SET {}
         RETURNING {COLUMNS}",
        insert_cols.join(", "),
        insert_vals.join(", "),
        updates.join(", "),
    )
}
