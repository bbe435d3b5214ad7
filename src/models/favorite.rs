use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Favorite — an establishment the client has bookmarked
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    pub id: String,
    pub name: String,
    /// Average review score, 0.0 to 5.0.
    pub rating: f64,
    pub address: String,
    #[serde(default)]
    pub image_url: Option<String>,
}
