use serde::{Deserialize, Serialize};

/// Article record stored under `{articleKey}/content.json`.
///
/// Only the fields the narration pipeline reads are modelled; anything else
/// the extraction stage stored alongside them is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleContent {
    pub paragraphs: Vec<String>,
    #[serde(rename = "iso2Lang", default)]
    pub language: Option<String>,
}
