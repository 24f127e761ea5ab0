use serde::{Deserialize, Serialize};

const AVATAR_BASE_URL: &str = "https://ui-avatars.com/api/";

/// Colors passed to the avatar service (hex without the leading '#')
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AvatarStyle {
    #[serde(default = "default_background")]
    pub background: String,
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_background() -> String {
    "dc2626".to_string()
}

fn default_color() -> String {
    "fff".to_string()
}

impl Default for AvatarStyle {
    fn default() -> Self {
        Self {
            background: default_background(),
            color: default_color(),
        }
    }
}

/// Build the avatar URL for a display name.
///
/// Deterministic: the same name and style always yield the same URL.
pub fn avatar_url(name: &str, style: &AvatarStyle) -> String {
    format!(
        "{}?name={}&background={}&color={}&bold=true",
        AVATAR_BASE_URL,
        urlencoding::encode(name),
        style.background,
        style.color
    )
}
