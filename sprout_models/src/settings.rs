use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct DisplaySettings {
    #[serde(default = "default_timezone")]
    pub timezone: chrono_tz::Tz,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
        }
    }
}

fn default_timezone() -> chrono_tz::Tz {
    chrono_tz::UTC
}

#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    pub api: ApiSettings,
    #[serde(default)]
    pub display: DisplaySettings,
}
