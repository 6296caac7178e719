use serde::{Deserialize, Serialize};

/// Stores user-configurable display preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    #[serde(default = "Config::default_negative_style_value")]
    pub negative_style: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-US".into(),
            currency: "USD".into(),
            negative_style: Self::default_negative_style_value(),
        }
    }
}

impl Config {
    pub fn default_negative_style_value() -> String {
        "sign".into()
    }
}
