//! Render configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Visual theme for rendered pages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    /// Follow the browser's `prefers-color-scheme`.
    #[default]
    Auto,
}

impl Theme {
    /// Class applied to `<html>`; auto leaves it to the media query.
    pub fn css_class(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Auto => "",
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "auto" => Ok(Theme::Auto),
            other => Err(format!(
                "unknown theme: {other} (expected light, dark, or auto)"
            )),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Auto => "auto",
        };
        write!(f, "{s}")
    }
}

/// Configuration for the page renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Site title, shown in the header and the `<title>` tag.
    #[serde(default = "default_title")]
    pub title: String,
    /// One-line tagline under the title.
    #[serde(default = "default_tagline")]
    pub tagline: String,
    /// Visual theme.
    #[serde(default)]
    pub theme: Theme,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            tagline: default_tagline(),
            theme: Theme::default(),
        }
    }
}

impl RenderConfig {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_tagline(mut self, tagline: impl Into<String>) -> Self {
        self.tagline = tagline.into();
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}

fn default_title() -> String {
    "Volunteer Hub".to_string()
}

fn default_tagline() -> String {
    "Find volunteering opportunities. Click a card to view details.".to_string()
}
