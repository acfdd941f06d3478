//! Case style selection

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// A target casing convention, selectable by value.
///
/// Useful when the style is data rather than code: configuration files,
/// CLI flags, serialized requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum CaseStyle {
    /// `PascalCase`
    Pascal,
    /// `camelCase`
    Camel,
    /// `kebab-case`
    Kebab,
    /// `snake_case`
    Snake,
    /// `SCREAMING_SNAKE_CASE`
    ScreamingSnake,
    /// Name casing (`Jean-Claude van Damme`)
    Name,
}

impl CaseStyle {
    /// Stable string code for this style.
    pub fn code(&self) -> &'static str {
        match self {
            CaseStyle::Pascal => "pascal",
            CaseStyle::Camel => "camel",
            CaseStyle::Kebab => "kebab",
            CaseStyle::Snake => "snake",
            CaseStyle::ScreamingSnake => "screaming-snake",
            CaseStyle::Name => "name",
        }
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for CaseStyle {
    type Err = Error;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code {
            "pascal" => Ok(CaseStyle::Pascal),
            "camel" => Ok(CaseStyle::Camel),
            "kebab" => Ok(CaseStyle::Kebab),
            "snake" => Ok(CaseStyle::Snake),
            "screaming-snake" | "screaming_snake" => Ok(CaseStyle::ScreamingSnake),
            "name" => Ok(CaseStyle::Name),
            other => Err(Error::UnknownStyle {
                code: other.to_string(),
            }),
        }
    }
}

/// Converts `text` to the given case style.
pub fn convert(style: CaseStyle, text: &str) -> String {
    match style {
        CaseStyle::Pascal => strkit_core::to_pascal_case(text),
        CaseStyle::Camel => strkit_core::to_camel_case(text),
        CaseStyle::Kebab => strkit_core::to_kebab_case(text),
        CaseStyle::Snake => strkit_core::to_snake_case(text),
        CaseStyle::ScreamingSnake => strkit_core::to_screaming_snake_case(text),
        CaseStyle::Name => strkit_core::to_name_case(text),
    }
}
