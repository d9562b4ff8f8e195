use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the three constitutional classifications used by the quiz and the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dosha {
    Vata,
    Pitta,
    Kapha,
}

impl Dosha {
    pub const fn ordered() -> [Self; 3] {
        [Self::Vata, Self::Pitta, Self::Kapha]
    }

    pub const fn tag(self) -> &'static str {
        match self {
            Self::Vata => "vata",
            Self::Pitta => "pitta",
            Self::Kapha => "kapha",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Vata => "Vata",
            Self::Pitta => "Pitta",
            Self::Kapha => "Kapha",
        }
    }

    /// Exact, case-sensitive match against the wire tags.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "vata" => Some(Self::Vata),
            "pitta" => Some(Self::Pitta),
            "kapha" => Some(Self::Kapha),
            _ => None,
        }
    }
}

impl fmt::Display for Dosha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Dosha {
    type Err = UnknownDosha;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::from_tag(value).ok_or_else(|| UnknownDosha(value.to_string()))
    }
}

/// Dosha tag carried by a catalog entry. `TriDosha` applies to every classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DoshaAffinity {
    Vata,
    Pitta,
    Kapha,
    TriDosha,
}

impl DoshaAffinity {
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Vata => "vata",
            Self::Pitta => "pitta",
            Self::Kapha => "kapha",
            Self::TriDosha => "tri-dosha",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "tri-dosha" => Some(Self::TriDosha),
            other => Dosha::from_tag(other).map(Self::from),
        }
    }

    pub const fn is_universal(self) -> bool {
        matches!(self, Self::TriDosha)
    }
}

impl From<Dosha> for DoshaAffinity {
    fn from(value: Dosha) -> Self {
        match value {
            Dosha::Vata => Self::Vata,
            Dosha::Pitta => Self::Pitta,
            Dosha::Kapha => Self::Kapha,
        }
    }
}

impl fmt::Display for DoshaAffinity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for DoshaAffinity {
    type Err = UnknownDosha;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::from_tag(value).ok_or_else(|| UnknownDosha(value.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown dosha type '{0}'")]
pub struct UnknownDosha(pub String);
