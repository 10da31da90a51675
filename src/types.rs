use serde::{Deserialize, Serialize};
use std::fmt;

/// interest regime for an investment application
///
/// tags coming from the data layer are permissive: `"compound"` (or the
/// Portuguese `"composto"`) selects compound accrual, every other tag falls
/// back to simple accrual rather than failing the record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InterestType {
    #[default]
    Simple,
    Compound,
}

impl InterestType {
    /// parse a raw tag, defaulting unknown tags to simple
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim() {
            "compound" | "composto" => InterestType::Compound,
            _ => InterestType::Simple,
        }
    }

    /// canonical tag
    pub fn as_tag(&self) -> &'static str {
        match self {
            InterestType::Simple => "simple",
            InterestType::Compound => "compound",
        }
    }

    /// display label used in consolidated statements
    pub fn label(&self) -> &'static str {
        match self {
            InterestType::Simple => "Juros Simples",
            InterestType::Compound => "Juros Compostos",
        }
    }
}

impl From<&str> for InterestType {
    fn from(tag: &str) -> Self {
        InterestType::from_tag(tag)
    }
}

impl From<String> for InterestType {
    fn from(tag: String) -> Self {
        InterestType::from_tag(&tag)
    }
}

impl From<InterestType> for String {
    fn from(t: InterestType) -> Self {
        t.as_tag().to_string()
    }
}

impl fmt::Display for InterestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_tag())
    }
}
