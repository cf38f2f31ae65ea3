use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Error;

/// Storage category of a food item
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodCategory {
    #[default]
    Snacks,
    Beverages,
    Canned,
    Frozen,
    Dairy,
    Condiments,
    /// Also used for categories this version does not know about
    Other,
}

impl FoodCategory {
    pub const ALL: [FoodCategory; 7] = [
        Self::Snacks,
        Self::Beverages,
        Self::Canned,
        Self::Frozen,
        Self::Dairy,
        Self::Condiments,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Snacks => "snacks",
            Self::Beverages => "beverages",
            Self::Canned => "canned",
            Self::Frozen => "frozen",
            Self::Dairy => "dairy",
            Self::Condiments => "condiments",
            Self::Other => "other",
        }
    }

    /// Category for a stored, remote or submitted code; unknown codes map to `Other`
    pub fn from_code(code: &str) -> Self {
        code.parse().unwrap_or(Self::Other)
    }

    /// Traditional Chinese label shown on food cards
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Snacks => "零食",
            Self::Beverages => "飲料",
            Self::Canned => "罐頭",
            Self::Frozen => "冷凍食品",
            Self::Dairy => "乳製品",
            Self::Condiments => "調味料",
            Self::Other => "其他",
        }
    }
}

impl FromStr for FoodCategory {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == value)
            .ok_or_else(|| Error::ParsingError(format!("{} is not a food category", value)))
    }
}

impl<'de> Deserialize<'de> for FoodCategory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from_code(&value))
    }
}

impl fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_str().fmt(f)
    }
}
