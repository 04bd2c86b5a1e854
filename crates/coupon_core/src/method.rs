use crate::error::CombineError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Combining strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Method {
    /// Collapse positions left to right
    Simple,
    /// Collapse positions in one random order
    SimpleRandom,
    /// Collapse whichever remaining position leaves the fewest rows
    #[default]
    SimpleMax,
    /// Merge only the single largest group per pass
    OnlyMax,
}

impl Method {
    pub const ALL: [Method; 4] = [
        Method::Simple,
        Method::SimpleRandom,
        Method::SimpleMax,
        Method::OnlyMax,
    ];

    /// Names accepted by `FromStr`, in the same order as `ALL`
    pub const NAMES: [&'static str; 4] = ["simple", "simple-random", "simple-max", "only-max"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Simple => "simple",
            Method::SimpleRandom => "simple-random",
            Method::SimpleMax => "simple-max",
            Method::OnlyMax => "only-max",
        }
    }

    /// Whether the result depends on the seed
    pub fn is_randomized(&self) -> bool {
        matches!(self, Method::SimpleRandom)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = CombineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::ALL
            .into_iter()
            .find(|method| method.as_str() == s)
            .ok_or_else(|| CombineError::InvalidMethod(s.to_string()))
    }
}
