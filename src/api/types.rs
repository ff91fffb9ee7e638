use serde::{Deserialize, Serialize};

/// A single character as returned by the API. Kept verbatim.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Character {
    pub id: u32,
    pub name: String,
    /// "Alive", "Dead" or "unknown" today, but the API owns the value set.
    pub status: String,
    #[serde(default)]
    pub species: String,
    pub image: String,
}

/// Pagination metadata from the response envelope.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct PageInfo {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub pages: u32,
    pub next: Option<String>,
    pub prev: Option<String>,
}

/// One page of results: `{ "info": {...}, "results": [...] }`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterPage {
    /// Missing on some mirrors of the API; absent info means "no next page known".
    #[serde(default)]
    pub info: Option<PageInfo>,
    #[serde(default)]
    pub results: Vec<Character>,
}

impl CharacterPage {
    /// True when this page proves there is nothing more to fetch.
    ///
    /// An empty `results` array ends the listing. So does an explicit
    /// `info.next: null`. A page without `info` only ends the listing
    /// when it is empty.
    pub fn is_last(&self) -> bool {
        if self.results.is_empty() {
            return true;
        }
        matches!(&self.info, Some(info) if info.next.is_none())
    }
}
