use crate::wire::{ParseWireError, WireMove};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A [`WireMove`] as stored in a game's history.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecord {
    #[serde(flatten)]
    pub r#move: WireMove,
    pub move_number: u32,
    #[serde(default)]
    pub timestamp: String,
}

impl FromStr for HistoryRecord {
    type Err = ParseWireError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(serde_json::from_str(s)?)
    }
}

/// Orders history records by move number into the list of moves they describe.
///
/// The sort is stable, records sharing a move number keep their relative order.
pub fn canonical<I: IntoIterator<Item = HistoryRecord>>(records: I) -> Vec<WireMove> {
    let mut records: Vec<_> = records.into_iter().collect();
    records.sort_by_key(|r| r.move_number);
    records.into_iter().map(|r| r.r#move).collect()
}
