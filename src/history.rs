//! Head-to-head score history between our pairs and the opponents' pairs.
//!
//! The JSON form nests the opponent pair under our pair, listing each game as `[own, opponent]`:
//!
//! ```json
//! { "A1-A2": { "B1-B2": [[23, 21], [21, 18]] } }
//! ```

use std::collections::BTreeMap;
use std::fmt::Formatter;
use std::io;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::file::FromJsonFile;
use crate::player::Pair;

/// Raw points from one game: our pair's score, then the opponents'.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult(pub u16, pub u16);

#[derive(Debug, Error)]
#[error("cannot load history from {path}: {source}")]
pub struct LoadError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct HistoryRecord {
    confrontations: BTreeMap<Pair, BTreeMap<Pair, Vec<MatchResult>>>,
}

/// A JSON object's entries in document order, keys not yet deduplicated. Two spellings of the
/// same pair (`A1-A2` and `A2-A1`) survive here as separate entries.
struct Entries<K, V>(Vec<(K, V)>);

impl<'de, K: Deserialize<'de>, V: Deserialize<'de>> Deserialize<'de> for Entries<K, V> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor<K, V>(PhantomData<(K, V)>);

        impl<'de, K: Deserialize<'de>, V: Deserialize<'de>> Visitor<'de> for EntriesVisitor<K, V> {
            type Value = Entries<K, V>;

            fn expecting(&self, f: &mut Formatter) -> std::fmt::Result {
                f.write_str("a map keyed by pair")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry()? {
                    entries.push(entry);
                }
                Ok(Entries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}

// A pair spelled both ways merges into one row; the later of two equal confrontations wins.
impl<'de> Deserialize<'de> for HistoryRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let rows = Entries::<Pair, Entries<Pair, Vec<MatchResult>>>::deserialize(deserializer)?;
        let mut record = Self::default();
        for (team, against) in rows.0 {
            for (opponents, games) in against.0 {
                record.insert(team, opponents, games);
            }
        }
        Ok(record)
    }
}

impl HistoryRecord {
    /// Records the games played between `team` and `opponents`, replacing any games already
    /// held for that confrontation.
    pub fn insert(&mut self, team: Pair, opponents: Pair, games: Vec<MatchResult>) {
        self.confrontations
            .entry(team)
            .or_default()
            .insert(opponents, games);
    }

    pub fn with(mut self, team: Pair, opponents: Pair, games: Vec<MatchResult>) -> Self {
        self.insert(team, opponents, games);
        self
    }

    pub fn get(&self, team: &Pair, opponents: &Pair) -> Option<&[MatchResult]> {
        self.confrontations
            .get(team)
            .and_then(|against| against.get(opponents))
            .map(Vec::as_slice)
    }

    /// Iterates over every recorded confrontation, ordered by our pair then the opponents'.
    pub fn iter(&self) -> impl Iterator<Item = (&Pair, &Pair, &[MatchResult])> {
        self.confrontations.iter().flat_map(|(team, against)| {
            against
                .iter()
                .map(move |(opponents, games)| (team, opponents, games.as_slice()))
        })
    }

    /// The number of confrontations on record.
    pub fn len(&self) -> usize {
        self.confrontations.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Folds `other` into this record. Confrontations present in both take `other`'s games;
    /// the rest are kept as they are.
    pub fn merge(&mut self, other: HistoryRecord) {
        for (team, against) in other.confrontations {
            self.confrontations.entry(team).or_default().extend(against);
        }
    }

    /// Loads and merges the history files at `paths`, in the order given.
    pub fn load<P: AsRef<Path>>(paths: &[P]) -> Result<Self, LoadError> {
        let mut merged = Self::default();
        for path in paths {
            let path = path.as_ref();
            let record = Self::from_json_file(path).map_err(|source| LoadError {
                path: path.to_path_buf(),
                source,
            })?;
            debug!("loaded {} confrontations from {}", record.len(), path.display());
            merged.merge(record);
        }
        Ok(merged)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::testing;

    fn pair(s: &str) -> Pair {
        Pair::from_str(s).unwrap()
    }

    #[test]
    fn parse_json() {
        let history: HistoryRecord = serde_json::from_str(
            r#"{"A2-A1": {"B1-B2": [[23, 21], [21, 18]], "B3-B5": [[21, 10]]}}"#,
        )
        .unwrap();
        assert_eq!(2, history.len());
        assert_eq!(
            Some(&[MatchResult(23, 21), MatchResult(21, 18)][..]),
            history.get(&pair("A1-A2"), &pair("B2-B1"))
        );
        assert_eq!(
            Some(&[MatchResult(21, 10)][..]),
            history.get(&pair("A1-A2"), &pair("B3-B5"))
        );
        assert_eq!(None, history.get(&pair("A1-A3"), &pair("B1-B2")));
    }

    #[test]
    fn parse_json_merges_reversed_pairs() {
        let history: HistoryRecord = serde_json::from_str(
            r#"{
                "A1-A2": {"B1-B2": [[21, 0]], "B3-B4": [[10, 21]]},
                "A2-A1": {"B4-B3": [[21, 5]], "B5-B1": [[21, 7]]}
            }"#,
        )
        .unwrap();
        assert_eq!(3, history.len());
        assert_eq!(
            Some(&[MatchResult(21, 0)][..]),
            history.get(&pair("A1-A2"), &pair("B1-B2"))
        );
        assert_eq!(
            Some(&[MatchResult(21, 5)][..]),
            history.get(&pair("A2-A1"), &pair("B3-B4"))
        );
        assert_eq!(
            Some(&[MatchResult(21, 7)][..]),
            history.get(&pair("A1-A2"), &pair("B1-B5"))
        );
    }

    #[test]
    fn json_round_trip() {
        let history = testing::sample_history();
        let json = serde_json::to_string(&history).unwrap();
        assert_eq!(history, serde_json::from_str::<HistoryRecord>(&json).unwrap());
    }

    #[test]
    fn parse_json_rejects_bad_pair() {
        assert!(serde_json::from_str::<HistoryRecord>(r#"{"A1-A1": {}}"#).is_err());
        assert!(serde_json::from_str::<HistoryRecord>(r#"{"A1-A2": {"B1": []}}"#).is_err());
    }

    #[test]
    fn iter_in_order() {
        let history = HistoryRecord::default()
            .with(pair("A2-A3"), pair("B1-B2"), vec![MatchResult(21, 15)])
            .with(pair("A1-A2"), pair("B3-B4"), vec![])
            .with(pair("A1-A2"), pair("B1-B2"), vec![MatchResult(21, 19)]);
        let keys = history
            .iter()
            .map(|(team, opponents, _)| format!("{team} v {opponents}"))
            .collect::<Vec<_>>();
        assert_eq!(
            vec!["A1-A2 v B1-B2", "A1-A2 v B3-B4", "A2-A3 v B1-B2"],
            keys
        );
    }

    #[test]
    fn merge_replaces_confrontations() {
        let mut base = HistoryRecord::default()
            .with(pair("A1-A5"), pair("B1-B5"), vec![MatchResult(18, 21)])
            .with(pair("A3-A4"), pair("B3-B4"), vec![MatchResult(19, 21)]);
        let ext = HistoryRecord::default()
            .with(pair("A1-A5"), pair("B1-B6"), vec![MatchResult(21, 14)])
            .with(pair("A3-A4"), pair("B3-B4"), vec![MatchResult(22, 20)]);
        base.merge(ext);
        assert_eq!(3, base.len());
        assert_eq!(
            Some(&[MatchResult(18, 21)][..]),
            base.get(&pair("A1-A5"), &pair("B1-B5"))
        );
        assert_eq!(
            Some(&[MatchResult(21, 14)][..]),
            base.get(&pair("A1-A5"), &pair("B1-B6"))
        );
        assert_eq!(
            Some(&[MatchResult(22, 20)][..]),
            base.get(&pair("A3-A4"), &pair("B3-B4"))
        );
    }

    #[test]
    fn bundled_history() {
        let base = testing::sample_history();
        assert_eq!(11, base.len());
        let merged = testing::extended_history();
        assert_eq!(17, merged.len());
    }

    #[test]
    fn load_merges_in_order() {
        let history =
            HistoryRecord::load(&["data/history.json", "data/history_ext.json"]).unwrap();
        assert_eq!(17, history.len());
        assert_eq!(testing::extended_history(), history);
        assert_eq!(
            Some(&[MatchResult(21, 14)][..]),
            history.get(&pair("A3-A4"), &pair("B4-B6"))
        );
        assert_eq!(
            Some(&[MatchResult(18, 21), MatchResult(21, 14), MatchResult(21, 16)][..]),
            history.get(&pair("A1-A5"), &pair("B1-B5"))
        );
    }

    #[test]
    fn load_missing_file() {
        let err = HistoryRecord::load(&["data/no_such_file.json"]).unwrap_err();
        assert_eq!(PathBuf::from("data/no_such_file.json"), err.path);
    }
}
