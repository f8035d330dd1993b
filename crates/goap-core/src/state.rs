use core::fmt;
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A (possibly partial) snapshot of the world: fact name -> integer value.
///
/// Partiality is simply "fewer keys present". Facts are kept in key order so iteration, display
/// and the structural `Ord`/`Hash` used for visited-state bookkeeping are deterministic.
///
/// `PartialEq` is structural. The planning relation is [`equivalent`], which is deliberately not
/// an equivalence relation in the mathematical sense (an empty state is not equivalent to itself).
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct State {
    facts: BTreeMap<String, i64>,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, fact: impl Into<String>, value: i64) -> Self {
        self.set(fact, value);
        self
    }

    pub fn set(&mut self, fact: impl Into<String>, value: i64) {
        self.facts.insert(fact.into(), value);
    }

    /// `None` means the fact is unknown in this state.
    pub fn get(&self, fact: &str) -> Option<i64> {
        self.facts.get(fact).copied()
    }

    pub fn get_mut(&mut self, fact: &str) -> Option<&mut i64> {
        self.facts.get_mut(fact)
    }

    pub fn contains(&self, fact: &str) -> bool {
        self.facts.contains_key(fact)
    }

    pub fn remove(&mut self, fact: &str) -> Option<i64> {
        self.facts.remove(fact)
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> + '_ {
        self.facts.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// See [`merge`].
    pub fn merged(&self, overlay: &State) -> State {
        merge(self, overlay)
    }

    /// See [`equivalent`].
    pub fn equivalent(&self, other: &State) -> bool {
        equivalent(self, other)
    }

    /// See [`distinct`].
    pub fn distinct(&self, other: &State) -> bool {
        distinct(self, other)
    }
}

/// `base` with every fact of `overlay` written over it. Overlay wins on conflicts.
pub fn merge(base: &State, overlay: &State) -> State {
    let mut out = base.clone();
    for (fact, value) in &overlay.facts {
        out.facts.insert(fact.clone(), *value);
    }
    out
}

/// Overlap equivalence used by the planner for goal and precondition tests.
///
/// Holds iff at least one fact is present in both states and every fact present in both has the
/// same value. Facts known to only one side are ignored, so `{a: 1}` is equivalent to
/// `{a: 1, b: 2}`. Two states without a shared fact are never equivalent, even when both are
/// empty.
///
/// By convention `l` is the fuller (current/result) state and `r` the smaller goal or
/// precondition.
pub fn equivalent(l: &State, r: &State) -> bool {
    let mut shared = 0usize;
    for (fact, value) in &l.facts {
        let Some(other) = r.facts.get(fact) else {
            continue;
        };
        if value != other {
            return false;
        }
        shared += 1;
    }
    shared > 0
}

pub fn distinct(l: &State, r: &State) -> bool {
    !equivalent(l, r)
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (fact, value) in &self.facts {
            writeln!(f, "{fact} : {value}")?;
        }
        Ok(())
    }
}

impl<K: Into<String>> FromIterator<(K, i64)> for State {
    fn from_iter<I: IntoIterator<Item = (K, i64)>>(iter: I) -> Self {
        Self {
            facts: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl<K: Into<String>> Extend<(K, i64)> for State {
    fn extend<I: IntoIterator<Item = (K, i64)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.facts.insert(k.into(), v);
        }
    }
}

impl<K: Into<String>, const N: usize> From<[(K, i64); N]> for State {
    fn from(facts: [(K, i64); N]) -> Self {
        facts.into_iter().collect()
    }
}
