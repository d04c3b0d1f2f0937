//! Closed stat enumeration and the additive per-stat counter.

use crate::core::error::{ForgeError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stat categories a talent grid node can grant.
///
/// Closed set: data files and priority strings parse into this enum, so an
/// unknown category is rejected at load time rather than leaking into tallies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatKind {
    Talent,
    Attack,
    Defense,
    Health,
    Heal,
    Critical,
    Mana,
}

impl StatKind {
    pub const COUNT: usize = 7;

    pub const ALL: [StatKind; Self::COUNT] = [
        StatKind::Talent,
        StatKind::Attack,
        StatKind::Defense,
        StatKind::Health,
        StatKind::Heal,
        StatKind::Critical,
        StatKind::Mana,
    ];

    pub fn name(self) -> &'static str {
        match self {
            StatKind::Talent => "talent",
            StatKind::Attack => "attack",
            StatKind::Defense => "defense",
            StatKind::Health => "health",
            StatKind::Heal => "heal",
            StatKind::Critical => "critical",
            StatKind::Mana => "mana",
        }
    }

    /// Parse the full stat name used in data files.
    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| ForgeError::UnknownStat(name.to_string()))
    }

    /// Parse a single-character priority code.
    pub fn from_code(code: char) -> Result<Self> {
        match code {
            'a' => Ok(StatKind::Attack),
            'c' => Ok(StatKind::Critical),
            'd' => Ok(StatKind::Defense),
            'h' => Ok(StatKind::Health),
            'l' => Ok(StatKind::Heal),
            'm' => Ok(StatKind::Mana),
            't' => Ok(StatKind::Talent),
            other => Err(ForgeError::InvalidPriority(other)),
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Additive counter over the full `StatKind` set.
///
/// Always fully populated: absent kinds sit at zero, and no key outside the
/// closed set can ever appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatTally {
    counts: [u32; StatKind::COUNT],
}

impl StatTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment a single kind by one.
    pub fn add_kind(&mut self, kind: StatKind) {
        self.counts[kind.index()] += 1;
    }

    /// Element-wise addition of another tally.
    pub fn merge(&mut self, rhs: &StatTally) {
        for (count, add) in self.counts.iter_mut().zip(rhs.counts.iter()) {
            *count += add;
        }
    }

    pub fn get(&self, kind: StatKind) -> u32 {
        self.counts[kind.index()]
    }

    /// Iterate the kinds with a non-zero count, in declaration order.
    pub fn iter_nonzero(&self) -> impl Iterator<Item = (StatKind, u32)> + '_ {
        StatKind::ALL
            .iter()
            .map(|&kind| (kind, self.get(kind)))
            .filter(|&(_, count)| count > 0)
    }
}

impl fmt::Display for StatTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        let mut first = true;
        for (kind, count) in self.iter_nonzero() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", kind, count)?;
            first = false;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_tally_is_all_zero() {
        let tally = StatTally::new();
        for kind in StatKind::ALL {
            assert_eq!(tally.get(kind), 0);
        }
        assert_eq!(tally.iter_nonzero().count(), 0);
    }

    #[test]
    fn test_add_kind_and_merge() {
        let mut a = StatTally::new();
        a.add_kind(StatKind::Attack);
        a.add_kind(StatKind::Attack);

        let mut b = StatTally::new();
        b.add_kind(StatKind::Attack);
        b.add_kind(StatKind::Health);

        a.merge(&b);
        assert_eq!(a.get(StatKind::Attack), 3);
        assert_eq!(a.get(StatKind::Health), 1);
        assert_eq!(a.get(StatKind::Mana), 0);
    }

    #[test]
    fn test_from_name_round_trip() {
        for kind in StatKind::ALL {
            assert_eq!(StatKind::from_name(kind.name()).unwrap(), kind);
        }
        assert!(matches!(
            StatKind::from_name("luck"),
            Err(ForgeError::UnknownStat(_))
        ));
    }

    #[test]
    fn test_from_code() {
        assert_eq!(StatKind::from_code('a').unwrap(), StatKind::Attack);
        assert_eq!(StatKind::from_code('t').unwrap(), StatKind::Talent);
        assert_eq!(StatKind::from_code('l').unwrap(), StatKind::Heal);
        assert!(matches!(
            StatKind::from_code('x'),
            Err(ForgeError::InvalidPriority('x'))
        ));
    }

    #[test]
    fn test_display_lists_nonzero_only() {
        let mut tally = StatTally::new();
        tally.add_kind(StatKind::Attack);
        tally.add_kind(StatKind::Attack);
        tally.add_kind(StatKind::Critical);
        assert_eq!(tally.to_string(), "{attack: 2, critical: 1}");
    }

    fn arb_tally() -> impl Strategy<Value = StatTally> {
        prop::array::uniform7(0u32..50).prop_map(|counts| {
            let mut tally = StatTally::new();
            for (kind, count) in StatKind::ALL.iter().zip(counts) {
                for _ in 0..count {
                    tally.add_kind(*kind);
                }
            }
            tally
        })
    }

    proptest! {
        #[test]
        fn merge_is_commutative_and_sums(a in arb_tally(), b in arb_tally()) {
            let mut ab = a;
            ab.merge(&b);
            let mut ba = b;
            ba.merge(&a);
            prop_assert_eq!(ab, ba);
            for kind in StatKind::ALL {
                prop_assert_eq!(ab.get(kind), a.get(kind) + b.get(kind));
            }
        }
    }
}
