//! Neighbour-count rule tables.
//!
//! A table holds one [`Rule`] per neighbour count `0..=8`. A rule fires
//! only when the cell's current state equals [`Rule::applies_to`]; the
//! cell then becomes [`Rule::result`]. Cells the rule does not apply to
//! keep their state.

use std::fmt;
use std::str::FromStr;

use crate::error::GridError;

/// Number of entries in a rule table, one per possible neighbour count.
pub const RULE_COUNT: usize = 9;

/// Outcome for a single neighbour count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rule {
    /// State the cell must currently have for the rule to fire.
    pub applies_to: bool,
    /// State the cell takes when the rule fires.
    pub result: bool,
}

impl Rule {
    pub const fn new(applies_to: bool, result: bool) -> Self {
        Self { applies_to, result }
    }

    /// Next state of a cell currently in state `alive`.
    #[inline]
    pub fn apply(self, alive: bool) -> bool {
        if alive == self.applies_to {
            self.result
        } else {
            alive
        }
    }
}

const DIE: Rule = Rule::new(true, false);
const SURVIVE: Rule = Rule::new(true, true);
const BIRTH: Rule = Rule::new(false, true);

/// Rule table indexed by neighbour count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RuleTable {
    entries: [Rule; RULE_COUNT],
}

impl RuleTable {
    pub const fn new(entries: [Rule; RULE_COUNT]) -> Self {
        Self { entries }
    }

    /// Conway's Game of Life, B3/S23.
    pub const fn conway() -> Self {
        Self::new([DIE, DIE, SURVIVE, BIRTH, DIE, DIE, DIE, DIE, DIE])
    }

    /// Builds a table from `(applies_to, result)` pairs.
    pub fn from_entries(entries: &[(bool, bool)]) -> Result<Self, GridError> {
        if entries.len() != RULE_COUNT {
            return Err(GridError::MalformedRuleTable(entries.len()));
        }
        let mut table = [DIE; RULE_COUNT];
        for (slot, &(applies_to, result)) in table.iter_mut().zip(entries) {
            *slot = Rule::new(applies_to, result);
        }
        Ok(Self::new(table))
    }

    /// Converts birth/survival neighbour counts into table form.
    ///
    /// A count listed for birth but not survival would have to flip both
    /// live and dead cells, which a single entry cannot express; such
    /// rules are rejected.
    pub fn from_birth_survival(birth: &[u8], survival: &[u8]) -> Result<Self, GridError> {
        let mut born = [false; RULE_COUNT];
        let mut survives = [false; RULE_COUNT];
        for (counts, flags) in [(birth, &mut born), (survival, &mut survives)] {
            for &count in counts {
                let slot = flags
                    .get_mut(count as usize)
                    .ok_or(GridError::NeighbourCountOutOfRange(count))?;
                *slot = true;
            }
        }

        let mut table = [DIE; RULE_COUNT];
        for (count, slot) in table.iter_mut().enumerate() {
            *slot = match (born[count], survives[count]) {
                (true, true) => BIRTH,
                (false, true) => SURVIVE,
                (false, false) => DIE,
                (true, false) => {
                    return Err(GridError::UnrepresentableRule { count: count as u8 });
                }
            };
        }
        Ok(Self::new(table))
    }

    /// Entry for `count` live neighbours.
    ///
    /// # Panics
    ///
    /// Panics if `count > 8`; the neighbourhood has only eight cells.
    #[inline]
    pub fn rule(&self, count: u8) -> Rule {
        self.entries[count as usize]
    }

    /// Next state of a cell in state `alive` with `count` live neighbours.
    #[inline]
    pub fn apply(&self, count: u8, alive: bool) -> bool {
        self.rule(count).apply(alive)
    }

    pub fn entries(&self) -> &[Rule; RULE_COUNT] {
        &self.entries
    }

    /// Neighbour counts at which a dead cell comes alive.
    pub fn birth_counts(&self) -> Vec<u8> {
        (0..RULE_COUNT as u8).filter(|&n| self.apply(n, false)).collect()
    }

    /// Neighbour counts at which a live cell stays alive.
    pub fn survival_counts(&self) -> Vec<u8> {
        (0..RULE_COUNT as u8).filter(|&n| self.apply(n, true)).collect()
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::conway()
    }
}

impl fmt::Display for RuleTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("B")?;
        for n in self.birth_counts() {
            write!(f, "{n}")?;
        }
        f.write_str("/S")?;
        for n in self.survival_counts() {
            write!(f, "{n}")?;
        }
        Ok(())
    }
}

impl FromStr for RuleTable {
    type Err = GridError;

    /// Parses `B3/S23` style notation, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GridError::InvalidRuleString(s.to_string());
        let upper = s.trim().to_ascii_uppercase();
        let (birth, survival) = upper.split_once('/').ok_or_else(invalid)?;
        let birth = birth.strip_prefix('B').ok_or_else(invalid)?;
        let survival = survival.strip_prefix('S').ok_or_else(invalid)?;

        let digits = |part: &str| -> Result<Vec<u8>, GridError> {
            part.chars()
                .map(|c| c.to_digit(10).map(|d| d as u8).ok_or_else(invalid))
                .collect()
        };
        Self::from_birth_survival(&digits(birth)?, &digits(survival)?)
    }
}
