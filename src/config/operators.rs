use std::fmt;
use std::str::FromStr;

use crate::config::errors::ConfigError;
use crate::search::Operator;

/// The subset of arithmetic operators a search may use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorSet {
    bits: u8,
}

impl OperatorSet {
    pub const ALL: OperatorSet = OperatorSet { bits: 0b1111 };

    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    pub fn from_ops(ops: &[Operator]) -> Self {
        ops.iter().fold(Self::empty(), |set, &op| set.with(op))
    }

    #[must_use]
    pub const fn with(self, op: Operator) -> Self {
        Self {
            bits: self.bits | Self::bit(op),
        }
    }

    pub const fn contains(&self, op: Operator) -> bool {
        self.bits & Self::bit(op) != 0
    }

    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Operator> + '_ {
        Operator::ALL.into_iter().filter(|op| self.contains(*op))
    }

    const fn bit(op: Operator) -> u8 {
        match op {
            Operator::Add => 0b0001,
            Operator::Sub => 0b0010,
            Operator::Mul => 0b0100,
            Operator::Div => 0b1000,
        }
    }
}

impl Default for OperatorSet {
    fn default() -> Self {
        Self::ALL
    }
}

impl FromStr for OperatorSet {
    type Err = ConfigError;

    /// Parse a symbol list such as `"+-*/"`; whitespace and commas are ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut set = Self::empty();
        for c in s.chars() {
            let op = match c {
                '+' => Operator::Add,
                '-' | '−' => Operator::Sub,
                '*' | 'x' | '×' => Operator::Mul,
                '/' | '÷' => Operator::Div,
                ',' => continue,
                c if c.is_whitespace() => continue,
                other => return Err(ConfigError::UnknownOperator(other)),
            };
            set = set.with(op);
        }
        if set.is_empty() {
            return Err(ConfigError::NoOperators);
        }
        Ok(set)
    }
}

impl fmt::Display for OperatorSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for op in self.iter() {
            write!(f, "{}", crate::render::symbol(op))?;
        }
        Ok(())
    }
}
