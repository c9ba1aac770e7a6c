//! Strategies for splitting a withdrawal into bills.
//!
//! Two interchangeable algorithms implement [`DenominationSplitter`]:
//!
//! - [`GreedyScan`] walks `100, 50, 20, 10, 5, 1` and takes as many of each
//!   bill as fit.
//! - [`OrderedChain`] passes the remainder along a fixed chain of links
//!   `100 -> 50 -> 20 -> 5 -> 1`. It has no 10 bill, so for amounts such as
//!   30 it hands out `20, 5, 5` where the greedy scan hands out `20, 10`.

use crate::breakdown::{BillBreakdown, Denomination};
use crate::error::AtmError;
use crate::state::Amount;
use std::fmt;
use std::str::FromStr;

/// Bills available to the greedy scan, largest first.
pub const GREEDY_DENOMINATIONS: &[Denomination] = &[100, 50, 20, 10, 5, 1];

/// Links of the dispensing chain, in forwarding order.
pub const CHAIN_DENOMINATIONS: &[Denomination] = &[100, 50, 20, 5, 1];

/// Splits an amount into a sequence of bills.
///
/// Implementations return [`BillBreakdown::Empty`] for `amount <= 0` and
/// otherwise a largest-first list of bills that sums to `amount`.
pub trait DenominationSplitter {
    /// Splits `amount` into bills.
    fn split(&self, amount: Amount) -> BillBreakdown;

    /// The bill values this strategy may hand out, largest first.
    fn denominations(&self) -> &'static [Denomination];

    /// Strategy name for logging.
    fn name(&self) -> &'static str;
}

/// Greedy scan over [`GREEDY_DENOMINATIONS`].
///
/// Each pass walks the set from largest to smallest and exhausts a bill
/// before moving to the next one. Passes repeat until nothing remains.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyScan;

impl DenominationSplitter for GreedyScan {
    fn split(&self, amount: Amount) -> BillBreakdown {
        if amount <= 0 {
            return BillBreakdown::Empty;
        }

        let mut remaining = amount.unsigned_abs();
        let mut bills = Vec::new();

        while remaining > 0 {
            for &bill in GREEDY_DENOMINATIONS {
                remaining = take_bills(bill, remaining, &mut bills);
            }
        }

        BillBreakdown::Bills(bills)
    }

    fn denominations(&self) -> &'static [Denomination] {
        GREEDY_DENOMINATIONS
    }

    fn name(&self) -> &'static str {
        "greedy"
    }
}

/// Appends as many `bill`s as fit into `remaining` and returns what is left.
fn take_bills(bill: Denomination, remaining: u32, bills: &mut Vec<Denomination>) -> u32 {
    let count = remaining / bill;
    bills.extend(std::iter::repeat(bill).take(count as usize));
    remaining % bill
}

/// One handler in the dispensing chain.
#[derive(Debug, Clone, Copy)]
struct ChainLink {
    bill: Denomination,
}

impl ChainLink {
    /// Takes as many of this link's bill as fit and returns the remainder
    /// to forward to the next link.
    fn reduce(&self, remaining: u32, bills: &mut Vec<Denomination>) -> u32 {
        take_bills(self.bill, remaining, bills)
    }
}

/// Chain of responsibility over [`CHAIN_DENOMINATIONS`].
///
/// The chain is a fixed sequence folded over the remaining amount, so no
/// state survives between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderedChain;

impl OrderedChain {
    /// Passes `amount` down `links` in order.
    ///
    /// # Panics
    ///
    /// If the last link leaves a remainder. A chain ending in the 1 bill
    /// never does.
    fn dispense(links: &[Denomination], amount: Amount) -> BillBreakdown {
        if amount <= 0 {
            return BillBreakdown::Empty;
        }

        let mut bills = Vec::new();
        let remaining = links
            .iter()
            .map(|&bill| ChainLink { bill })
            .fold(amount.unsigned_abs(), |remaining, link| {
                if remaining > 0 {
                    link.reduce(remaining, &mut bills)
                } else {
                    remaining
                }
            });

        assert_eq!(
            remaining, 0,
            "dispensing chain exhausted with {} left over: no link after the last one",
            remaining
        );

        BillBreakdown::Bills(bills)
    }
}

impl DenominationSplitter for OrderedChain {
    fn split(&self, amount: Amount) -> BillBreakdown {
        Self::dispense(CHAIN_DENOMINATIONS, amount)
    }

    fn denominations(&self) -> &'static [Denomination] {
        CHAIN_DENOMINATIONS
    }

    fn name(&self) -> &'static str {
        "chain"
    }
}

/// Selects a splitting strategy by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitterKind {
    /// [`GreedyScan`]
    Greedy,

    /// [`OrderedChain`]
    #[default]
    Chain,
}

impl SplitterKind {
    /// Creates the strategy this kind names.
    pub fn build(self) -> Box<dyn DenominationSplitter> {
        match self {
            SplitterKind::Greedy => Box::new(GreedyScan),
            SplitterKind::Chain => Box::new(OrderedChain),
        }
    }
}

impl FromStr for SplitterKind {
    type Err = AtmError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "greedy" => Ok(SplitterKind::Greedy),
            "chain" => Ok(SplitterKind::Chain),
            _ => Err(AtmError::UnknownStrategy {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for SplitterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitterKind::Greedy => f.write_str("greedy"),
            SplitterKind::Chain => f.write_str("chain"),
        }
    }
}
