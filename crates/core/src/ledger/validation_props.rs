//! Property-based tests for the journal balance validator.

use budgetbook_shared::types::AccountId;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::error::LedgerError;
use super::types::JournalLine;
use super::validation::{DEFAULT_BALANCE_TOLERANCE, validate_balance};

/// Strategy for amounts from 0.01 to 1,000,000.00.
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for a split of one amount into several debit lines.
fn debit_split() -> impl Strategy<Value = Vec<Decimal>> {
    prop::collection::vec(positive_amount(), 1..8)
}

fn debit_lines(amounts: &[Decimal]) -> Vec<JournalLine> {
    let account = AccountId::new();
    amounts
        .iter()
        .map(|a| JournalLine::debit(account, *a))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Any set of debits offset by a single credit of the same total is accepted.
    #[test]
    fn prop_exactly_balanced_accepted(debits in debit_split()) {
        let total: Decimal = debits.iter().copied().sum();
        let mut lines = debit_lines(&debits);
        lines.push(JournalLine::credit(AccountId::new(), total));

        let totals = validate_balance(&lines, DEFAULT_BALANCE_TOLERANCE);
        prop_assert!(totals.is_ok());
        let totals = totals.unwrap();
        prop_assert_eq!(totals.total_debit, total);
        prop_assert_eq!(totals.total_credit, total);
    }

    /// A one-cent drift either way stays within the tolerance.
    #[test]
    fn prop_one_cent_drift_accepted(
        debits in debit_split(),
        credit_heavy in any::<bool>(),
    ) {
        let total: Decimal = debits.iter().copied().sum();
        let cent = Decimal::new(1, 2);
        let credit = if credit_heavy { total + cent } else { total - cent };
        let mut lines = debit_lines(&debits);
        lines.push(JournalLine::credit(AccountId::new(), credit));

        prop_assert!(validate_balance(&lines, DEFAULT_BALANCE_TOLERANCE).is_ok());
    }

    /// Beyond the tolerance the entry is rejected and both totals are reported exactly.
    #[test]
    fn prop_unbalanced_rejected_with_totals(
        debits in debit_split(),
        gap_cents in 2i64..1_000_000i64,
    ) {
        let total: Decimal = debits.iter().copied().sum();
        let credit = total + Decimal::new(gap_cents, 2);
        let mut lines = debit_lines(&debits);
        lines.push(JournalLine::credit(AccountId::new(), credit));

        prop_assert_eq!(
            validate_balance(&lines, DEFAULT_BALANCE_TOLERANCE),
            Err(LedgerError::UnbalancedEntry {
                total_debit: total,
                total_credit: credit,
            })
        );
    }

    /// Line order never changes the outcome.
    #[test]
    fn prop_order_independent(debits in debit_split(), credit in positive_amount()) {
        let mut lines = debit_lines(&debits);
        lines.push(JournalLine::credit(AccountId::new(), credit));
        let forward = validate_balance(&lines, DEFAULT_BALANCE_TOLERANCE);
        lines.reverse();
        let backward = validate_balance(&lines, DEFAULT_BALANCE_TOLERANCE);
        prop_assert_eq!(forward, backward);
    }
}
