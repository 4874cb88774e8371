//! Tranche resolution against the social security ceiling.
//!
//! Bracketed contributions are computed on two bases: tranche 1, a fixed
//! slice equal to the ceiling, and tranche 2, the part of the fiscal gross
//! above the ceiling.

use rust_decimal::Decimal;

/// The two contribution bases derived from the ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BracketBases {
    /// Capped base; always the full ceiling.
    pub tranche1: Decimal,
    /// Excess of the fiscal gross over the ceiling, never negative.
    pub tranche2: Decimal,
}

/// Resolves the tranche 1 and tranche 2 bases for a fiscal gross.
///
/// Tranche 1 is the ceiling regardless of the actual gross. Tranche 2 is
/// `max(0, fiscal_gross - ceiling)`, exactly zero when the gross does not
/// exceed the ceiling.
///
/// # Examples
///
/// ```
/// use payslip_engine::calculation::resolve_brackets;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let ceiling = Decimal::from_str("3864.00").unwrap();
///
/// let bases = resolve_brackets(Decimal::from_str("4000.00").unwrap(), ceiling);
/// assert_eq!(bases.tranche1, ceiling);
/// assert_eq!(bases.tranche2, Decimal::from_str("136.00").unwrap());
///
/// let bases = resolve_brackets(Decimal::from(3000), ceiling);
/// assert_eq!(bases.tranche2, Decimal::ZERO);
/// ```
pub fn resolve_brackets(fiscal_gross: Decimal, ceiling: Decimal) -> BracketBases {
    let excess = fiscal_gross - ceiling;

    BracketBases {
        tranche1: ceiling,
        tranche2: if excess > Decimal::ZERO {
            excess
        } else {
            Decimal::ZERO
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_gross_below_ceiling_has_no_tranche2() {
        let bases = resolve_brackets(dec("3000"), dec("3864.00"));

        assert_eq!(bases.tranche1, dec("3864.00"));
        assert_eq!(bases.tranche2, dec("0.00"));
    }

    #[test]
    fn test_gross_above_ceiling_puts_excess_in_tranche2() {
        let bases = resolve_brackets(dec("4000.00"), dec("3864.00"));

        assert_eq!(bases.tranche1, dec("3864.00"));
        assert_eq!(bases.tranche2, dec("136.00"));
    }

    #[test]
    fn test_gross_equal_to_ceiling_has_exactly_zero_tranche2() {
        let bases = resolve_brackets(dec("3864.00"), dec("3864.00"));

        assert_eq!(bases.tranche2, Decimal::ZERO);
        assert!(!bases.tranche2.is_sign_negative());
    }

    #[test]
    fn test_tranche1_is_ceiling_even_for_small_gross() {
        let bases = resolve_brackets(dec("100.00"), dec("3864.00"));

        assert_eq!(bases.tranche1, dec("3864.00"));
    }

    #[test]
    fn test_zero_gross() {
        let bases = resolve_brackets(Decimal::ZERO, dec("3864.00"));

        assert_eq!(bases.tranche2, Decimal::ZERO);
    }

    #[test]
    fn test_one_cent_above_ceiling() {
        let bases = resolve_brackets(dec("3864.01"), dec("3864.00"));

        assert_eq!(bases.tranche2, dec("0.01"));
    }
}
