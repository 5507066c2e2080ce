use rust_decimal::Decimal;

use crate::decimal::{Money, Rate};
use crate::errors::{Result, SimulationError};
use crate::types::{AmortizationMethod, AmortizationResult, Installment};

/// Generates installment schedules for a single amortization method.
pub struct ScheduleCalculator {
    method: AmortizationMethod,
}

impl ScheduleCalculator {
    pub fn new(method: AmortizationMethod) -> Self {
        Self { method }
    }

    /// calculate the full schedule for the requested principal, term and
    /// monthly rate
    pub fn calculate(
        &self,
        principal: Money,
        term_months: u32,
        monthly_rate: Rate,
    ) -> Result<AmortizationResult> {
        validate_terms(principal, term_months, monthly_rate)?;

        let installments = match self.method {
            AmortizationMethod::Sac => sac_installments(principal, term_months, monthly_rate),
            AmortizationMethod::Price => price_installments(principal, term_months, monthly_rate),
        };

        Ok(AmortizationResult {
            method: self.method,
            installments,
        })
    }
}

/// caller contract: positive principal, at least one month, non-negative rate
fn validate_terms(principal: Money, term_months: u32, monthly_rate: Rate) -> Result<()> {
    if !principal.is_positive() {
        return Err(SimulationError::InvalidPrincipal { principal });
    }
    if term_months == 0 {
        return Err(SimulationError::InvalidTerm { term: term_months });
    }
    if monthly_rate.is_negative() {
        return Err(SimulationError::NegativeRate { rate: monthly_rate });
    }
    Ok(())
}

/// constant amortization: principal / term fixed for every period, interest
/// on the declining balance
fn sac_installments(principal: Money, term_months: u32, monthly_rate: Rate) -> Vec<Installment> {
    // computed once and reused unchanged; the final period is not trued up,
    // so a residual of a few cents can remain on the balance
    let amortization = principal / Decimal::from(term_months);

    let mut installments = Vec::with_capacity(term_months as usize);
    let mut balance = principal;

    for number in 1..=term_months {
        // interest accrues on the balance before this period's amortization
        let interest = balance * monthly_rate;
        let payment = amortization + interest;
        balance -= amortization;

        installments.push(Installment {
            number,
            amortization,
            interest,
            payment,
        });
    }

    installments
}

/// french system: every payment equals the annuity amount, amortization is
/// the payment net of interest
fn price_installments(principal: Money, term_months: u32, monthly_rate: Rate) -> Vec<Installment> {
    let payment = payment_amount(principal, term_months, monthly_rate);

    let mut installments = Vec::with_capacity(term_months as usize);
    let mut balance = principal;

    for number in 1..=term_months {
        let interest = balance * monthly_rate;
        // derived from the already-rounded payment and interest, not
        // independently re-rounded
        let amortization = payment - interest;
        balance -= amortization;

        installments.push(Installment {
            number,
            amortization,
            interest,
            payment,
        });
    }

    installments
}

/// Constant installment of the french system:
/// PMT = P * [r * (1+r)^n] / [(1+r)^n - 1]
///
/// A zero rate degenerates the annuity to an even principal split with no
/// interest, sidestepping the zero denominator.
pub fn payment_amount(principal: Money, term_months: u32, monthly_rate: Rate) -> Money {
    if monthly_rate.is_zero() {
        return principal / Decimal::from(term_months);
    }

    let rate = monthly_rate.as_decimal();
    let factor = monthly_rate.compound_factor(term_months);

    Money::from_decimal(principal.as_decimal() * rate * factor / (factor - Decimal::ONE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn money(d: Decimal) -> Money {
        Money::from_decimal(d)
    }

    fn calculate(method: AmortizationMethod) -> AmortizationResult {
        ScheduleCalculator::new(method)
            .calculate(Money::from_major(10_000), 12, Rate::from_decimal(dec!(0.025)))
            .unwrap()
    }

    #[test]
    fn test_sac_schedule() {
        let result = calculate(AmortizationMethod::Sac);

        assert_eq!(result.method, AmortizationMethod::Sac);
        assert_eq!(result.installments.len(), 12);

        let first = &result.installments[0];
        assert_eq!(first.amortization, money(dec!(833.33)));
        assert_eq!(first.interest, money(dec!(250.00)));
        assert_eq!(first.payment, money(dec!(1083.33)));

        // second period interest accrues on 9166.67
        let second = &result.installments[1];
        assert_eq!(second.interest, money(dec!(229.17)));
        assert_eq!(second.payment, money(dec!(1062.50)));

        // amortization constant across the schedule, interest declining
        for installment in &result.installments {
            assert_eq!(installment.amortization, money(dec!(833.33)));
            assert_eq!(installment.payment, installment.amortization + installment.interest);
        }
        for pair in result.installments.windows(2) {
            assert!(pair[1].interest <= pair[0].interest);
        }

        // rounding drift is preserved, not forced back to zero
        assert_eq!(result.total_amortized(), money(dec!(9999.96)));
    }

    #[test]
    fn test_price_schedule() {
        let result = calculate(AmortizationMethod::Price);

        assert_eq!(result.method, AmortizationMethod::Price);
        assert_eq!(result.installments.len(), 12);

        let pmt = payment_amount(
            Money::from_major(10_000),
            12,
            Rate::from_decimal(dec!(0.025)),
        );
        assert_eq!(pmt, money(dec!(974.87)));

        let first = &result.installments[0];
        assert_eq!(first.interest, money(dec!(250.00)));
        assert_eq!(first.amortization, money(dec!(724.87)));
        assert_eq!(first.payment, pmt);

        // second period interest accrues on 9275.13
        let second = &result.installments[1];
        assert_eq!(second.interest, money(dec!(231.88)));
        assert_eq!(second.amortization, money(dec!(742.99)));

        for installment in &result.installments {
            assert_eq!(installment.payment, pmt);
            assert_eq!(installment.payment, installment.amortization + installment.interest);
        }
        for pair in result.installments.windows(2) {
            assert!(pair[1].amortization >= pair[0].amortization);
            assert!(pair[1].interest <= pair[0].interest);
        }
    }

    #[test]
    fn test_sequence_numbers_are_dense() {
        for method in [AmortizationMethod::Sac, AmortizationMethod::Price] {
            let result = calculate(method);
            let numbers: Vec<u32> = result.installments.iter().map(|i| i.number).collect();
            assert_eq!(numbers, (1..=12).collect::<Vec<u32>>());
        }
    }

    #[test]
    fn test_zero_rate_price_degenerates_to_even_split() {
        let result = ScheduleCalculator::new(AmortizationMethod::Price)
            .calculate(Money::from_major(1200), 12, Rate::ZERO)
            .unwrap();

        for installment in &result.installments {
            assert_eq!(installment.payment, money(dec!(100.00)));
            assert_eq!(installment.amortization, money(dec!(100.00)));
            assert_eq!(installment.interest, Money::ZERO);
        }
        assert_eq!(result.total_interest(), Money::ZERO);
    }

    #[test]
    fn test_zero_rate_sac() {
        let result = ScheduleCalculator::new(AmortizationMethod::Sac)
            .calculate(Money::from_major(1200), 12, Rate::ZERO)
            .unwrap();

        for installment in &result.installments {
            assert_eq!(installment.amortization, money(dec!(100.00)));
            assert_eq!(installment.interest, Money::ZERO);
            assert_eq!(installment.payment, money(dec!(100.00)));
        }
    }

    #[test]
    fn test_single_period_schedules() {
        let principal = Money::from_major(5000);
        let rate = Rate::from_decimal(dec!(0.03));

        let sac = ScheduleCalculator::new(AmortizationMethod::Sac)
            .calculate(principal, 1, rate)
            .unwrap();
        assert_eq!(sac.installments.len(), 1);
        assert_eq!(sac.installments[0].amortization, money(dec!(5000.00)));
        assert_eq!(sac.installments[0].interest, money(dec!(150.00)));
        assert_eq!(sac.installments[0].payment, money(dec!(5150.00)));

        // single-period annuity collapses to principal * (1 + r)
        let price = ScheduleCalculator::new(AmortizationMethod::Price)
            .calculate(principal, 1, rate)
            .unwrap();
        assert_eq!(price.installments[0].payment, money(dec!(5150.00)));
        assert_eq!(price.installments[0].amortization, money(dec!(5000.00)));
        assert_eq!(price.installments[0].interest, money(dec!(150.00)));
    }

    #[test]
    fn test_precondition_failures() {
        let calculator = ScheduleCalculator::new(AmortizationMethod::Sac);

        let err = calculator
            .calculate(Money::ZERO, 12, Rate::ZERO)
            .unwrap_err();
        assert!(matches!(err, SimulationError::InvalidPrincipal { .. }));

        let err = calculator
            .calculate(Money::from_major(1000), 0, Rate::ZERO)
            .unwrap_err();
        assert!(matches!(err, SimulationError::InvalidTerm { term: 0 }));

        let err = calculator
            .calculate(Money::from_major(1000), 12, Rate::from_decimal(dec!(-0.01)))
            .unwrap_err();
        assert!(matches!(err, SimulationError::NegativeRate { .. }));
    }

    #[test]
    fn test_identical_inputs_yield_identical_schedules() {
        for method in [AmortizationMethod::Sac, AmortizationMethod::Price] {
            let calculator = ScheduleCalculator::new(method);
            let principal = Money::from_str_exact("73500.50").unwrap();
            let rate = Rate::from_decimal(dec!(0.0179));

            let first = calculator.calculate(principal, 48, rate).unwrap();
            let second = calculator.calculate(principal, 48, rate).unwrap();
            assert_eq!(first, second);
        }
    }
}
