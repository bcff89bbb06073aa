use arthankur_core::cash_flow::projection::{self, CashFlowInput, ForecastHorizon};
use arthankur_core::credit_scoring::heuristic::{self, CreditCategory, CreditScoreInput};
use arthankur_core::working_capital::analysis::{self, WorkingCapitalFlagKind};
use arthankur_core::FinancialSnapshot;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn startup_snapshot() -> FinancialSnapshot {
    FinancialSnapshot {
        current_assets: dec!(1_000_000),
        current_liabilities: dec!(500_000),
        inventory: dec!(300_000),
        cash: dec!(250_000),
        accounts_receivable: dec!(200_000),
        accounts_payable: dec!(50_000),
        annual_sales: dec!(1_460_000),
        annual_purchases: dec!(730_000),
        cost_of_goods_sold: dec!(1_095_000),
        revenue: dec!(1_460_000),
        expenses: dec!(900_000),
        operating_expenses: dec!(200_000),
        capital_expenditure: dec!(100_000),
        net_income: dec!(219_000),
        total_debt: dec!(600_000),
        total_equity: dec!(1_200_000),
        operating_cash_flow: dec!(450_000),
    }
}

// ===========================================================================
// Cash flow projection
// ===========================================================================

#[test]
fn test_projection_from_snapshot_figures() {
    let s = startup_snapshot();
    let input = CashFlowInput {
        revenue: s.revenue / dec!(12),
        expenses: s.expenses / dec!(12),
        operating_expenses: s.operating_expenses / dec!(12),
        capital_expenditure: s.capital_expenditure / dec!(12),
        horizon: ForecastHorizon::Year,
    };
    let out = projection::project_cash_flow(&input).unwrap();
    assert_eq!(out.result.periods.len(), 12);
    // Revenue compounds faster than costs, so net cash flow rises each month
    for pair in out.result.periods.windows(2) {
        assert!(pair[1].net_cash_flow > pair[0].net_cash_flow);
    }
}

#[test]
fn test_projection_repeatable() {
    let input = CashFlowInput {
        revenue: dec!(80_000),
        expenses: dec!(30_000),
        operating_expenses: dec!(20_000),
        capital_expenditure: dec!(5_000),
        horizon: ForecastHorizon::HalfYear,
    };
    let first = projection::project_cash_flow(&input).unwrap().result;
    let second = projection::project_cash_flow(&input).unwrap().result;
    assert_eq!(first, second);
    assert_eq!(first.horizon.months(), 6);
}

#[test]
fn test_projection_twelfth_month_revenue() {
    let input = CashFlowInput {
        revenue: dec!(100_000),
        expenses: Decimal::ZERO,
        operating_expenses: Decimal::ZERO,
        capital_expenditure: Decimal::ZERO,
        horizon: ForecastHorizon::Year,
    };
    let out = projection::project_cash_flow(&input).unwrap();
    // 100,000 * 1.05^12 = 179,585.63...
    let last = &out.result.periods[11];
    assert!((last.projected_revenue - dec!(179_585.63)).abs() < dec!(0.01));
    assert_eq!(out.result.summary.terminal_revenue, last.projected_revenue);
}

// ===========================================================================
// Working capital
// ===========================================================================

#[test]
fn test_working_capital_reference_ratios() {
    let out = analysis::analyze_working_capital(&startup_snapshot()).unwrap();
    let m = &out.result.metrics;
    assert_eq!(m.current_ratio, dec!(2));
    assert_eq!(m.quick_ratio, dec!(1.4));
    assert_eq!(m.cash_ratio, dec!(0.5));
    assert_eq!(m.working_capital, dec!(500_000));
}

#[test]
fn test_working_capital_cycle() {
    let out = analysis::analyze_working_capital(&startup_snapshot()).unwrap();
    let m = &out.result.metrics;
    // AR 200k / sales 1.46M * 365 = 50
    assert_eq!(m.days_receivable, dec!(50));
    // AP 50k / purchases 730k * 365 = 25
    assert_eq!(m.days_payable, dec!(25));
    // COGS 1.095M / inventory 300k = 3.65 turns => 100 days
    assert_eq!(m.days_inventory_outstanding, dec!(100));
    assert_eq!(m.cash_conversion_cycle, dec!(125));

    let kinds: Vec<WorkingCapitalFlagKind> = out.result.flags.iter().map(|f| f.kind).collect();
    assert_eq!(
        kinds,
        vec![
            WorkingCapitalFlagKind::SlowReceivables,
            WorkingCapitalFlagKind::FastPayables,
            WorkingCapitalFlagKind::LongCashCycle,
        ]
    );
}

#[test]
fn test_working_capital_empty_snapshot_is_all_zero() {
    let out = analysis::analyze_working_capital(&FinancialSnapshot::default()).unwrap();
    let m = &out.result.metrics;
    assert_eq!(m.current_ratio, Decimal::ZERO);
    assert_eq!(m.cash_conversion_cycle, Decimal::ZERO);
    assert!(!out.warnings.is_empty());
}

// ===========================================================================
// Heuristic credit score
// ===========================================================================

#[test]
fn test_score_snapshot_matches_manual_ratios() {
    let snap = startup_snapshot();
    let from_snapshot = heuristic::score_snapshot(&snap).unwrap().result;

    let manual = CreditScoreInput {
        current_ratio: dec!(2),
        debt_to_equity: dec!(0.5),
        profit_margin_pct: dec!(15),
        return_on_equity_pct: dec!(18.25),
        cash_flow: dec!(450_000),
    };
    let direct = heuristic::calculate_credit_score(&manual).unwrap().result;

    assert_eq!(from_snapshot, direct);
    // 600 + 45 + 60 + 60 + 36 + 30 = 831
    assert_eq!(direct.score, 831);
    assert_eq!(direct.category, CreditCategory::Excellent);
}

#[test]
fn test_score_bounded_for_extreme_inputs() {
    let extremes = [
        CreditScoreInput::default(),
        CreditScoreInput {
            current_ratio: dec!(1_000_000),
            debt_to_equity: dec!(-1_000_000),
            profit_margin_pct: dec!(1_000_000),
            return_on_equity_pct: dec!(1_000_000),
            cash_flow: dec!(1_000_000_000_000),
        },
        CreditScoreInput {
            current_ratio: dec!(-1_000_000),
            debt_to_equity: dec!(1_000_000),
            profit_margin_pct: dec!(-1_000_000),
            return_on_equity_pct: dec!(-1_000_000),
            cash_flow: dec!(-1_000_000_000_000),
        },
    ];
    for input in extremes {
        let score = heuristic::calculate_credit_score(&input).unwrap().result.score;
        assert!((300..=900).contains(&score), "score {score} out of range");
    }
}

#[test]
fn test_all_zero_score_is_base_plus_minimum_buckets() {
    let out = heuristic::calculate_credit_score(&CreditScoreInput::default()).unwrap();
    assert_eq!(out.result.score, 696);
    assert_eq!(out.result.category.to_string(), "Fair");
}
