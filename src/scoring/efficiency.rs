//! Extended contour: return-on-investment, social return and budget
//! discipline adjust the baseline score multiplicatively.

use serde::Serialize;

use super::inputs::{BudgetInput, ExtendedInputs, ReturnInput};

/// Bonus for a positive return on communications spend.
pub const ROI_BONUS: f64 = 0.05;

/// Bonus for a positive social return.
pub const SROI_BONUS: f64 = 0.10;

/// Penalty for unapproved overspend.
pub const BUDGET_PENALTY: f64 = -0.10;

/// Overspend, in percent of plan, tolerated without approval.
pub const BUDGET_TOLERANCE_PERCENT: f64 = 10.0;

/// Multipliers and intermediate figures of the extended contour.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EfficiencyAdjustment {
    pub roi: Option<f64>,
    pub sroi: Option<f64>,
    pub budget_deviation: Option<f64>,
    pub k_roi: f64,
    pub k_sroi: f64,
    pub k_budget: f64,
    pub k_eff: f64,
}

/// `(benefit - cost) / cost * 100`; 0 when cost is not positive.
pub fn return_percent(benefit: f64, cost: f64) -> f64 {
    if cost <= 0.0 {
        return 0.0;
    }
    (benefit - cost) / cost * 100.0
}

impl ReturnInput {
    pub fn percent(&self) -> f64 {
        match *self {
            ReturnInput::Percent { percent } => percent,
            ReturnInput::Computed { benefit, cost } => return_percent(benefit, cost),
        }
    }
}

/// Binary bonus: any positive ROI earns the full bonus.
pub fn roi_bonus(roi: f64) -> f64 {
    if roi > 0.0 {
        ROI_BONUS
    } else {
        0.0
    }
}

pub fn sroi_bonus(sroi: f64) -> f64 {
    if sroi > 0.0 {
        SROI_BONUS
    } else {
        0.0
    }
}

/// Spend above plan in percent of plan; 0 when plan is not positive.
pub fn budget_deviation(plan: f64, fact: f64) -> f64 {
    if plan <= 0.0 {
        return 0.0;
    }
    (fact - plan) / plan * 100.0
}

/// Penalty when overspend exceeds the tolerance without approval.
pub fn budget_adjustment(budget: &BudgetInput) -> f64 {
    let deviation = budget_deviation(budget.plan, budget.fact);
    if deviation > BUDGET_TOLERANCE_PERCENT && !budget.approved {
        BUDGET_PENALTY
    } else {
        0.0
    }
}

pub fn efficiency_multiplier(k_roi: f64, k_sroi: f64, k_budget: f64) -> f64 {
    1.0 + k_roi + k_sroi + k_budget
}

/// Evaluate the extended block. Missing sub-blocks contribute nothing.
pub fn adjust(extended: &ExtendedInputs) -> EfficiencyAdjustment {
    let roi = extended.roi.map(|r| r.percent());
    let sroi = extended.sroi.map(|r| r.percent());
    let budget_deviation = extended.budget.map(|b| budget_deviation(b.plan, b.fact));

    let k_roi = roi.map(roi_bonus).unwrap_or(0.0);
    let k_sroi = sroi.map(sroi_bonus).unwrap_or(0.0);
    let k_budget = extended.budget.as_ref().map(budget_adjustment).unwrap_or(0.0);

    EfficiencyAdjustment {
        roi,
        sroi,
        budget_deviation,
        k_roi,
        k_sroi,
        k_budget,
        k_eff: efficiency_multiplier(k_roi, k_sroi, k_budget),
    }
}

/// Extended composite score.
pub fn extended_score(iseec_b: f64, k_eff: f64) -> f64 {
    iseec_b * k_eff
}
