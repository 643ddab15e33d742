/// Weight of media stability in the core index.
pub const MEDIA_WEIGHT: f64 = 0.6;

/// Weight of reputation in the core index.
pub const REPUTATION_WEIGHT: f64 = 0.4;

/// Headcount from which an organization counts as large-scale.
pub const LARGE_EMPLOYER_THRESHOLD: u64 = 100_000;

/// Scale multiplier for large-scale or strategic organizations.
pub const LARGE_SCALE_MULTIPLIER: f64 = 1.05;

/// Weighted blend of the two subindices, in [0, 100].
pub fn core_index(m_stab: f64, s_rep: f64) -> f64 {
    m_stab * MEDIA_WEIGHT + s_rep * REPUTATION_WEIGHT
}

pub fn scale_multiplier(employees: u64, strategic: bool) -> f64 {
    if employees >= LARGE_EMPLOYER_THRESHOLD || strategic {
        LARGE_SCALE_MULTIPLIER
    } else {
        1.0
    }
}

/// Baseline composite score; exceeds 100 when multipliers lift a high core.
pub fn baseline_score(i_core: f64, k_risk: f64, k_scale: f64) -> f64 {
    i_core * k_risk * k_scale
}
