use serde::Serialize;
use std::fmt;

/// Largest media/reputation gap still considered balanced.
const BALANCE_TOLERANCE: f64 = 15.0;

/// Headroom left in one component.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrowthPotential {
    pub component: &'static str,
    pub current: f64,
    pub potential: f64,
}

/// Which side of the communications system dominates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CommunicationsProfile {
    Balanced,
    /// Media activity outpaces the institutional base
    MediaDominant,
    /// Institutional base is stronger than media presence
    ReputationDominant,
}

impl CommunicationsProfile {
    pub fn classify(m_stab: f64, s_rep: f64) -> Self {
        let gap = m_stab - s_rep;
        if gap.abs() <= BALANCE_TOLERANCE {
            CommunicationsProfile::Balanced
        } else if gap > 0.0 {
            CommunicationsProfile::MediaDominant
        } else {
            CommunicationsProfile::ReputationDominant
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            CommunicationsProfile::Balanced => "Media activity matches the reputational base",
            CommunicationsProfile::MediaDominant => {
                "Media activity outpaces the institutional base; invest in transparency and governance"
            }
            CommunicationsProfile::ReputationDominant => {
                "The institutional base is stronger than media presence; increase public activity"
            }
        }
    }
}

impl fmt::Display for CommunicationsProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CommunicationsProfile::Balanced => "Balanced",
            CommunicationsProfile::MediaDominant => "Media-dominant",
            CommunicationsProfile::ReputationDominant => "Reputation-dominant",
        };
        f.write_str(label)
    }
}

/// Headroom per component, largest first. Saturated components are omitted.
pub fn growth_potential(m_stab: f64, r_transp: f64, r_inst: f64, v_hr: f64) -> Vec<GrowthPotential> {
    let mut entries: Vec<GrowthPotential> = [
        ("Media stability", m_stab),
        ("Transparency", r_transp),
        ("Institutional maturity", r_inst),
        ("Employer brand", v_hr),
    ]
    .into_iter()
    .map(|(component, current)| GrowthPotential {
        component,
        current,
        potential: (100.0 - current).max(0.0),
    })
    .filter(|entry| entry.potential > 0.0)
    .collect();

    entries.sort_by(|a, b| b.potential.total_cmp(&a.potential));
    entries
}
