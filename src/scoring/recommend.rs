use serde::Serialize;
use std::cmp::Reverse;
use std::fmt;

use crate::calibration::criteria::{Criterion, TRANSPARENCY_POINTS};

/// Maximum number of recommendations returned.
pub const MAX_RECOMMENDATIONS: usize = 5;

/// Subindex values below this trigger a systemic recommendation.
const WEAK_SUBINDEX: f64 = 50.0;

const EMPLOYER_BRAND_ACTION: &str = "Take part in a national employer ranking";
const EMPLOYER_BRAND_POTENTIAL: u32 = 50;

const MEDIA_ACTION: &str = "Strengthen media presence and increase the number of publications";
const MEDIA_POTENTIAL: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationArea {
    Transparency,
    InstitutionalMaturity,
    EmployerBrand,
    MediaActivity,
}

impl fmt::Display for RecommendationArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RecommendationArea::Transparency => "Transparency",
            RecommendationArea::InstitutionalMaturity => "Institutional maturity",
            RecommendationArea::EmployerBrand => "Employer brand",
            RecommendationArea::MediaActivity => "Media activity",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub area: RecommendationArea,
    pub action: String,
    /// Points the action can add to its subindex
    pub potential: u32,
    /// 1 = systemic weakness, 2 = major checklist gap, 3 = minor checklist gap
    pub priority: u8,
}

/// Rank improvement actions for the unmet criteria and weak subindices.
///
/// Systemic weaknesses (priority 1) always come first; within a priority the
/// larger potential wins, and equal entries keep catalog order.
pub fn recommend(
    transparency: &[bool],
    transparency_catalog: &[Criterion],
    institutional: &[bool],
    institutional_catalog: &[Criterion],
    v_hr: f64,
    m_stab: f64,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    for (met, criterion) in transparency.iter().zip(transparency_catalog) {
        if !met {
            recommendations.push(Recommendation {
                area: RecommendationArea::Transparency,
                action: criterion.label.to_string(),
                potential: TRANSPARENCY_POINTS,
                priority: 2,
            });
        }
    }

    for (met, criterion) in institutional.iter().zip(institutional_catalog) {
        if !met {
            recommendations.push(Recommendation {
                area: RecommendationArea::InstitutionalMaturity,
                action: criterion.label.to_string(),
                potential: criterion.points,
                priority: if criterion.points == 10 { 2 } else { 3 },
            });
        }
    }

    if v_hr < WEAK_SUBINDEX {
        recommendations.push(Recommendation {
            area: RecommendationArea::EmployerBrand,
            action: EMPLOYER_BRAND_ACTION.to_string(),
            potential: EMPLOYER_BRAND_POTENTIAL,
            priority: 1,
        });
    }

    if m_stab < WEAK_SUBINDEX {
        recommendations.push(Recommendation {
            area: RecommendationArea::MediaActivity,
            action: MEDIA_ACTION.to_string(),
            potential: MEDIA_POTENTIAL,
            priority: 1,
        });
    }

    // sort_by_key is stable
    recommendations.sort_by_key(|r| (r.priority, Reverse(r.potential)));
    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calibration::{INSTITUTIONAL_CRITERIA, TRANSPARENCY_CRITERIA};

    fn run(transparency: &[bool], institutional: &[bool], v_hr: f64, m_stab: f64) -> Vec<Recommendation> {
        recommend(
            transparency,
            &TRANSPARENCY_CRITERIA,
            institutional,
            &INSTITUTIONAL_CRITERIA,
            v_hr,
            m_stab,
        )
    }

    #[test]
    fn test_nothing_to_recommend() {
        assert!(run(&[true; 10], &[true; 13], 80.0, 80.0).is_empty());
    }

    #[test]
    fn test_systemic_weaknesses_first() {
        let recs = run(&[false; 10], &[false; 13], 10.0, 10.0);
        assert_eq!(recs.len(), MAX_RECOMMENDATIONS);
        assert_eq!(recs[0].area, RecommendationArea::EmployerBrand);
        assert_eq!(recs[0].potential, 50);
        assert_eq!(recs[1].area, RecommendationArea::MediaActivity);
        assert_eq!(recs[1].potential, 30);
        assert!(recs[2..].iter().all(|r| r.priority == 2));
    }

    #[test]
    fn test_checklist_gaps_keep_catalog_order() {
        let recs = run(&[false; 10], &[true; 13], 80.0, 80.0);
        assert_eq!(recs.len(), 5);
        for (rec, criterion) in recs.iter().zip(TRANSPARENCY_CRITERIA.iter()) {
            assert_eq!(rec.action, criterion.label);
            assert_eq!(rec.area, RecommendationArea::Transparency);
        }
    }

    #[test]
    fn test_five_point_criteria_deprioritized() {
        let mut institutional = [true; 13];
        institutional[4] = false; // VK, 5 points
        institutional[11] = false; // KPIs, 10 points
        let recs = run(&[true; 10], &institutional, 80.0, 80.0);
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].potential, 10);
        assert_eq!(recs[0].priority, 2);
        assert_eq!(recs[1].potential, 5);
        assert_eq!(recs[1].priority, 3);
    }

    #[test]
    fn test_thresholds_are_strict() {
        assert!(run(&[true; 10], &[true; 13], 50.0, 50.0).is_empty());
        let recs = run(&[true; 10], &[true; 13], 49.9, 50.0);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].area, RecommendationArea::EmployerBrand);
    }

    #[test]
    fn test_sorted_by_priority_then_potential() {
        let mut transparency = [true; 10];
        transparency[2] = false;
        let mut institutional = [true; 13];
        institutional[5] = false;
        let recs = run(&transparency, &institutional, 20.0, 90.0);
        let keys: Vec<(u8, u32)> = recs.iter().map(|r| (r.priority, r.potential)).collect();
        assert_eq!(keys, vec![(1, 50), (2, 10), (3, 5)]);
    }
}
