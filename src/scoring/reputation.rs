//! Reputation subindex: employer brand, transparency and institutional
//! maturity, averaged with equal weight.

use crate::calibration::criteria::{Criterion, CHECKLIST_CAP};

use super::clamp_score;
use super::inputs::EmployerBrand;

/// Employer-brand value for organizations absent from the ranking that are
/// too small or private to be expected in it.
const ABSENT_SMALL_VALUE: f64 = 50.0;

/// Percentile of `rank` among `total` participants, in [0, 100].
///
/// Rank 1 scores 100 and the last rank scores 0. A ranking with at most one
/// participant carries no information and scores 0.
pub fn ranking_percentile(rank: u32, total: u32) -> f64 {
    if total <= 1 {
        return 0.0;
    }
    let position = (rank as f64 - 1.0) / (total as f64 - 1.0);
    clamp_score((1.0 - position) * 100.0)
}

/// `v_hr` for any employer-brand standing.
pub fn employer_brand_value(brand: &EmployerBrand) -> f64 {
    match brand {
        EmployerBrand::Ranked { rank, total } => ranking_percentile(*rank, *total),
        EmployerBrand::AbsentLarge => 0.0,
        EmployerBrand::AbsentSmall => ABSENT_SMALL_VALUE,
        EmployerBrand::Manual { value } => clamp_score(*value),
    }
}

/// Points earned on a checklist, capped at 100.
///
/// Answers pair with criteria by position; surplus answers on either side
/// are ignored. Points above the cap are discarded, not redistributed.
pub fn checklist_score(answers: &[bool], catalog: &[Criterion]) -> f64 {
    let earned: u32 = answers
        .iter()
        .zip(catalog)
        .filter(|(met, _)| **met)
        .map(|(_, criterion)| criterion.points)
        .sum();
    earned.min(CHECKLIST_CAP) as f64
}

/// Unweighted mean of the three reputation components.
pub fn reputation_score(v_hr: f64, r_transp: f64, r_inst: f64) -> f64 {
    (v_hr + r_transp + r_inst) / 3.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calibration::{INSTITUTIONAL_CRITERIA, TRANSPARENCY_CRITERIA};

    #[test]
    fn test_ranking_percentile_example() {
        // (1 - 44/699) * 100
        let v_hr = ranking_percentile(45, 700);
        assert!((v_hr - 93.705).abs() < 0.01);
    }

    #[test]
    fn test_ranking_percentile_extremes() {
        assert_eq!(ranking_percentile(1, 700), 100.0);
        assert_eq!(ranking_percentile(700, 700), 0.0);
    }

    #[test]
    fn test_ranking_percentile_out_of_range_rank_clamped() {
        assert_eq!(ranking_percentile(900, 700), 0.0);
        assert_eq!(ranking_percentile(0, 700), 100.0);
    }

    #[test]
    fn test_ranking_percentile_single_participant() {
        assert_eq!(ranking_percentile(1, 1), 0.0);
        assert_eq!(ranking_percentile(1, 0), 0.0);
    }

    #[test]
    fn test_employer_brand_fixed_values() {
        assert_eq!(employer_brand_value(&EmployerBrand::AbsentLarge), 0.0);
        assert_eq!(employer_brand_value(&EmployerBrand::AbsentSmall), 50.0);
        assert_eq!(employer_brand_value(&EmployerBrand::Manual { value: 35.0 }), 35.0);
    }

    #[test]
    fn test_transparency_ten_points_each() {
        let mut answers = [false; 10];
        answers[0] = true;
        answers[3] = true;
        answers[9] = true;
        assert_eq!(checklist_score(&answers, &TRANSPARENCY_CRITERIA), 30.0);
        assert_eq!(checklist_score(&[true; 10], &TRANSPARENCY_CRITERIA), 100.0);
        assert_eq!(checklist_score(&[false; 10], &TRANSPARENCY_CRITERIA), 0.0);
    }

    #[test]
    fn test_institutional_uses_criterion_points() {
        let mut answers = [false; 13];
        answers[0] = true; // 10
        answers[4] = true; // 5
        answers[5] = true; // 5
        assert_eq!(checklist_score(&answers, &INSTITUTIONAL_CRITERIA), 20.0);
    }

    #[test]
    fn test_institutional_capped_at_100() {
        // raw total is 120
        assert_eq!(checklist_score(&[true; 13], &INSTITUTIONAL_CRITERIA), 100.0);
    }

    #[test]
    fn test_checklist_scores_bounded() {
        // every subset of the first 13 bits through a sample of masks
        for mask in (0u32..(1 << 13)).step_by(37) {
            let answers: Vec<bool> = (0..13).map(|bit| mask & (1 << bit) != 0).collect();
            let r_inst = checklist_score(&answers, &INSTITUTIONAL_CRITERIA);
            let r_transp = checklist_score(&answers[..10], &TRANSPARENCY_CRITERIA);
            assert!((0.0..=100.0).contains(&r_inst));
            assert!((0.0..=100.0).contains(&r_transp));
        }
    }

    #[test]
    fn test_reputation_score_mean() {
        assert!((reputation_score(90.0, 60.0, 30.0) - 60.0).abs() < 1e-9);
        assert_eq!(reputation_score(100.0, 100.0, 100.0), 100.0);
        assert_eq!(reputation_score(0.0, 0.0, 0.0), 0.0);
    }
}
