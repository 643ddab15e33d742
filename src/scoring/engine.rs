use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::calibration::{IndustryProfile, INSTITUTIONAL_CRITERIA, TRANSPARENCY_CRITERIA};

use super::composite::{baseline_score, core_index, scale_multiplier};
use super::diagnostics::{growth_potential, CommunicationsProfile, GrowthPotential};
use super::efficiency::{adjust, extended_score, EfficiencyAdjustment};
use super::inputs::{MediaInputs, ScoreInputs};
use super::media::{manual_media_index, media_index, media_stability, volatility, Volatility};
use super::rating::QualityRating;
use super::recommend::{recommend, Recommendation};
use super::reputation::{checklist_score, employer_brand_value, reputation_score};
use super::validation::validate_inputs;

#[derive(Debug, Error)]
pub enum EvaluationError {
    #[error("invalid inputs: {}", .0.join("; "))]
    InvalidInputs(Vec<String>),
}

/// Media and reputation subindices.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubindexResult {
    pub i_media: f64,
    pub v_vol: Volatility,
    pub m_stab: f64,
    pub v_hr: f64,
    pub r_transp: f64,
    pub r_inst: f64,
    pub s_rep: f64,
}

/// Extended-contour figures, present only when the caller supplied them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtendedResult {
    #[serde(flatten)]
    pub adjustment: EfficiencyAdjustment,
    pub iseec_e: f64,
    pub rating_e: QualityRating,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompositeResult {
    pub i_core: f64,
    pub k_risk: f64,
    pub k_scale: f64,
    pub iseec_b: f64,
    pub rating_b: QualityRating,
    pub extended: Option<ExtendedResult>,
}

impl CompositeResult {
    pub fn k_eff(&self) -> Option<f64> {
        self.extended.as_ref().map(|e| e.adjustment.k_eff)
    }

    pub fn iseec_e(&self) -> Option<f64> {
        self.extended.as_ref().map(|e| e.iseec_e)
    }
}

/// Everything computed for one organization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub industry: String,
    pub subindices: SubindexResult,
    pub composite: CompositeResult,
    pub recommendations: Vec<Recommendation>,
    pub growth: Vec<GrowthPotential>,
    pub profile: CommunicationsProfile,
}

/// Media side of the pipeline. A monitoring `x_ref` override replaces the
/// industry benchmark for both the index and the noise threshold.
pub fn media_subindex(media: &MediaInputs, industry: &IndustryProfile) -> (f64, Volatility, f64) {
    let (i_media, v_vol) = match media {
        MediaInputs::Monitoring {
            annual_value,
            x_ref,
            monthly,
        } => {
            let x_ref = x_ref.unwrap_or(industry.x_ref);
            (media_index(*annual_value, x_ref), volatility(monthly, Some(x_ref)))
        }
        MediaInputs::Manual {
            total,
            positive,
            negative,
            monthly,
        } => (manual_media_index(*positive, *negative, *total), volatility(monthly, None)),
    };
    (i_media, v_vol, media_stability(i_media, v_vol))
}

/// Score one organization against its industry calibration.
pub fn evaluate(inputs: &ScoreInputs, industry: &IndustryProfile) -> Result<Evaluation, EvaluationError> {
    validate_inputs(inputs, TRANSPARENCY_CRITERIA.len(), INSTITUTIONAL_CRITERIA.len())
        .map_err(EvaluationError::InvalidInputs)?;

    let (i_media, v_vol, m_stab) = media_subindex(&inputs.media, industry);
    debug!(industry = %industry.id, i_media, ?v_vol, m_stab, "media subindex");

    let v_hr = employer_brand_value(&inputs.employer_brand);
    let r_transp = checklist_score(&inputs.transparency, &TRANSPARENCY_CRITERIA);
    let r_inst = checklist_score(&inputs.institutional, &INSTITUTIONAL_CRITERIA);
    let s_rep = reputation_score(v_hr, r_transp, r_inst);
    debug!(v_hr, r_transp, r_inst, s_rep, "reputation subindex");

    let i_core = core_index(m_stab, s_rep);
    let k_scale = scale_multiplier(inputs.employees, inputs.strategic);
    let iseec_b = baseline_score(i_core, industry.k_risk, k_scale);
    debug!(i_core, k_risk = industry.k_risk, k_scale, iseec_b, "baseline score");

    let extended = inputs.extended.as_ref().map(|block| {
        let adjustment = adjust(block);
        let iseec_e = extended_score(iseec_b, adjustment.k_eff);
        debug!(
            k_roi = adjustment.k_roi,
            k_sroi = adjustment.k_sroi,
            k_budget = adjustment.k_budget,
            iseec_e,
            "extended score"
        );
        ExtendedResult {
            adjustment,
            iseec_e,
            rating_e: QualityRating::classify(iseec_e),
        }
    });

    let recommendations = recommend(
        &inputs.transparency,
        &TRANSPARENCY_CRITERIA,
        &inputs.institutional,
        &INSTITUTIONAL_CRITERIA,
        v_hr,
        m_stab,
    );

    Ok(Evaluation {
        industry: industry.id.clone(),
        subindices: SubindexResult {
            i_media,
            v_vol,
            m_stab,
            v_hr,
            r_transp,
            r_inst,
            s_rep,
        },
        composite: CompositeResult {
            i_core,
            k_risk: industry.k_risk,
            k_scale,
            iseec_b,
            rating_b: QualityRating::classify(iseec_b),
            extended,
        },
        recommendations,
        growth: growth_potential(m_stab, r_transp, r_inst, v_hr),
        profile: CommunicationsProfile::classify(m_stab, s_rep),
    })
}
