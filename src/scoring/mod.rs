pub mod composite;
pub mod diagnostics;
pub mod efficiency;
pub mod engine;
pub mod inputs;
pub mod media;
pub mod rating;
pub mod recommend;
pub mod reputation;
pub mod validation;

pub use diagnostics::{CommunicationsProfile, GrowthPotential};
pub use engine::{evaluate, CompositeResult, EvaluationError, Evaluation, ExtendedResult, SubindexResult};
pub use inputs::{BudgetInput, EmployerBrand, ExtendedInputs, MediaInputs, ReturnInput, ScoreInputs};
pub use media::Volatility;
pub use rating::QualityRating;
pub use recommend::{Recommendation, RecommendationArea};
pub use validation::validate_inputs;

/// Clamp a subindex into [0, 100].
pub(crate) fn clamp_score(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}
