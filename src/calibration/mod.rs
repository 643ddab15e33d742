pub mod criteria;
pub mod industry;
pub mod registry;

pub use criteria::{Criterion, INSTITUTIONAL_CRITERIA, TRANSPARENCY_CRITERIA};
pub use industry::{IndustryProfile, SizeCategory};
pub use registry::{CalibrationRegistry, IndustryOverride, OTHER_INDUSTRY};
