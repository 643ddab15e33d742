//! Checklist catalogs for the reputation subindex.
//!
//! Checklist answers are boolean vectors matched one-to-one, by position,
//! against these catalogs.

/// A checklist item and the points it contributes when satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Criterion {
    pub label: &'static str,
    pub points: u32,
}

const fn criterion(label: &'static str, points: u32) -> Criterion {
    Criterion { label, points }
}

/// Points every satisfied transparency criterion adds.
pub const TRANSPARENCY_POINTS: u32 = 10;

pub const TRANSPARENCY_CRITERIA: [Criterion; 10] = [
    criterion("Annual report is published on the official website", TRANSPARENCY_POINTS),
    criterion("Financial statements are certified by an external auditor", TRANSPARENCY_POINTS),
    criterion("A sustainability (ESG/CSR) report is published", TRANSPARENCY_POINTS),
    criterion("Reporting follows international standards (GRI, SASB)", TRANSPARENCY_POINTS),
    criterion("Ownership structure is disclosed", TRANSPARENCY_POINTS),
    criterion("Governing bodies are disclosed with biographies", TRANSPARENCY_POINTS),
    criterion("Top management remuneration is disclosed", TRANSPARENCY_POINTS),
    criterion("The material facts section is updated regularly", TRANSPARENCY_POINTS),
    criterion("Website lists contacts for investors, media and job seekers", TRANSPARENCY_POINTS),
    criterion("An English version of the annual report or website is available", TRANSPARENCY_POINTS),
];

pub const INSTITUTIONAL_CRITERIA: [Criterion; 13] = [
    criterion("The company has a dedicated communications unit", 10),
    criterion("The head of communications is part of top management", 10),
    criterion("The website publishes corporate news and press office contacts", 10),
    criterion("Corporate news is published at least 4 times a month", 10),
    criterion("The company runs an official VK community", 5),
    criterion("The company runs an official Telegram channel", 5),
    criterion("The communications strategy is publicly available", 10),
    criterion("A feedback channel exists (hotline, contact center, request form)", 10),
    criterion("Crisis communication procedures are in place", 10),
    criterion("The company or its head of communications belongs to a professional association", 10),
    criterion("Communications awards or recognition within the last 3 years", 10),
    criterion("Communications KPIs are tied to business results", 10),
    criterion("Reputation or stakeholder perception is monitored at least yearly", 10),
];

/// Upper bound of both checklist scores.
pub const CHECKLIST_CAP: u32 = 100;

#[cfg(test)]
mod tests {
    use super::*;

    fn total_points(catalog: &[Criterion]) -> u32 {
        catalog.iter().map(|c| c.points).sum()
    }

    #[test]
    fn test_transparency_maximum_is_cap() {
        assert_eq!(total_points(&TRANSPARENCY_CRITERIA), CHECKLIST_CAP);
    }

    #[test]
    fn test_institutional_maximum_exceeds_cap() {
        // 11 items at 10 points and 2 at 5
        assert_eq!(total_points(&INSTITUTIONAL_CRITERIA), 120);
    }

    #[test]
    fn test_institutional_points_are_five_or_ten() {
        assert!(INSTITUTIONAL_CRITERIA
            .iter()
            .all(|c| c.points == 5 || c.points == 10));
    }
}
