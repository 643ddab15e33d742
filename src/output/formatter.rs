use std::io::IsTerminal;

use chrono::{DateTime, Local};
use owo_colors::OwoColorize;
use serde::Serialize;
use terminal_size::{terminal_size, Width};

use crate::calibration::{CalibrationRegistry, IndustryProfile};
use crate::scoring::{Evaluation, QualityRating, Volatility};

/// Widest divider line, also used for pipes
const MAX_DIVIDER: usize = 60;

/// An evaluation together with the organization details it was computed for.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub organization: Option<&'a str>,
    pub period: Option<u16>,
    /// Serialized as `calibration`; the flattened evaluation carries the id
    #[serde(rename = "calibration")]
    pub industry: &'a IndustryProfile,
    pub employees: u64,
    pub strategic: bool,
    pub generated_at: DateTime<Local>,
    #[serde(flatten)]
    pub evaluation: &'a Evaluation,
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a score with one decimal
pub fn format_score(score: f64) -> String {
    format!("{:.1}", score)
}

/// Format an integer with thousands separators (12,500)
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn format_volatility(v_vol: &Volatility) -> String {
    match v_vol {
        Volatility::Ratio(v) => format!("{:.3}", v),
        Volatility::Indeterminate => "indeterminate".to_string(),
    }
}

fn divider_width() -> usize {
    terminal_size()
        .map(|(Width(w), _)| (w as usize).min(MAX_DIVIDER))
        .unwrap_or(MAX_DIVIDER)
}

fn heading(text: &str, use_colors: bool) -> String {
    if use_colors {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

/// Rating label with its marker, colored by band
fn format_rating(rating: QualityRating, use_colors: bool) -> String {
    let label = format!("{} {}", rating.marker(), rating.label());
    if !use_colors {
        return label;
    }
    match rating {
        QualityRating::VeryHigh | QualityRating::High => label.green().bold().to_string(),
        QualityRating::Medium => label.yellow().bold().to_string(),
        QualityRating::Low => label.truecolor(253, 126, 20).bold().to_string(),
        QualityRating::CriticallyLow => label.red().bold().to_string(),
    }
}

/// Render the full human-readable report.
pub fn format_report(report: &Report, use_colors: bool) -> String {
    let eval = report.evaluation;
    let sub = &eval.subindices;
    let composite = &eval.composite;
    let rule = "=".repeat(divider_width());
    let mut lines = Vec::new();

    lines.push(heading("ISEEC REPORT", use_colors));
    lines.push(rule.clone());
    lines.push(format!(
        "Generated: {}",
        report.generated_at.format("%d.%m.%Y %H:%M")
    ));
    lines.push(String::new());

    lines.push(heading("1. Organization", use_colors));
    lines.push(format!(
        "  Name:       {}",
        report.organization.unwrap_or("Not specified")
    ));
    if let Some(period) = report.period {
        lines.push(format!("  Period:     {}", period));
    }
    lines.push(format!(
        "  Industry:   {} ({})",
        report.industry.name, report.industry.id
    ));
    lines.push(format!(
        "  Employees:  {}{}",
        format_count(report.employees),
        if report.strategic { " (strategic)" } else { "" }
    ));
    lines.push(String::new());

    lines.push(heading("2. Results", use_colors));
    lines.push(format!(
        "  ISEEC_B (baseline):  {:>6}  {}",
        format_score(composite.iseec_b),
        format_rating(composite.rating_b, use_colors)
    ));
    if let Some(ref extended) = composite.extended {
        lines.push(format!(
            "  ISEEC_E (extended):  {:>6}  {}",
            format_score(extended.iseec_e),
            format_rating(extended.rating_e, use_colors)
        ));
    }
    lines.push(format!("  I_Core (core):       {:>6}", format_score(composite.i_core)));
    lines.push(String::new());

    lines.push(heading("3. Interpretation scale", use_colors));
    for rating in QualityRating::scale() {
        lines.push(format!(
            "  {:<7} {:<15} {}",
            rating.range(),
            rating.label(),
            rating.interpretation()
        ));
    }
    lines.push(String::new());

    lines.push(heading("4. Breakdown", use_colors));
    lines.push(format!(
        "  Media stability (M_stab):        {:>5} / 100",
        format_score(sub.m_stab)
    ));
    lines.push(format!(
        "    I_media {}, V_vol {}",
        format_score(sub.i_media),
        format_volatility(&sub.v_vol)
    ));
    lines.push(format!(
        "  Social reputation (S_rep):       {:>5} / 100",
        format_score(sub.s_rep)
    ));
    lines.push(format!(
        "    V_hr {}, R_transp {:.0}, R_inst {:.0}",
        format_score(sub.v_hr),
        sub.r_transp,
        sub.r_inst
    ));
    lines.push(format!(
        "  I_Core = M_stab x 0.6 + S_rep x 0.4 = {}",
        format_score(composite.i_core)
    ));
    lines.push(format!(
        "  K_risk = {:.2}, K_scale = {:.2}",
        composite.k_risk, composite.k_scale
    ));
    lines.push(format!(
        "  ISEEC_B = I_Core x K_risk x K_scale = {}",
        format_score(composite.iseec_b)
    ));
    if let Some(ref extended) = composite.extended {
        let adj = &extended.adjustment;
        lines.push(format!(
            "  K_eff = {:.2} (ROI {:+.2}, SROI {:+.2}, budget {:+.2})",
            adj.k_eff, adj.k_roi, adj.k_sroi, adj.k_budget
        ));
        lines.push(format!(
            "  ISEEC_E = ISEEC_B x K_eff = {}",
            format_score(extended.iseec_e)
        ));
    }
    lines.push(String::new());

    if !eval.growth.is_empty() {
        lines.push(heading("5. Growth potential", use_colors));
        for entry in &eval.growth {
            lines.push(format!(
                "  {:<24} {:>3.0} / 100   +{:.0}",
                entry.component, entry.current, entry.potential
            ));
        }
        lines.push(String::new());
    }

    lines.push(heading("6. Communications profile", use_colors));
    lines.push(format!("  {}: {}", eval.profile, eval.profile.description()));

    if !eval.recommendations.is_empty() {
        lines.push(String::new());
        lines.push(heading("7. Recommendations", use_colors));
        for (i, rec) in eval.recommendations.iter().enumerate() {
            lines.push(format!(
                "  {}. [{}] {} (+{} pts)",
                i + 1,
                rec.area,
                rec.action,
                rec.potential
            ));
        }
    }

    lines.push(rule);
    lines.join("\n")
}

/// Tab-separated metrics for scripting (no headers, no colors).
/// Extended metrics are omitted when the extended contour was not computed.
pub fn format_tsv(report: &Report) -> String {
    let eval = report.evaluation;
    let sub = &eval.subindices;
    let composite = &eval.composite;

    let mut rows: Vec<(&str, String)> = vec![
        ("industry", report.industry.id.clone()),
        ("i_media", format!("{:.4}", sub.i_media)),
        ("v_vol", format_volatility(&sub.v_vol)),
        ("m_stab", format!("{:.4}", sub.m_stab)),
        ("v_hr", format!("{:.4}", sub.v_hr)),
        ("r_transp", format!("{:.0}", sub.r_transp)),
        ("r_inst", format!("{:.0}", sub.r_inst)),
        ("s_rep", format!("{:.4}", sub.s_rep)),
        ("i_core", format!("{:.4}", composite.i_core)),
        ("k_risk", format!("{:.2}", composite.k_risk)),
        ("k_scale", format!("{:.2}", composite.k_scale)),
        ("iseec_b", format!("{:.4}", composite.iseec_b)),
        ("rating_b", composite.rating_b.label().to_string()),
    ];

    if let Some(ref extended) = composite.extended {
        rows.push(("k_eff", format!("{:.2}", extended.adjustment.k_eff)));
        rows.push(("iseec_e", format!("{:.4}", extended.iseec_e)));
        rows.push(("rating_e", extended.rating_e.label().to_string()));
    }

    rows.push(("profile", eval.profile.to_string()));

    rows.iter()
        .map(|(key, value)| format!("{}\t{}", key, value))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_json(report: &Report) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

/// List the calibration table, one industry per line
pub fn format_industries(registry: &CalibrationRegistry, use_colors: bool) -> String {
    let header = format!(
        "{:<14} {:>7} {:>6}  {:<8} {}",
        "ID", "X_REF", "K_RISK", "CATEGORY", "CODES"
    );
    let mut lines = vec![heading(&header, use_colors)];

    for profile in registry.iter() {
        let id = if use_colors {
            format!("{:<14}", profile.id).cyan().to_string()
        } else {
            format!("{:<14}", profile.id)
        };
        let codes = if profile.code_prefixes.is_empty() {
            "-".to_string()
        } else {
            profile.code_prefixes.join(", ")
        };
        lines.push(format!(
            "{} {:>7} {:>6.2}  {:<8} {}",
            id,
            format_count(profile.x_ref.round() as u64),
            profile.k_risk,
            profile.category.to_string(),
            codes
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{evaluate, EmployerBrand, ExtendedInputs, MediaInputs, ReturnInput, ScoreInputs};
    use chrono::TimeZone;

    fn sample_inputs(extended: bool) -> ScoreInputs {
        ScoreInputs {
            organization: Some("Acme Retail".to_string()),
            period: Some(2025),
            industry: Some("retail".to_string()),
            industry_code: None,
            employees: 12500,
            strategic: true,
            media: MediaInputs::Monitoring {
                annual_value: 20000.0,
                x_ref: None,
                monthly: vec![1600.0; 12],
            },
            employer_brand: EmployerBrand::AbsentSmall,
            transparency: vec![false; 10],
            institutional: vec![true; 13],
            extended: extended.then(|| ExtendedInputs {
                roi: Some(ReturnInput::Percent { percent: 15.0 }),
                ..Default::default()
            }),
        }
    }

    fn render<T>(extended: bool, f: impl Fn(&Report) -> T) -> T {
        let registry = CalibrationRegistry::builtin();
        let industry = registry.get("retail");
        let inputs = sample_inputs(extended);
        let evaluation = evaluate(&inputs, industry).unwrap();
        let report = Report {
            organization: inputs.organization.as_deref(),
            period: inputs.period,
            industry,
            employees: inputs.employees,
            strategic: inputs.strategic,
            generated_at: Local.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap(),
            evaluation: &evaluation,
        };
        f(&report)
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(99.16), "99.2");
        assert_eq!(format_score(0.0), "0.0");
        assert_eq!(format_score(115.5), "115.5");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(12500), "12,500");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn test_format_report_plain() {
        let text = render(false, |r| format_report(r, false));
        assert!(text.starts_with("ISEEC REPORT"));
        assert!(text.contains("Generated: 01.03.2026 09:30"));
        assert!(text.contains("Name:       Acme Retail"));
        assert!(text.contains("Retail and e-commerce (retail)"));
        assert!(text.contains("Employees:  12,500 (strategic)"));
        assert!(text.contains("ISEEC_B (baseline)"));
        assert!(!text.contains("ISEEC_E (extended)"));
        assert!(text.contains("K_scale = 1.05"));
        assert!(text.contains("1. [Transparency]"));
        assert!(!text.contains('\u{1b}'));
    }

    #[test]
    fn test_format_report_extended() {
        let text = render(true, |r| format_report(r, false));
        assert!(text.contains("ISEEC_E (extended)"));
        assert!(text.contains("K_eff = 1.05 (ROI +0.05, SROI +0.00, budget +0.00)"));
    }

    #[test]
    fn test_format_report_lists_at_most_five_recommendations() {
        let text = render(false, |r| format_report(r, false));
        assert!(text.contains("  5. ["));
        assert!(!text.contains("  6. ["));
    }

    #[test]
    fn test_format_report_colored() {
        let text = render(false, |r| format_report(r, true));
        assert!(text.contains('\u{1b}'));
    }

    #[test]
    fn test_format_tsv_without_extended() {
        let tsv = render(false, format_tsv);
        let lines: Vec<&str> = tsv.lines().collect();
        assert!(lines.iter().all(|l| l.split('\t').count() == 2));
        assert_eq!(lines[0], "industry\tretail");
        assert!(lines.contains(&"k_scale\t1.05"));
        assert!(lines.contains(&"v_vol\t0.000"));
        assert!(!tsv.contains("iseec_e"));
    }

    #[test]
    fn test_format_tsv_with_extended() {
        let tsv = render(true, format_tsv);
        assert!(tsv.contains("k_eff\t1.05"));
        assert!(tsv.contains("iseec_e\t"));
    }

    #[test]
    fn test_format_json() {
        let json = render(true, |r| format_json(r).unwrap());
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["organization"], "Acme Retail");
        assert_eq!(value["industry"], "retail");
        assert_eq!(value["calibration"]["x_ref"], 40000.0);
        assert_eq!(value["subindices"]["v_vol"]["ratio"], 0.0);
        assert_eq!(value["composite"]["extended"]["k_roi"], 0.05);
        assert!(value["recommendations"].as_array().unwrap().len() <= 5);
    }

    #[test]
    fn test_format_json_without_extended() {
        let json = render(false, |r| format_json(r).unwrap());
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["composite"]["extended"].is_null());
    }

    #[test]
    fn test_format_industries() {
        let registry = CalibrationRegistry::builtin();
        let table = format_industries(&registry, false);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), registry.len() + 1);
        assert!(lines[0].starts_with("ID"));
        assert!(lines[1].starts_with("energy"));
        assert!(lines[1].contains("60,000"));
        assert!(lines[1].contains("1.10"));
        assert!(lines.last().unwrap().starts_with("other"));
    }
}
