use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Starter assessment file written by `iseec init`.
pub const TEMPLATE: &str = r#"# ISEEC assessment
#
# Run `iseec score <this file>` to compute the index.
# `iseec industries` lists valid industry ids.

organization: Example Corp
period: 2025

# Either an industry id or a classification code (e.g. "62.01")
industry: telecom_it
# industry_code: "62.01"

employees: 10000
# Listed as a strategic enterprise
strategic: false

# Media presence. Use `source: manual` with total/positive/negative
# publication counts when no monitoring index is available.
media:
  source: monitoring
  annual_value: 45000
  # x_ref: 45000        # overrides the industry benchmark
  monthly: [3900, 3900, 3900, 3900, 3900, 3900, 3900, 3900, 3900, 3900, 3900, 3900]

# Employer ranking: ranked (rank/total), absent_large, absent_small,
# or manual (value 0-100)
employer_brand:
  status: ranked
  rank: 45
  total: 700

# Ten transparency criteria, in order:
#  1. Annual report published on the official website
#  2. Financial statements certified by an external auditor
#  3. Sustainability (ESG/CSR) report published
#  4. Reporting follows international standards (GRI, SASB)
#  5. Ownership structure disclosed
#  6. Governing bodies disclosed with biographies
#  7. Top management remuneration disclosed
#  8. Material facts section updated regularly
#  9. Contacts for investors, media and job seekers listed
# 10. English version of the annual report or website available
transparency: [true, true, false, false, true, true, false, true, true, false]

# Thirteen institutional-maturity criteria, in order (points):
#  1. Dedicated communications unit (10)
#  2. Head of communications in top management (10)
#  3. Corporate news and press office contacts on the website (10)
#  4. News published at least 4 times a month (10)
#  5. Official VK community (5)
#  6. Official Telegram channel (5)
#  7. Public communications strategy (10)
#  8. Feedback channel: hotline, contact center, request form (10)
#  9. Crisis communication procedures (10)
# 10. Membership in a professional association (10)
# 11. Communications awards in the last 3 years (10)
# 12. Communications KPIs tied to business results (10)
# 13. Reputation monitored at least yearly (10)
institutional: [true, true, true, false, true, true, false, true, true, false, false, false, true]

# Extended contour, needs internal management data. Remove to skip.
extended:
  roi:
    percent: 15
  sroi:
    benefit: 630
    cost: 450
  budget:
    plan: 430
    fact: 450
    approved: false
"#;

/// Write the starter assessment to `path`.
///
/// Refuses to replace an existing file unless `force` is set. The write is
/// atomic, so an interrupted run never leaves a truncated file behind.
pub fn write_template(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite it",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;
    file.write_all(TEMPLATE.as_bytes())
        .context("Failed to write assessment template")?;
    file.commit().context("Failed to save assessment template")?;

    Ok(())
}
