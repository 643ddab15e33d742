use super::inputs::{EmployerBrand, MediaInputs, ReturnInput, ScoreInputs, MONTHS};

/// Check the shape of `inputs` against the checklist catalog sizes.
/// Returns all validation errors at once (not just the first).
pub fn validate_inputs(
    inputs: &ScoreInputs,
    transparency_len: usize,
    institutional_len: usize,
) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    match &inputs.media {
        MediaInputs::Monitoring {
            annual_value,
            x_ref,
            monthly,
        } => {
            check_finite(&mut errors, "media.annual_value", *annual_value);
            if let Some(x_ref) = x_ref {
                check_finite(&mut errors, "media.x_ref", *x_ref);
            }
            check_series(&mut errors, monthly);
        }
        MediaInputs::Manual {
            total,
            positive,
            negative,
            monthly,
        } => {
            for (field, value) in [("total", total), ("positive", positive), ("negative", negative)] {
                if *value < 0 {
                    errors.push(format!("media.{}: must be non-negative (got {})", field, value));
                }
            }
            check_series(&mut errors, monthly);
        }
    }

    match inputs.employer_brand {
        EmployerBrand::Ranked { rank, .. } if rank < 1 => {
            errors.push("employer_brand.rank: must be at least 1".to_string());
        }
        EmployerBrand::Manual { value } if !(0.0..=100.0).contains(&value) => {
            errors.push(format!("employer_brand.value: must be within 0..=100 (got {})", value));
        }
        _ => {}
    }

    if inputs.transparency.len() != transparency_len {
        errors.push(format!(
            "transparency: expected {} answers, got {}",
            transparency_len,
            inputs.transparency.len()
        ));
    }
    if inputs.institutional.len() != institutional_len {
        errors.push(format!(
            "institutional: expected {} answers, got {}",
            institutional_len,
            inputs.institutional.len()
        ));
    }

    if let Some(ref extended) = inputs.extended {
        for (field, ret) in [("roi", &extended.roi), ("sroi", &extended.sroi)] {
            match ret {
                Some(ReturnInput::Percent { percent }) => {
                    check_finite(&mut errors, &format!("extended.{}.percent", field), *percent);
                }
                Some(ReturnInput::Computed { benefit, cost }) => {
                    check_finite(&mut errors, &format!("extended.{}.benefit", field), *benefit);
                    check_finite(&mut errors, &format!("extended.{}.cost", field), *cost);
                }
                None => {}
            }
        }
        if let Some(ref budget) = extended.budget {
            check_finite(&mut errors, "extended.budget.plan", budget.plan);
            check_finite(&mut errors, "extended.budget.fact", budget.fact);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_finite(errors: &mut Vec<String>, field: &str, value: f64) {
    if !value.is_finite() {
        errors.push(format!("{}: must be a finite number", field));
    }
}

fn check_series(errors: &mut Vec<String>, monthly: &[f64]) {
    if monthly.len() != MONTHS {
        errors.push(format!(
            "media.monthly: expected {} values, got {}",
            MONTHS,
            monthly.len()
        ));
    }
    if let Some(i) = monthly.iter().position(|v| !v.is_finite()) {
        errors.push(format!("media.monthly[{}]: must be a finite number", i));
    }
}
