use super::date::FormDate;
use super::domain::{HealthPlanFormData, RateDetails, RateType};
use super::programs::{program_name, Program};

/// `MCR-<state>-<number:04>-<programs...>` with program names sorted so the result does
/// not depend on the order ids were selected in.
pub fn package_name(form: &HealthPlanFormData, programs: &[Program]) -> String {
    let mut program_names: Vec<&str> = form
        .program_ids
        .iter()
        .map(|id| program_name(programs, id))
        .collect();
    program_names.sort_unstable();

    let mut segments = vec![
        "MCR".to_string(),
        form.state_code.clone(),
        format!("{:04}", form.state_number),
    ];
    segments.extend(program_names.into_iter().map(str::to_string));
    segments.join("-")
}

/// Rate certification name derived from the parent package name. Missing dates are
/// skipped rather than left as empty segments.
pub fn generate_rate_name(rate: &RateDetails, submission_name: &str) -> String {
    let mut segments = vec![submission_name.to_string(), "RATE".to_string()];

    match rate.rate_type {
        Some(RateType::Amendment) => {
            let info = rate.rate_amendment_info.as_ref();
            push_date(
                &mut segments,
                info.and_then(|info| info.effective_date_start.as_ref()),
            );
            push_date(
                &mut segments,
                info.and_then(|info| info.effective_date_end.as_ref()),
            );
            segments.push("AMENDMENT".to_string());
            push_date(&mut segments, rate.rate_date_certified.as_ref());
        }
        Some(RateType::New) => {
            push_date(&mut segments, rate.rate_date_start.as_ref());
            push_date(&mut segments, rate.rate_date_end.as_ref());
            segments.push("CERTIFICATION".to_string());
            push_date(&mut segments, rate.rate_date_certified.as_ref());
        }
        None => {
            push_date(&mut segments, rate.rate_date_start.as_ref());
            push_date(&mut segments, rate.rate_date_end.as_ref());
            push_date(&mut segments, rate.rate_date_certified.as_ref());
        }
    }

    segments.join("-")
}

/// Rate name for contract-and-rates packages, `None` otherwise.
pub fn rate_name(form: &HealthPlanFormData, programs: &[Program]) -> Option<String> {
    form.rates()
        .map(|rates| generate_rate_name(rates, &package_name(form, programs)))
}

fn push_date(segments: &mut Vec<String>, date: Option<&FormDate>) {
    if let Some(segment) = date.map(FormDate::name_segment) {
        if !segment.is_empty() {
            segments.push(segment);
        }
    }
}
