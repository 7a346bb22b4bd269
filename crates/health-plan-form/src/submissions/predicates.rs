use super::domain::{HealthPlanFormData, SubmissionStatus, SubmissionType};

pub fn is_draft(form: &HealthPlanFormData) -> bool {
    form.status == Some(SubmissionStatus::Draft)
}

/// Status check only; see `is_locked_health_plan_form_data` for the completeness gate.
pub fn is_locked(form: &HealthPlanFormData) -> bool {
    form.status == Some(SubmissionStatus::Submitted)
}

pub fn is_contract_only(form: &HealthPlanFormData) -> bool {
    form.submission_type() == Some(SubmissionType::ContractOnly)
}

pub fn is_contract_and_rates(form: &HealthPlanFormData) -> bool {
    form.submission_type() == Some(SubmissionType::ContractAndRates)
}
