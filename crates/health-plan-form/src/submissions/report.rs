use serde::Serialize;

use super::domain::HealthPlanFormData;
use super::lock::{
    is_locked_health_plan_form_data, is_unlocked_health_plan_form_data, lock_violations,
};
use super::naming::{package_name, rate_name};
use super::predicates::{is_contract_and_rates, is_contract_only};
use super::programs::Program;
use super::validation::{
    has_valid_contract, has_valid_documents, has_valid_rates,
    has_valid_supporting_document_categories,
};

/// Serializable view of every check and derived name for one package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormDataReport {
    pub package_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_name: Option<String>,
    pub status: Option<&'static str>,
    pub submission_type: Option<&'static str>,
    pub checks: FormDataChecks,
    pub violations: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormDataChecks {
    pub locked: bool,
    pub unlocked: bool,
    pub contract_only: bool,
    pub contract_and_rates: bool,
    pub valid_contract: bool,
    /// Only reported for packages that file rates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_rates: Option<bool>,
    pub valid_documents: bool,
    pub valid_supporting_document_categories: bool,
}

impl FormDataReport {
    pub fn build(form: &HealthPlanFormData, programs: &[Program]) -> Self {
        let contract_and_rates = is_contract_and_rates(form);

        let checks = FormDataChecks {
            locked: is_locked_health_plan_form_data(form),
            unlocked: is_unlocked_health_plan_form_data(form),
            contract_only: is_contract_only(form),
            contract_and_rates,
            valid_contract: has_valid_contract(form),
            valid_rates: contract_and_rates.then(|| has_valid_rates(form)),
            valid_documents: has_valid_documents(form),
            valid_supporting_document_categories: has_valid_supporting_document_categories(form),
        };

        Self {
            package_name: package_name(form, programs),
            rate_name: rate_name(form, programs),
            status: form.status.map(|status| status.label()),
            submission_type: form.submission_type().map(|kind| kind.label()),
            checks,
            violations: lock_violations(form)
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}
