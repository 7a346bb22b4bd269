use std::ops::Deref;

use tracing::debug;

use super::domain::{HealthPlanFormData, RateType, SubmissionKind, SubmissionStatus};
use super::predicates::{is_contract_and_rates, is_draft, is_locked};
use super::validation::{has_valid_contract, has_valid_documents, has_valid_rates};

/// Reasons a package fails the submitted-record completeness gate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormDataViolation {
    #[error("package status is {found}, expected SUBMITTED")]
    NotSubmitted { found: &'static str },
    #[error("package status is {found}, expected DRAFT")]
    NotDraft { found: &'static str },
    #[error("contract is missing {0}")]
    MissingContractField(&'static str),
    #[error("contract amendment leaves {unanswered} modified provision(s) unanswered")]
    IncompleteModifiedProvisions { unanswered: usize },
    #[error("rate certification is missing {0}")]
    MissingRateField(&'static str),
    #[error("rate amendment requires rate amendment info")]
    MissingRateAmendmentInfo,
    #[error("at least one contract document is required")]
    MissingContractDocuments,
    #[error("at least one rate document is required")]
    MissingRateDocuments,
}

/// Terminal completeness gate separating a submitted record from an in-progress draft.
pub fn is_locked_health_plan_form_data(form: &HealthPlanFormData) -> bool {
    is_locked(form)
        && has_valid_contract(form)
        && (!is_contract_and_rates(form) || has_valid_rates(form))
        && has_valid_documents(form)
}

pub fn is_unlocked_health_plan_form_data(form: &HealthPlanFormData) -> bool {
    is_draft(form)
}

/// Every reason `is_locked_health_plan_form_data` would reject the package. Empty exactly
/// when the gate passes.
pub fn lock_violations(form: &HealthPlanFormData) -> Vec<FormDataViolation> {
    let mut violations = Vec::new();

    if !is_locked(form) {
        violations.push(FormDataViolation::NotSubmitted {
            found: status_label(form.status),
        });
    }

    let contract = &form.contract;
    let required = [
        ("contract type", contract.contract_type.is_some()),
        (
            "contract execution status",
            contract.contract_execution_status.is_some(),
        ),
        ("contract start date", contract.contract_date_start.is_some()),
        ("contract end date", contract.contract_date_end.is_some()),
        (
            "managed care entities",
            !contract.managed_care_entities.is_empty(),
        ),
        (
            "federal authorities",
            !contract.federal_authorities.is_empty(),
        ),
    ];
    violations.extend(
        required
            .into_iter()
            .filter(|(_, present)| !present)
            .map(|(field, _)| FormDataViolation::MissingContractField(field)),
    );

    if let Some(provisions) = contract
        .contract_amendment_info
        .as_ref()
        .and_then(|info| info.modified_provisions.as_ref())
    {
        if !provisions.is_complete() {
            violations.push(FormDataViolation::IncompleteModifiedProvisions {
                unanswered: provisions.unanswered(),
            });
        }
    }

    if form.contract_documents.is_empty() {
        violations.push(FormDataViolation::MissingContractDocuments);
    }

    match &form.submission {
        SubmissionKind::Unspecified | SubmissionKind::ContractOnly => {}
        SubmissionKind::ContractAndRates(rates) => {
            let required = [
                ("rate type", rates.rate_type.is_some()),
                ("rate start date", rates.rate_date_start.is_some()),
                ("rate end date", rates.rate_date_end.is_some()),
                ("rate certification date", rates.rate_date_certified.is_some()),
            ];
            violations.extend(
                required
                    .into_iter()
                    .filter(|(_, present)| !present)
                    .map(|(field, _)| FormDataViolation::MissingRateField(field)),
            );

            if rates.rate_type == Some(RateType::Amendment) && rates.rate_amendment_info.is_none()
            {
                violations.push(FormDataViolation::MissingRateAmendmentInfo);
            }

            if rates.rate_documents.is_empty() {
                violations.push(FormDataViolation::MissingRateDocuments);
            }
        }
    }

    violations
}

fn status_label(status: Option<SubmissionStatus>) -> &'static str {
    status.map(SubmissionStatus::label).unwrap_or("missing")
}

/// A package that passed the submitted-record gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockedHealthPlanFormData(HealthPlanFormData);

impl LockedHealthPlanFormData {
    pub fn into_inner(self) -> HealthPlanFormData {
        self.0
    }
}

impl Deref for LockedHealthPlanFormData {
    type Target = HealthPlanFormData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TryFrom<HealthPlanFormData> for LockedHealthPlanFormData {
    type Error = Vec<FormDataViolation>;

    fn try_from(form: HealthPlanFormData) -> Result<Self, Self::Error> {
        if is_locked_health_plan_form_data(&form) {
            return Ok(Self(form));
        }

        let violations = lock_violations(&form);
        debug!(
            id = form.id.as_deref().unwrap_or("unsaved"),
            violations = violations.len(),
            "health plan package rejected by lock gate"
        );
        Err(violations)
    }
}

/// A package still open for editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnlockedHealthPlanFormData(HealthPlanFormData);

impl UnlockedHealthPlanFormData {
    pub fn into_inner(self) -> HealthPlanFormData {
        self.0
    }
}

impl Deref for UnlockedHealthPlanFormData {
    type Target = HealthPlanFormData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TryFrom<HealthPlanFormData> for UnlockedHealthPlanFormData {
    type Error = FormDataViolation;

    fn try_from(form: HealthPlanFormData) -> Result<Self, Self::Error> {
        if is_unlocked_health_plan_form_data(&form) {
            return Ok(Self(form));
        }

        debug!(
            id = form.id.as_deref().unwrap_or("unsaved"),
            "health plan package is not a draft"
        );
        Err(FormDataViolation::NotDraft {
            found: status_label(form.status),
        })
    }
}
