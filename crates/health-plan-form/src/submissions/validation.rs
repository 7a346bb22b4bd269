use super::domain::{DocumentCategory, HealthPlanFormData, RateType, SubmissionKind};

/// Contract fields required before a package can be submitted.
///
/// A present `modifiedProvisions` block must answer every provision; a partially filled
/// amendment counts as incomplete.
pub fn has_valid_contract(form: &HealthPlanFormData) -> bool {
    let contract = &form.contract;

    let amendment_complete = contract
        .contract_amendment_info
        .as_ref()
        .and_then(|info| info.modified_provisions.as_ref())
        .map_or(true, |provisions| provisions.is_complete());

    contract.contract_type.is_some()
        && contract.contract_execution_status.is_some()
        && contract.contract_date_start.is_some()
        && contract.contract_date_end.is_some()
        && !contract.managed_care_entities.is_empty()
        && !contract.federal_authorities.is_empty()
        && amendment_complete
}

/// Rate certification fields; `false` for packages that carry no rate section.
pub fn has_valid_rates(form: &HealthPlanFormData) -> bool {
    let SubmissionKind::ContractAndRates(rates) = &form.submission else {
        return false;
    };

    if rates.rate_documents.is_empty() {
        return false;
    }

    let amendment_ok = match rates.rate_type {
        Some(RateType::Amendment) => rates.rate_amendment_info.is_some(),
        _ => true,
    };

    rates.rate_type.is_some()
        && rates.rate_date_start.is_some()
        && rates.rate_date_end.is_some()
        && rates.rate_date_certified.is_some()
        && amendment_ok
}

/// Contract documents are always required; rate documents only when rates are filed.
/// Supporting documents are optional.
pub fn has_valid_documents(form: &HealthPlanFormData) -> bool {
    let rates_ok = match &form.submission {
        SubmissionKind::ContractAndRates(rates) => !rates.rate_documents.is_empty(),
        _ => true,
    };

    !form.contract_documents.is_empty() && rates_ok
}

pub fn has_valid_supporting_document_categories(form: &HealthPlanFormData) -> bool {
    let contract_only = matches!(form.submission, SubmissionKind::ContractOnly);

    form.documents.iter().all(|document| {
        !document.document_categories.is_empty()
            && (!contract_only || document.has_category(DocumentCategory::ContractRelated))
    })
}
