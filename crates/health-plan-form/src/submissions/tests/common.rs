use chrono::NaiveDate;

use crate::submissions::domain::{
    ActuaryCommunicationPreference, ActuaryContact, ContractDetails, ContractExecutionStatus,
    ContractType, DocumentCategory, HealthPlanFormData, RateAmendmentInfo, RateDetails, RateType,
    StateContact, SubmissionDocument, SubmissionKind, SubmissionStatus,
};
use crate::submissions::{FormDate, Program};

pub(super) const SNBC_ID: &str = "abbdf9b0-c49e-4c4c-bb6f-040cb7b51cce";
pub(super) const PMAP_ID: &str = "d95394e5-44d1-45df-8151-1cc1ee66f100";
pub(super) const MSC_PLUS_ID: &str = "ea16a6c0-5fc6-4df8-adac-c627e76660ab";
pub(super) const MNCARE_ID: &str = "3fd36500-bf2c-47bc-80e8-e7aa417184c5";

pub(super) fn mn_programs() -> Vec<Program> {
    vec![
        Program::new(PMAP_ID, "PMAP"),
        Program::new(MNCARE_ID, "MNCare"),
        Program::new(MSC_PLUS_ID, "MSC+"),
        Program::new(SNBC_ID, "SNBC"),
    ]
}

pub(super) fn date(year: i32, month: u32, day: u32) -> Option<FormDate> {
    Some(FormDate::Calendar(
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date"),
    ))
}

pub(super) fn document(name: &str, categories: &[DocumentCategory]) -> SubmissionDocument {
    SubmissionDocument {
        name: name.to_string(),
        s3_url: format!("s3://bucketname/key/{name}"),
        document_categories: categories.to_vec(),
        sha256: None,
    }
}

pub(super) fn contract() -> ContractDetails {
    ContractDetails {
        contract_type: Some(ContractType::Base),
        contract_execution_status: Some(ContractExecutionStatus::Executed),
        contract_date_start: date(2021, 5, 22),
        contract_date_end: date(2022, 5, 21),
        managed_care_entities: vec!["MCO".to_string()],
        federal_authorities: vec!["STATE_PLAN".to_string(), "WAIVER_1915B".to_string()],
        contract_amendment_info: None,
    }
}

pub(super) fn rates() -> RateDetails {
    RateDetails {
        rate_type: Some(RateType::New),
        rate_date_start: date(2021, 4, 22),
        rate_date_end: date(2022, 3, 29),
        rate_date_certified: date(2021, 5, 23),
        rate_amendment_info: None,
        rate_documents: vec![document("rate certification.pdf", &[DocumentCategory::Rates])],
    }
}

/// Fully populated contract-and-rates package that passes every gate.
pub(super) fn mock_state_submission() -> HealthPlanFormData {
    HealthPlanFormData {
        id: Some("test-abc-123".to_string()),
        status: Some(SubmissionStatus::Submitted),
        state_code: "MN".to_string(),
        state_number: 5,
        program_ids: vec![SNBC_ID.to_string()],
        submission_description: Some("A real submission".to_string()),
        submission: SubmissionKind::ContractAndRates(rates()),
        contract: contract(),
        documents: vec![document(
            "supporting.pdf",
            &[DocumentCategory::ContractRelated, DocumentCategory::RatesRelated],
        )],
        contract_documents: vec![document("contract.pdf", &[DocumentCategory::Contract])],
        state_contacts: vec![StateContact {
            name: "Test Person".to_string(),
            title_role: "A Role".to_string(),
            email: "test@state.gov".to_string(),
        }],
        actuary_contacts: vec![ActuaryContact {
            name: "Actuary Contact".to_string(),
            title_role: "Test Actuary".to_string(),
            email: "actuary@test.com".to_string(),
            actuarial_firm: Some("MERCER".to_string()),
            actuarial_firm_other: None,
        }],
        actuary_communication_preference: Some(ActuaryCommunicationPreference::OactToActuary),
        created_at: date(2021, 4, 1),
        updated_at: date(2021, 4, 2),
    }
}

pub(super) fn mock_contract_only_submission() -> HealthPlanFormData {
    HealthPlanFormData {
        submission: SubmissionKind::ContractOnly,
        documents: vec![document(
            "supporting.pdf",
            &[DocumentCategory::ContractRelated],
        )],
        ..mock_state_submission()
    }
}

pub(super) fn mock_draft() -> HealthPlanFormData {
    HealthPlanFormData {
        status: Some(SubmissionStatus::Draft),
        ..mock_state_submission()
    }
}

pub(super) fn amendment_rates(info: Option<RateAmendmentInfo>) -> RateDetails {
    RateDetails {
        rate_type: Some(RateType::Amendment),
        rate_amendment_info: info,
        ..rates()
    }
}

pub(super) fn with_rates(rates: RateDetails) -> HealthPlanFormData {
    HealthPlanFormData {
        submission: SubmissionKind::ContractAndRates(rates),
        ..mock_state_submission()
    }
}
