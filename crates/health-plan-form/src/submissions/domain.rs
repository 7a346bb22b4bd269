use serde::{Deserialize, Serialize};

use super::date::FormDate;
use super::decode::null_as_default;

/// Lifecycle discriminant carried on every health plan package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubmissionStatus {
    Draft,
    Submitted,
}

impl SubmissionStatus {
    pub const fn label(self) -> &'static str {
        match self {
            SubmissionStatus::Draft => "DRAFT",
            SubmissionStatus::Submitted => "SUBMITTED",
        }
    }

    pub(crate) fn from_label(value: &str) -> Option<Self> {
        match value.trim() {
            "DRAFT" => Some(Self::Draft),
            "SUBMITTED" => Some(Self::Submitted),
            _ => None,
        }
    }
}

/// Which sections a package files: the contract alone, or the contract plus rate certifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubmissionType {
    ContractOnly,
    ContractAndRates,
}

impl SubmissionType {
    pub const fn label(self) -> &'static str {
        match self {
            SubmissionType::ContractOnly => "CONTRACT_ONLY",
            SubmissionType::ContractAndRates => "CONTRACT_AND_RATES",
        }
    }

    pub(crate) fn from_label(value: &str) -> Option<Self> {
        match value.trim() {
            "CONTRACT_ONLY" => Some(Self::ContractOnly),
            "CONTRACT_AND_RATES" => Some(Self::ContractAndRates),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContractType {
    Base,
    Amendment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContractExecutionStatus {
    Executed,
    Unexecuted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RateType {
    New,
    Amendment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActuaryCommunicationPreference {
    OactToActuary,
    OactToState,
}

/// Category labels a state attaches to an uploaded supporting document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentCategory {
    Contract,
    Rates,
    ContractRelated,
    RatesRelated,
}

/// Metadata for an uploaded file; the bytes live in the object store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubmissionDocument {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "s3URL", deserialize_with = "null_as_default")]
    pub s3_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub document_categories: Vec<DocumentCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha256: Option<String>,
}

impl SubmissionDocument {
    pub fn has_category(&self, category: DocumentCategory) -> bool {
        self.document_categories.contains(&category)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StateContact {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title_role: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActuaryContact {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title_role: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actuarial_firm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actuarial_firm_other: Option<String>,
}

/// Provisions an amended contract may touch. Every flag must be answered before the
/// amendment counts as complete.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifiedProvisions {
    pub modified_benefits_provided: Option<bool>,
    pub modified_geo_area_served: Option<bool>,
    pub modified_medicaid_beneficiaries: Option<bool>,
    pub modified_risk_sharing_strategy: Option<bool>,
    pub modified_incentive_arrangements: Option<bool>,
    #[serde(alias = "modifiedWitholdAgreements")]
    pub modified_withhold_agreements: Option<bool>,
    pub modified_state_directed_payments: Option<bool>,
    pub modified_pass_through_payments: Option<bool>,
    #[serde(rename = "modifiedPaymentsToMCOs")]
    pub modified_payments_to_mcos: Option<bool>,
    pub modified_medical_loss_ratio_standards: Option<bool>,
    pub modified_other_financial_payment_incentive: Option<bool>,
    pub modified_enrollment_process: Option<bool>,
    #[serde(alias = "modifiedGrevienceAndAppeal")]
    pub modified_grievance_and_appeal: Option<bool>,
    pub modified_network_adequacy_standards: Option<bool>,
    pub modified_length_of_contract: Option<bool>,
    pub modified_non_risk_payment_arrangements: Option<bool>,
}

impl ModifiedProvisions {
    fn flags(&self) -> [Option<bool>; 16] {
        [
            self.modified_benefits_provided,
            self.modified_geo_area_served,
            self.modified_medicaid_beneficiaries,
            self.modified_risk_sharing_strategy,
            self.modified_incentive_arrangements,
            self.modified_withhold_agreements,
            self.modified_state_directed_payments,
            self.modified_pass_through_payments,
            self.modified_payments_to_mcos,
            self.modified_medical_loss_ratio_standards,
            self.modified_other_financial_payment_incentive,
            self.modified_enrollment_process,
            self.modified_grievance_and_appeal,
            self.modified_network_adequacy_standards,
            self.modified_length_of_contract,
            self.modified_non_risk_payment_arrangements,
        ]
    }

    /// True once every provision has an explicit yes/no answer.
    pub fn is_complete(&self) -> bool {
        self.flags().iter().all(Option::is_some)
    }

    pub fn unanswered(&self) -> usize {
        self.flags().iter().filter(|flag| flag.is_none()).count()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractAmendmentInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_provisions: Option<ModifiedProvisions>,
}

/// Contract section shared by every package type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractDetails {
    pub contract_type: Option<ContractType>,
    pub contract_execution_status: Option<ContractExecutionStatus>,
    pub contract_date_start: Option<FormDate>,
    pub contract_date_end: Option<FormDate>,
    pub managed_care_entities: Vec<String>,
    pub federal_authorities: Vec<String>,
    pub contract_amendment_info: Option<ContractAmendmentInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RateAmendmentInfo {
    pub effective_date_start: Option<FormDate>,
    pub effective_date_end: Option<FormDate>,
}

/// Rate certification section; only reachable on contract-and-rates packages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RateDetails {
    pub rate_type: Option<RateType>,
    pub rate_date_start: Option<FormDate>,
    pub rate_date_end: Option<FormDate>,
    pub rate_date_certified: Option<FormDate>,
    pub rate_amendment_info: Option<RateAmendmentInfo>,
    pub rate_documents: Vec<SubmissionDocument>,
}

/// `submissionType` tag together with the data only that type may carry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionKind {
    /// Tag absent or unrecognised.
    #[default]
    Unspecified,
    ContractOnly,
    ContractAndRates(RateDetails),
}

impl SubmissionKind {
    pub fn submission_type(&self) -> Option<SubmissionType> {
        match self {
            SubmissionKind::Unspecified => None,
            SubmissionKind::ContractOnly => Some(SubmissionType::ContractOnly),
            SubmissionKind::ContractAndRates(_) => Some(SubmissionType::ContractAndRates),
        }
    }

    pub fn rates(&self) -> Option<&RateDetails> {
        match self {
            SubmissionKind::ContractAndRates(rates) => Some(rates),
            _ => None,
        }
    }
}

/// A state's contract (and optionally rate) filing, draft or submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HealthPlanFormData {
    pub id: Option<String>,
    pub status: Option<SubmissionStatus>,
    pub state_code: String,
    pub state_number: u32,
    pub program_ids: Vec<String>,
    pub submission_description: Option<String>,
    pub submission: SubmissionKind,
    pub contract: ContractDetails,
    pub documents: Vec<SubmissionDocument>,
    pub contract_documents: Vec<SubmissionDocument>,
    pub state_contacts: Vec<StateContact>,
    pub actuary_contacts: Vec<ActuaryContact>,
    pub actuary_communication_preference: Option<ActuaryCommunicationPreference>,
    pub created_at: Option<FormDate>,
    pub updated_at: Option<FormDate>,
}

impl HealthPlanFormData {
    pub fn submission_type(&self) -> Option<SubmissionType> {
        self.submission.submission_type()
    }

    pub fn rates(&self) -> Option<&RateDetails> {
        self.submission.rates()
    }

    /// Rate documents, empty unless the package files rates.
    pub fn rate_documents(&self) -> &[SubmissionDocument] {
        self.rates()
            .map(|rates| rates.rate_documents.as_slice())
            .unwrap_or(&[])
    }
}
