//! JSON boundary for health plan packages.
//!
//! Packages are parsed into a permissive wire row first and then folded into the
//! domain model. Missing or `null` fields become empty, including those nested in
//! documents and contacts, and unknown `status`/`submissionType` values become "absent".
//! Only unknown labels in the remaining enum fields reject a record.

use std::io::Read;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer};

use super::date::{deserialize_optional_date, FormDate};
use super::domain::{
    ActuaryCommunicationPreference, ActuaryContact, ContractAmendmentInfo, ContractDetails,
    ContractExecutionStatus, ContractType, HealthPlanFormData, RateAmendmentInfo, RateDetails,
    RateType, StateContact, SubmissionDocument, SubmissionKind, SubmissionStatus, SubmissionType,
};

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("failed to read health plan package from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid health plan package JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn from_str(raw: &str) -> Result<HealthPlanFormData, DecodeError> {
    let wire: FormDataWire = serde_json::from_str(raw)?;
    Ok(wire.into())
}

pub fn from_reader<R: Read>(reader: R) -> Result<HealthPlanFormData, DecodeError> {
    let wire: FormDataWire = serde_json::from_reader(reader)?;
    Ok(wire.into())
}

pub fn from_value(value: serde_json::Value) -> Result<HealthPlanFormData, DecodeError> {
    let wire: FormDataWire = serde_json::from_value(value)?;
    Ok(wire.into())
}

pub fn from_path<P: AsRef<Path>>(path: P) -> Result<HealthPlanFormData, DecodeError> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|source| DecodeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    from_reader(std::io::BufReader::new(file))
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct FormDataWire {
    id: Option<String>,
    #[serde(deserialize_with = "lenient_label")]
    status: Option<String>,
    #[serde(deserialize_with = "lenient_label")]
    submission_type: Option<String>,
    state_code: Option<String>,
    state_number: Option<u32>,
    #[serde(rename = "programIDs", deserialize_with = "null_as_default")]
    program_ids: Vec<String>,
    submission_description: Option<String>,

    contract_type: Option<ContractType>,
    contract_execution_status: Option<ContractExecutionStatus>,
    #[serde(deserialize_with = "deserialize_optional_date")]
    contract_date_start: Option<FormDate>,
    #[serde(deserialize_with = "deserialize_optional_date")]
    contract_date_end: Option<FormDate>,
    #[serde(deserialize_with = "null_as_default")]
    managed_care_entities: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    federal_authorities: Vec<String>,
    contract_amendment_info: Option<ContractAmendmentInfo>,

    rate_type: Option<RateType>,
    #[serde(deserialize_with = "deserialize_optional_date")]
    rate_date_start: Option<FormDate>,
    #[serde(deserialize_with = "deserialize_optional_date")]
    rate_date_end: Option<FormDate>,
    #[serde(deserialize_with = "deserialize_optional_date")]
    rate_date_certified: Option<FormDate>,
    rate_amendment_info: Option<RateAmendmentInfoWire>,

    #[serde(deserialize_with = "null_as_default")]
    documents: Vec<SubmissionDocument>,
    #[serde(deserialize_with = "null_as_default")]
    contract_documents: Vec<SubmissionDocument>,
    #[serde(deserialize_with = "null_as_default")]
    rate_documents: Vec<SubmissionDocument>,
    #[serde(deserialize_with = "null_as_default")]
    state_contacts: Vec<StateContact>,
    #[serde(deserialize_with = "null_as_default")]
    actuary_contacts: Vec<ActuaryContact>,
    actuary_communication_preference: Option<ActuaryCommunicationPreference>,
    #[serde(deserialize_with = "deserialize_optional_date")]
    created_at: Option<FormDate>,
    #[serde(deserialize_with = "deserialize_optional_date")]
    updated_at: Option<FormDate>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RateAmendmentInfoWire {
    #[serde(deserialize_with = "deserialize_optional_date")]
    effective_date_start: Option<FormDate>,
    #[serde(deserialize_with = "deserialize_optional_date")]
    effective_date_end: Option<FormDate>,
}

impl From<RateAmendmentInfoWire> for RateAmendmentInfo {
    fn from(wire: RateAmendmentInfoWire) -> Self {
        Self {
            effective_date_start: wire.effective_date_start,
            effective_date_end: wire.effective_date_end,
        }
    }
}

impl From<FormDataWire> for HealthPlanFormData {
    fn from(wire: FormDataWire) -> Self {
        let submission = match wire
            .submission_type
            .as_deref()
            .and_then(SubmissionType::from_label)
        {
            Some(SubmissionType::ContractOnly) => SubmissionKind::ContractOnly,
            Some(SubmissionType::ContractAndRates) => SubmissionKind::ContractAndRates(RateDetails {
                rate_type: wire.rate_type,
                rate_date_start: wire.rate_date_start,
                rate_date_end: wire.rate_date_end,
                rate_date_certified: wire.rate_date_certified,
                rate_amendment_info: wire.rate_amendment_info.map(RateAmendmentInfo::from),
                rate_documents: wire.rate_documents,
            }),
            None => SubmissionKind::Unspecified,
        };

        Self {
            id: wire.id,
            status: wire.status.as_deref().and_then(SubmissionStatus::from_label),
            state_code: wire.state_code.unwrap_or_default(),
            state_number: wire.state_number.unwrap_or_default(),
            program_ids: wire.program_ids,
            submission_description: wire.submission_description,
            submission,
            contract: ContractDetails {
                contract_type: wire.contract_type,
                contract_execution_status: wire.contract_execution_status,
                contract_date_start: wire.contract_date_start,
                contract_date_end: wire.contract_date_end,
                managed_care_entities: wire.managed_care_entities,
                federal_authorities: wire.federal_authorities,
                contract_amendment_info: wire.contract_amendment_info,
            },
            documents: wire.documents,
            contract_documents: wire.contract_documents,
            state_contacts: wire.state_contacts,
            actuary_contacts: wire.actuary_contacts,
            actuary_communication_preference: wire.actuary_communication_preference,
            created_at: wire.created_at,
            updated_at: wire.updated_at,
        }
    }
}

/// Discriminants are matched later against known labels; any non-string value decodes
/// as absent instead of rejecting the record.
fn lenient_label<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(label) => Some(label),
        _ => None,
    })
}

/// Treats an explicit `null` the same as a missing key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let opt = Option::<T>::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}
