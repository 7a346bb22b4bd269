//! Health plan package completeness rules and display-name generation.
//!
//! Everything here is a pure function of its arguments: predicates and validators read a
//! `HealthPlanFormData` and return a boolean, name generators return a string.

mod date;
pub mod decode;
pub mod domain;
mod lock;
mod naming;
mod predicates;
pub mod programs;
mod report;
mod validation;

#[cfg(test)]
mod tests;

pub use date::FormDate;
pub use decode::DecodeError;
pub use domain::{
    ActuaryCommunicationPreference, ActuaryContact, ContractAmendmentInfo, ContractDetails,
    ContractExecutionStatus, ContractType, DocumentCategory, HealthPlanFormData,
    ModifiedProvisions, RateAmendmentInfo, RateDetails, RateType, StateContact,
    SubmissionDocument, SubmissionKind, SubmissionStatus, SubmissionType,
};
pub use lock::{
    is_locked_health_plan_form_data, is_unlocked_health_plan_form_data, lock_violations,
    FormDataViolation, LockedHealthPlanFormData, UnlockedHealthPlanFormData,
};
pub use naming::{generate_rate_name, package_name, rate_name};
pub use predicates::{is_contract_and_rates, is_contract_only, is_draft, is_locked};
pub use report::{FormDataChecks, FormDataReport};
pub use programs::{CatalogError, Program, StatePrograms, StateProgramCatalog, UNKNOWN_PROGRAM};
pub use validation::{
    has_valid_contract, has_valid_documents, has_valid_rates,
    has_valid_supporting_document_categories,
};

/// Names used by the earlier `StateSubmission`/`DraftSubmission` records.
pub mod legacy {
    use super::{HealthPlanFormData, Program};

    pub fn is_state_submission(form: &HealthPlanFormData) -> bool {
        super::is_locked_health_plan_form_data(form)
    }

    pub fn is_draft_submission(form: &HealthPlanFormData) -> bool {
        super::is_unlocked_health_plan_form_data(form)
    }

    pub fn submission_name(form: &HealthPlanFormData, programs: &[Program]) -> String {
        super::package_name(form, programs)
    }
}
