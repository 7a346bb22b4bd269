use super::common::*;
use crate::submissions::domain::{HealthPlanFormData, RateAmendmentInfo, RateDetails, RateType};
use crate::submissions::legacy::submission_name;
use crate::submissions::{generate_rate_name, package_name, rate_name, FormDate, Program};

fn mn_package(program_ids: &[&str]) -> HealthPlanFormData {
    HealthPlanFormData {
        state_code: "MN".to_string(),
        state_number: 5,
        program_ids: program_ids.iter().map(|id| id.to_string()).collect(),
        ..Default::default()
    }
}

fn iso(value: &str) -> Option<FormDate> {
    Some(FormDate::parse(value))
}

#[test]
fn unknown_programs_use_sentinel_name() {
    let form = mn_package(&["foo-bar", "baz-bin"]);
    assert_eq!(
        package_name(&form, &mn_programs()),
        "MCR-MN-0005-UNKNOWNPROGRAM-UNKNOWNPROGRAM"
    );
}

#[test]
fn single_known_program() {
    let form = mn_package(&[SNBC_ID]);
    assert_eq!(package_name(&form, &mn_programs()), "MCR-MN-0005-SNBC");
}

#[test]
fn program_names_are_sorted_regardless_of_id_order() {
    let forward = mn_package(&[PMAP_ID, MSC_PLUS_ID]);
    let reversed = mn_package(&[MSC_PLUS_ID, PMAP_ID]);

    assert_eq!(package_name(&forward, &mn_programs()), "MCR-MN-0005-MSC+-PMAP");
    assert_eq!(
        package_name(&forward, &mn_programs()),
        package_name(&reversed, &mn_programs())
    );
}

#[test]
fn program_sort_is_case_sensitive() {
    let programs = vec![
        Program::new("lower-id", "abc"),
        Program::new("upper-id", "Bcd"),
    ];

    let form = mn_package(&["lower-id", "upper-id"]);
    assert_eq!(package_name(&form, &programs), "MCR-MN-0005-Bcd-abc");

    let reversed = mn_package(&["upper-id", "lower-id"]);
    assert_eq!(package_name(&reversed, &programs), "MCR-MN-0005-Bcd-abc");
}

#[test]
fn package_without_programs_has_no_program_segment() {
    let form = mn_package(&[]);
    assert_eq!(package_name(&form, &mn_programs()), "MCR-MN-0005");
}

#[test]
fn state_number_is_padded_to_four_digits() {
    let mut form = mn_package(&[SNBC_ID]);
    form.state_number = 123;
    assert_eq!(package_name(&form, &mn_programs()), "MCR-MN-0123-SNBC");

    form.state_number = 12345;
    assert_eq!(package_name(&form, &mn_programs()), "MCR-MN-12345-SNBC");
}

#[test]
fn legacy_submission_name_matches_package_name() {
    let form = mn_package(&[PMAP_ID, SNBC_ID]);
    assert_eq!(
        submission_name(&form, &mn_programs()),
        package_name(&form, &mn_programs())
    );
}

#[test]
fn amendment_rate_name_uses_effective_dates() {
    let rate = RateDetails {
        rate_type: Some(RateType::Amendment),
        rate_date_start: iso("2021-04-22"),
        rate_date_end: iso("2022-03-29"),
        rate_date_certified: iso("2021-05-23"),
        rate_amendment_info: Some(RateAmendmentInfo {
            effective_date_start: iso("2022-05-21"),
            effective_date_end: iso("2022-09-21"),
        }),
        rate_documents: Vec::new(),
    };

    assert_eq!(
        generate_rate_name(&rate, "MN-TEST-AMENDMENT"),
        "MN-TEST-AMENDMENT-RATE-20220521-20220921-AMENDMENT-20210523"
    );
}

#[test]
fn amendment_with_empty_info_has_no_date_segments() {
    let rate = RateDetails {
        rate_type: Some(RateType::Amendment),
        rate_amendment_info: Some(RateAmendmentInfo::default()),
        ..Default::default()
    };

    assert_eq!(
        generate_rate_name(&rate, "MN-AMENDMENT-NO-DATES"),
        "MN-AMENDMENT-NO-DATES-RATE-AMENDMENT"
    );
}

#[test]
fn amendment_effective_end_without_start_is_kept() {
    let rate = RateDetails {
        rate_type: Some(RateType::Amendment),
        rate_amendment_info: Some(RateAmendmentInfo {
            effective_date_start: None,
            effective_date_end: iso("2022-09-21"),
        }),
        ..Default::default()
    };

    assert_eq!(
        generate_rate_name(&rate, "MN-END-ONLY"),
        "MN-END-ONLY-RATE-20220921-AMENDMENT"
    );
}

#[test]
fn new_rate_without_dates() {
    let rate = RateDetails {
        rate_type: Some(RateType::New),
        ..Default::default()
    };

    assert_eq!(
        generate_rate_name(&rate, "OH-NEW-NO-DATES"),
        "OH-NEW-NO-DATES-RATE-CERTIFICATION"
    );
}

#[test]
fn new_rate_with_partial_dates() {
    let rate = RateDetails {
        rate_type: Some(RateType::New),
        rate_date_start: iso("2021-04-22"),
        rate_date_certified: iso("2021-05-23T00:00:00.000Z"),
        ..Default::default()
    };

    assert_eq!(
        generate_rate_name(&rate, "OH-PARTIAL"),
        "OH-PARTIAL-RATE-20210422-CERTIFICATION-20210523"
    );
}

#[test]
fn untyped_rate_lists_present_dates_only() {
    let rate = RateDetails {
        rate_date_start: iso("2021-04-22"),
        rate_date_certified: iso("2021-05-23"),
        ..Default::default()
    };
    assert_eq!(
        generate_rate_name(&rate, "VA-UNTYPED"),
        "VA-UNTYPED-RATE-20210422-20210523"
    );

    assert_eq!(
        generate_rate_name(&RateDetails::default(), "VA-EMPTY"),
        "VA-EMPTY-RATE"
    );
}

#[test]
fn rate_name_composes_package_name() {
    let form = mock_state_submission();
    assert_eq!(
        rate_name(&form, &mn_programs()).as_deref(),
        Some("MCR-MN-0005-SNBC-RATE-20210422-20220329-CERTIFICATION-20210523")
    );
    assert!(rate_name(&mock_contract_only_submission(), &mn_programs()).is_none());
}

#[test]
fn names_are_repeatable() {
    let form = mock_state_submission();
    let programs = mn_programs();
    assert_eq!(package_name(&form, &programs), package_name(&form, &programs));
    assert_eq!(rate_name(&form, &programs), rate_name(&form, &programs));
}
