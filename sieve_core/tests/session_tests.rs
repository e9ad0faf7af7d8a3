//! End-to-end filtering scenarios through the session API

use assert_matches::assert_matches;
use chrono::NaiveDate;
use sieve_core::{
    ALL_FLOW_TYPES, CONTRACT_VALUE, ClearPolicy, CriteriaValue, CustomFilterSpec, DATE_PERIOD,
    DateRangeValue, DefinitionId, DisplayLimit, DueWindow, FLOW_TYPE, FilterConfig, FilterError,
    FilterSession, LOCATION, PAYMENT_STATUS, Record, RecordSource, StaticRecordSource,
    SUPPLIER_NAME, TriState,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn id(id: &str) -> DefinitionId {
    DefinitionId::new(id)
}

fn scenario_records() -> Vec<Record> {
    vec![
        Record::new("1")
            .with_field("supplier", "TechCorp LTDA")
            .with_field("value", 150000)
            .with_field("paymentStatus", "Pago"),
        Record::new("2")
            .with_field("supplier", "InnovaSoft")
            .with_field("value", 280000)
            .with_field("paymentStatus", "Pendente"),
        Record::new("3")
            .with_field("supplier", "BuildCorp")
            .with_field("value", 750000)
            .with_field("paymentStatus", "Vencido"),
    ]
}

fn demo_records() -> Vec<Record> {
    StaticRecordSource::demo().list_records().unwrap()
}

fn ids(records: &[&Record]) -> Vec<String> {
    records.iter().map(|r| r.id.clone()).collect()
}

#[test]
fn test_unfiltered_pass_preserves_order() {
    let session = FilterSession::new();
    let records = demo_records();

    let filtered = session.filter(&records);
    let expected: Vec<&Record> = records.iter().collect();
    assert_eq!(filtered, expected);
}

#[test]
fn test_contract_value_scenario() {
    init_logging();
    let mut session = FilterSession::new();
    session
        .set(&id(CONTRACT_VALUE), CriteriaValue::range(0, 200_000))
        .unwrap();

    let records = scenario_records();
    assert_eq!(ids(&session.filter(&records)), vec!["1"]);
}

#[test]
fn test_range_reset_restores_full_set() {
    let mut session = FilterSession::new();
    let records = demo_records();

    session
        .set(&id(CONTRACT_VALUE), CriteriaValue::range(100_000, 300_000))
        .unwrap();
    let filtered = session.filter(&records);
    assert_eq!(ids(&filtered), vec!["1", "2"]);
    for record in filtered {
        assert!(session.matches(record));
    }

    session.reset(&id(CONTRACT_VALUE)).unwrap();
    assert_eq!(session.filter(&records).len(), records.len());
}

#[test]
fn test_supplier_free_text_scenario() {
    let mut session = FilterSession::new();
    session
        .set(&id(SUPPLIER_NAME), CriteriaValue::text("tech"))
        .unwrap();

    let records = scenario_records();
    assert_eq!(ids(&session.filter(&records)), vec!["1"]);
}

#[test]
fn test_whitespace_only_text_is_inactive() {
    let mut session = FilterSession::new();
    session
        .set(&id(SUPPLIER_NAME), CriteriaValue::text("   "))
        .unwrap();

    assert_eq!(session.count_active(), 0);
    assert_eq!(session.filter(&scenario_records()).len(), 3);
}

#[test]
fn test_flow_type_multi_choice_is_or_within_filter() {
    let mut session = FilterSession::new();
    session.toggle_choice(&id(FLOW_TYPE), "RE").unwrap();
    session.toggle_choice(&id(FLOW_TYPE), "RC").unwrap();

    let records = demo_records();
    assert_eq!(ids(&session.filter(&records)), vec!["1", "5"]);
}

#[test]
fn test_select_all_double_toggle_returns_to_empty() {
    let mut session = FilterSession::new();
    session.toggle_choice(&id(FLOW_TYPE), ALL_FLOW_TYPES).unwrap();
    assert!(session.is_active(&id(FLOW_TYPE)).unwrap());

    session.toggle_choice(&id(FLOW_TYPE), ALL_FLOW_TYPES).unwrap();
    assert_eq!(
        session.get(&id(FLOW_TYPE)).unwrap(),
        CriteriaValue::MultiChoice(vec![])
    );
    assert!(!session.is_active(&id(FLOW_TYPE)).unwrap());
}

#[test]
fn test_payment_status_todos_is_inactive() {
    let mut session = FilterSession::new();
    session
        .set(&id(PAYMENT_STATUS), CriteriaValue::choice("Pendente"))
        .unwrap();
    assert_eq!(ids(&session.filter(&demo_records())), vec!["2", "5"]);

    session
        .set(&id(PAYMENT_STATUS), CriteriaValue::choice("todos"))
        .unwrap();
    assert_eq!(session.count_active(), 0);
}

#[test]
fn test_location_single_choice() {
    let mut session = FilterSession::new();
    session
        .set(&id(LOCATION), CriteriaValue::choice("sudeste"))
        .unwrap();
    assert_eq!(ids(&session.filter(&demo_records())), vec!["1", "4"]);
}

#[test]
fn test_date_period_from_due_window() {
    let mut session = FilterSession::new();
    let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let span = DueWindow::span(&[DueWindow::UpTo30Days], today).unwrap();
    session
        .set(&id(DATE_PERIOD), CriteriaValue::DateRange(span))
        .unwrap();

    assert_eq!(ids(&session.filter(&demo_records())), vec!["1", "2", "3", "4"]);
}

#[test]
fn test_date_period_open_ended() {
    let mut session = FilterSession::new();
    let from = NaiveDate::from_ymd_opt(2024, 3, 25);
    session
        .set(
            &id(DATE_PERIOD),
            CriteriaValue::DateRange(DateRangeValue::new(from, None)),
        )
        .unwrap();

    assert_eq!(ids(&session.filter(&demo_records())), vec!["4", "5"]);
}

#[test]
fn test_unbounded_range_is_inactive() {
    let mut session = FilterSession::new();
    session
        .set(&id(CONTRACT_VALUE), CriteriaValue::range(0, 100))
        .unwrap();
    assert_eq!(session.count_active(), 1);

    session.toggle_unbounded(&id(CONTRACT_VALUE)).unwrap();
    assert_eq!(session.count_active(), 0);
    assert_eq!(session.filter(&demo_records()).len(), 5);
}

#[test]
fn test_out_of_range_set_clamps() {
    init_logging();
    let mut session = FilterSession::new();
    session
        .set(&id(CONTRACT_VALUE), CriteriaValue::range(-1, 99_000_000))
        .unwrap();

    assert_eq!(
        session.get(&id(CONTRACT_VALUE)).unwrap(),
        CriteriaValue::range(0, 10_000_000)
    );
    assert!(!session.is_active(&id(CONTRACT_VALUE)).unwrap());
}

#[test]
fn test_wrong_kind_set_is_type_mismatch() {
    let mut session = FilterSession::new();
    let result = session.set(&id(CONTRACT_VALUE), CriteriaValue::Boolean(TriState::True));
    assert_matches!(result, Err(FilterError::TypeMismatch { .. }));
}

#[test]
fn test_set_unknown_id_is_not_found() {
    let mut session = FilterSession::new();
    let result = session.set(&id("nope"), CriteriaValue::text("x"));
    assert_matches!(result, Err(FilterError::NotFound { .. }));
}

#[test]
fn test_count_active_restored_after_custom_add_remove() {
    let mut session = FilterSession::new();
    session
        .set(&id(SUPPLIER_NAME), CriteriaValue::text("corp"))
        .unwrap();
    let before = session.count_active();

    let custom = session
        .add_custom_definition(CustomFilterSpec::new(
            "Categoria",
            "categoria",
            FilterConfig::MultiChoice {
                options: vec!["obra".to_string(), "serviço".to_string()],
                select_all: None,
            },
        ))
        .unwrap()
        .id
        .clone();
    session
        .set(&custom, CriteriaValue::choices(&["obra"]))
        .unwrap();
    assert_eq!(session.count_active(), before + 1);

    session.remove_custom_definition(&custom).unwrap();
    assert_eq!(session.count_active(), before);
}

#[test]
fn test_count_active_matches_is_active() {
    let mut session = FilterSession::new();
    session.toggle_choice(&id(FLOW_TYPE), "FI").unwrap();
    session
        .set(&id(PAYMENT_STATUS), CriteriaValue::choice("Pago"))
        .unwrap();
    session
        .set(&id(CONTRACT_VALUE), CriteriaValue::range(0, 10_000_000))
        .unwrap();

    let active = session
        .list_definitions()
        .iter()
        .filter(|d| session.is_active(&d.id).unwrap())
        .count();
    assert_eq!(session.count_active(), active);
    assert_eq!(active, 2);
}

#[test]
fn test_remove_builtin_and_unknown() {
    let mut session = FilterSession::new();
    assert_matches!(
        session.remove_custom_definition(&id(CONTRACT_VALUE)),
        Err(FilterError::InvalidOperation { .. })
    );
    assert_matches!(
        session.remove_custom_definition(&id("custom-99")),
        Err(FilterError::NotFound { .. })
    );
}

#[test]
fn test_custom_boolean_filter_from_json_spec() {
    let mut session = FilterSession::new();
    let spec: CustomFilterSpec = serde_json::from_str(
        r#"{"name": "Auditado", "field": "audited", "kind": "checkbox", "label": "Somente auditados"}"#,
    )
    .unwrap();
    let custom = session.add_custom_definition(spec).unwrap().id.clone();
    session
        .set(&custom, CriteriaValue::Boolean(TriState::False))
        .unwrap();

    let records = vec![
        Record::new("a").with_field("audited", true),
        Record::new("b").with_field("audited", false),
    ];
    assert_eq!(ids(&session.filter(&records)), vec!["b"]);
}

#[test]
fn test_custom_choice_matches_accented_values_in_any_case() {
    init_logging();
    let mut session = FilterSession::new();
    let custom = session
        .add_custom_definition(
            CustomFilterSpec::new(
                "Categoria",
                "categoria",
                FilterConfig::MultiChoice {
                    options: vec!["Serviço".to_string(), "Obra".to_string()],
                    select_all: None,
                },
            )
            .with_table("contratos"),
        )
        .unwrap()
        .id
        .clone();
    assert_eq!(
        session.definition(&custom).unwrap().table.as_deref(),
        Some("contratos")
    );

    session
        .set(&custom, CriteriaValue::choices(&["SERVIÇO"]))
        .unwrap();
    let records = vec![
        Record::new("a").with_field("categoria", "serviço"),
        Record::new("b").with_field("categoria", "Obra"),
    ];
    assert_eq!(ids(&session.filter(&records)), vec!["a"]);
}

#[test]
fn test_custom_dropdown_rejects_reserved_token() {
    let mut session = FilterSession::new();
    let spec: CustomFilterSpec = serde_json::from_str(
        r#"{"name": "Situação", "field": "situacao", "kind": "dropdown", "options": ["todos", "parcial"]}"#,
    )
    .unwrap();

    assert_matches!(
        session.add_custom_definition(spec),
        Err(FilterError::Validation { .. })
    );
    assert!(session.registry().custom_definitions().is_empty());
}

#[test]
fn test_clear_policies() {
    let mut session = FilterSession::new();
    session
        .add_custom_definition(CustomFilterSpec::new("Data", "data", FilterConfig::Date))
        .unwrap();
    session
        .set(&id(SUPPLIER_NAME), CriteriaValue::text("tech"))
        .unwrap();

    session.clear(ClearPolicy::ResetValues);
    assert_eq!(session.count_active(), 0);
    assert_eq!(session.registry().custom_definitions().len(), 1);

    session.clear(ClearPolicy::RemoveCustom);
    assert!(session.registry().custom_definitions().is_empty());
}

#[test]
fn test_display_limit_applies_after_filter() {
    let session = FilterSession::new();
    let records = demo_records();
    let filtered = session.filter(&records);

    let shown = DisplayLimit::new(2).slice(&filtered);
    assert_eq!(ids(shown), vec!["1", "2"]);
}
