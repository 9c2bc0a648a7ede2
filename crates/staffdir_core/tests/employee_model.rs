use staffdir_core::{parse_employee_id, Employee, EmployeeDraft, EmployeePatch};

#[test]
fn from_draft_materializes_all_fields() {
    let draft = EmployeeDraft::new("Ana", "ana@x.com", "Dev");
    let record = Employee::from_draft(42, draft);

    assert_eq!(record.id, 42);
    assert_eq!(record.name, "Ana");
    assert_eq!(record.email, "ana@x.com");
    assert_eq!(record.role, "Dev");
}

#[test]
fn apply_patch_replaces_present_fields_and_retains_absent_ones() {
    let mut record = Employee::from_draft(1, EmployeeDraft::new("Ana", "ana@x.com", "Dev"));

    let patch = EmployeePatch {
        role: Some("Lead".to_string()),
        ..EmployeePatch::default()
    };
    record.apply_patch(&patch);

    assert_eq!(record.name, "Ana");
    assert_eq!(record.email, "ana@x.com");
    assert_eq!(record.role, "Lead");
}

#[test]
fn empty_patch_changes_nothing() {
    let mut record = Employee::from_draft(1, EmployeeDraft::new("Ana", "ana@x.com", "Dev"));
    let original = record.clone();

    let patch = EmployeePatch::default();
    assert!(patch.is_empty());
    record.apply_patch(&patch);

    assert_eq!(record, original);
}

#[test]
fn employee_serialization_uses_expected_wire_fields() {
    let record = Employee {
        id: 1_700_000_000_000,
        name: "Ana".to_string(),
        email: "ana@x.com".to_string(),
        role: "Dev".to_string(),
    };

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["id"], 1_700_000_000_000_i64);
    assert_eq!(json["name"], "Ana");
    assert_eq!(json["email"], "ana@x.com");
    assert_eq!(json["role"], "Dev");

    let decoded: Employee = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, record);
}

#[test]
fn employee_deserialization_tolerates_missing_role() {
    // Remote echo endpoints return records without a role field.
    let decoded: Employee = serde_json::from_str(
        r#"{"id": 7, "name": "Bea", "email": "bea@y.org"}"#,
    )
    .unwrap();

    assert_eq!(decoded.id, 7);
    assert_eq!(decoded.role, "");
}

#[test]
fn patch_serialization_skips_absent_fields() {
    let patch = EmployeePatch {
        role: Some("Lead".to_string()),
        ..EmployeePatch::default()
    };

    let json = serde_json::to_value(&patch).unwrap();
    let object = json.as_object().unwrap();
    assert_eq!(object.len(), 1);
    assert_eq!(json["role"], "Lead");
}

#[test]
fn draft_serialization_omits_empty_role() {
    let draft = EmployeeDraft::new("Bea", "bea@y.org", "");

    let json = serde_json::to_value(&draft).unwrap();
    let object = json.as_object().unwrap();
    assert_eq!(object.len(), 2);
    assert_eq!(json["name"], "Bea");
    assert_eq!(json["email"], "bea@y.org");
}

#[test]
fn parse_employee_id_coerces_path_segment_text() {
    assert_eq!(parse_employee_id("42"), Some(42));
    assert_eq!(parse_employee_id("  1700000000000 "), Some(1_700_000_000_000));
    assert_eq!(parse_employee_id("abc"), None);
    assert_eq!(parse_employee_id(""), None);
    assert_eq!(parse_employee_id("12.5"), None);
}
