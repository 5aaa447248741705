//! End-to-end flow over the pure core: fill a form, validate it, build the
//! normalized payload, and validate a meter's technology config against the
//! schema registry.

use std::collections::BTreeMap;

use hydria_core::connectivity::{registry, FieldErrorReason};
use hydria_core::models::{CommunicationTechnology, SystemRole};
use hydria_core::validation::{validate_user_form, FieldKey, FormMode, UserForm};
use uuid::Uuid;

#[test]
fn create_user_flow_produces_submittable_payload() {
    let mut form = UserForm {
        first_name: "Deniz".to_string(),
        last_name: "Aksoy".to_string(),
        email: "deniz.aksoy@waterworks.example".to_string(),
        phone: "+90 555 000 1122".to_string(),
        password: Some("meters-and-valves".to_string()),
        is_active: true,
        assignments: vec![],
    };
    let row = form.add_assignment_row();
    form.assignments[0].tenant_id = Some(Uuid::new_v4());
    form.assignments[0].role = SystemRole::Operator;

    let errors = validate_user_form(&form, FormMode::Create);
    assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
    assert!(!errors.contains_key(&FieldKey::row(row, "tenant_id")));

    let request = form.to_create_request();
    assert_eq!(request.tenant_assignments.len(), 1);
    assert_eq!(request.tenant_assignments[0].role, SystemRole::Operator);

    // Edit mode on the same data with the password cleared still passes.
    form.password = None;
    assert!(validate_user_form(&form, FormMode::Edit).is_empty());
}

#[test]
fn technology_config_round_trip_and_degradation() {
    let mut config: BTreeMap<String, String> = BTreeMap::new();
    config.insert("Imei".to_string(), "490154203237518".to_string());
    config.insert("Imsi".to_string(), "310150123456789".to_string());
    config.insert("Iccid".to_string(), "89014103211118510720".to_string());

    let errors = registry().validate_config(CommunicationTechnology::NbIot, &config, true);
    assert!(errors.is_empty(), "unexpected errors: {:?}", errors);

    // Strip one required field: exactly that field is reported missing.
    config.remove("Imsi");
    let errors = registry().validate_config(CommunicationTechnology::NbIot, &config, true);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "Imsi");
    assert_eq!(errors[0].reason, FieldErrorReason::Missing);
}
