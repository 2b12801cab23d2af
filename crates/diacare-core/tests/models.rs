use diacare_core::keys;
use diacare_core::models::diabetes_type::DiabetesType;
use diacare_core::models::health_record::HealthRecord;
use uuid::Uuid;

#[test]
fn diabetes_type_persists_as_label() {
    let json = serde_json::to_string(&DiabetesType::Gestational).unwrap();
    assert_eq!(json, "\"Gestational\"");

    let other: DiabetesType = serde_json::from_str("\"MODY\"").unwrap();
    assert_eq!(other, DiabetesType::Other("MODY".to_string()));
    assert_eq!(other.to_string(), "MODY");
}

#[test]
fn known_labels_parse_to_variants() {
    assert_eq!("Type 1".parse::<DiabetesType>().unwrap(), DiabetesType::Type1);
    assert_eq!(DiabetesType::from_label("Type 2"), DiabetesType::Type2);
    assert_eq!(
        DiabetesType::from(String::from("Gestational")),
        DiabetesType::Gestational
    );
}

#[test]
fn health_record_json_shape() {
    let record = HealthRecord::new(
        Uuid::new_v4(),
        DiabetesType::Type1,
        88.5,
        31.0,
        vec!["Insulin".to_string()],
    );
    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(value["diabetes_type"], "Type 1");
    assert_eq!(value["blood_sugar"], 88.5);
    assert_eq!(value["medications"][0], "Insulin");

    let back: HealthRecord = serde_json::from_value(value).unwrap();
    assert_eq!(back, record);
}

#[test]
fn phone_index_key_is_confined_to_prefix() {
    let key = keys::person_phone_index("../555/0100");
    assert!(key.starts_with("persons/by-phone/"));
    assert!(!key.trim_start_matches("persons/by-phone/").contains('/'));
    assert_eq!(keys::person_phone_index("ab"), "persons/by-phone/6162.json");
}
