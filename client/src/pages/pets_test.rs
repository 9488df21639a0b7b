use super::*;

fn pet(id: i64, name: &str, breed: &str, adopted: bool) -> Pet {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "petName": name,
        "breed": breed,
        "adopted": adopted,
        "description": "Loves long walks",
    }))
    .unwrap()
}

// =============================================================
// filter_pets
// =============================================================

#[test]
fn empty_search_and_all_status_keep_everything() {
    let pets = vec![pet(1, "Rex", "Beagle", false), pet(2, "Tom", "Tabby", true)];
    assert_eq!(filter_pets(&pets, "  ", StatusFilter::All).len(), 2);
}

#[test]
fn search_matches_name_breed_or_description() {
    let pets = vec![pet(1, "Rex", "Beagle", false), pet(2, "Tom", "Tabby", true)];
    assert_eq!(filter_pets(&pets, "beag", StatusFilter::All)[0].id, 1);
    assert_eq!(filter_pets(&pets, "TOM", StatusFilter::All)[0].id, 2);
    assert_eq!(filter_pets(&pets, "walks", StatusFilter::All).len(), 2);
    assert!(filter_pets(&pets, "parrot", StatusFilter::All).is_empty());
}

#[test]
fn status_filter_splits_adopted_and_available() {
    let pets = vec![pet(1, "Rex", "Beagle", false), pet(2, "Tom", "Tabby", true)];
    assert_eq!(filter_pets(&pets, "", StatusFilter::parse("available"))[0].id, 1);
    assert_eq!(filter_pets(&pets, "", StatusFilter::parse("adopted"))[0].id, 2);
    assert_eq!(StatusFilter::parse("anything"), StatusFilter::All);
}

// =============================================================
// delete_failure_message
// =============================================================

#[test]
fn constraint_violation_gets_friendly_text() {
    let err = ApiError::Rejected { status: 500, message: Some("violates foreign key constraint".to_owned()) };
    assert!(delete_failure_message(&err).starts_with("Cannot delete this pet"));
}

#[test]
fn server_message_is_prefixed() {
    let err = ApiError::Rejected { status: 403, message: Some("Not your pet".to_owned()) };
    assert_eq!(delete_failure_message(&err), "Error: Not your pet");
}

#[test]
fn missing_message_falls_back() {
    let err = ApiError::Rejected { status: 500, message: None };
    assert_eq!(delete_failure_message(&err), "Failed to delete pet. Please try again.");
}
