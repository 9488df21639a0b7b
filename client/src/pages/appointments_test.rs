use super::*;

fn filled() -> AppointmentDraft {
    AppointmentDraft {
        pet_id: " 10 ".to_owned(),
        preferred_date: "2026-11-02".to_owned(),
        preferred_time: "10:00".to_owned(),
        reason: "Annual checkup".to_owned(),
        ..AppointmentDraft::default()
    }
}

// =============================================================
// AppointmentDraft
// =============================================================

#[test]
fn draft_defaults_match_the_form() {
    let draft = AppointmentDraft::default();
    assert_eq!(draft.appointment_type, "checkup");
    assert_eq!(draft.urgency, "medium");
    assert!(!draft.is_emergency);
}

#[test]
fn filled_draft_becomes_request() {
    let request = filled().into_request(4).unwrap();
    assert_eq!(request.user_id, 4);
    assert_eq!(request.pet_id, 10);
    assert_eq!(request.urgency, "medium");
}

#[test]
fn unselected_pet_is_rejected() {
    let draft = AppointmentDraft { pet_id: String::new(), ..filled() };
    assert_eq!(draft.into_request(4), Err("Please fill in all required fields"));
}

#[test]
fn missing_time_is_rejected() {
    let draft = AppointmentDraft { preferred_time: String::new(), ..filled() };
    assert!(draft.into_request(4).is_err());
}

// =============================================================
// Vet decisions
// =============================================================

#[test]
fn decision_requires_a_note() {
    assert_eq!(build_decision(true, "  "), Err("Please fill in all required fields"));
}

#[test]
fn decision_status_follows_button() {
    assert_eq!(build_decision(true, " See you Monday ").unwrap(), AppointmentDecision::approve("See you Monday"));
    assert_eq!(build_decision(false, "Fully booked").unwrap().status, "rejected");
}

#[test]
fn status_class_defaults_to_pending() {
    assert_eq!(status_class(""), "status status--pending");
    assert_eq!(status_class("APPROVED"), "status status--approved");
}
