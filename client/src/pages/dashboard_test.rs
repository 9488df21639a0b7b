use super::*;

#[test]
fn quick_actions_skip_the_home_entry() {
    let actions = quick_actions(&Role::Vet);
    assert_eq!(actions.len(), 1);
    assert_eq!(actions[0].path, "/dashboard/vet/appointment-requests");
}

#[test]
fn unknown_role_has_no_quick_actions() {
    assert!(quick_actions(&Role::Other("groomer".to_owned())).is_empty());
}

#[test]
fn greeting_uses_display_label() {
    let record = SessionRecord { token: "t".to_owned(), user_name: "Ana".to_owned(), ..SessionRecord::default() };
    assert_eq!(greeting(&record), "Welcome back, Ana");
    assert_eq!(greeting(&SessionRecord::default()), "Welcome back, Unknown user");
}
