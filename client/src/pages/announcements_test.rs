use super::*;

fn announcement(id: i64, kind: &str, active: bool) -> Announcement {
    Announcement {
        id,
        title: format!("Notice {id}"),
        content: String::new(),
        kind: kind.to_owned(),
        active,
        created_at: None,
    }
}

#[test]
fn stats_count_active_and_inactive() {
    let list = vec![announcement(1, "info", true), announcement(2, "danger", false), announcement(3, "info", true)];
    assert_eq!(announcement_stats(&list), AnnouncementStats { total: 3, active: 2, inactive: 1 });
    assert_eq!(announcement_stats(&[]), AnnouncementStats::default());
}

#[test]
fn badge_class_falls_back_to_info() {
    assert_eq!(badge_class("warning"), "badge badge--warning");
    assert_eq!(badge_class("urgent"), "badge badge--info");
}
