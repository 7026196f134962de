use super::*;

#[test]
fn show_notice_sets_message() {
    let notice = RwSignal::new(None::<String>);

    show_notice(notice, "Unable to reach the server. Please try again.".to_owned());

    assert_eq!(
        notice.get_untracked().as_deref(),
        Some("Unable to reach the server. Please try again.")
    );
}

#[test]
fn newer_notice_replaces_older() {
    let notice = RwSignal::new(None::<String>);

    show_notice(notice, "first".to_owned());
    show_notice(notice, "second".to_owned());

    assert_eq!(notice.get_untracked().as_deref(), Some("second"));
}
