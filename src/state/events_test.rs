use super::*;
use crate::net::types::User;

fn sample_user() -> User {
    User {
        id: 1,
        email: "a@b.c".to_owned(),
        name: None,
        language: Some("en".to_owned()),
        avatar_url: None,
    }
}

#[test]
fn events_compare_by_payload() {
    assert_eq!(
        AppEvent::LanguageChanged("de".to_owned()),
        AppEvent::LanguageChanged("de".to_owned())
    );
    assert_ne!(
        AppEvent::LanguageChanged("de".to_owned()),
        AppEvent::LanguageChanged("en".to_owned())
    );
    assert_ne!(
        AppEvent::PomodoroSettingChanged(true),
        AppEvent::PomodoroSettingChanged(false)
    );
}

#[test]
fn login_event_carries_the_user() {
    let event = AppEvent::UserLoggedIn(sample_user());
    match event {
        AppEvent::UserLoggedIn(user) => assert_eq!(user.email, "a@b.c"),
        other => panic!("unexpected event {other:?}"),
    }
}
