use super::*;

#[test]
fn missing_user_redirects_to_login_by_default() {
    assert_eq!(guard_decision(false, None), GuardDecision::Redirect("/login".to_owned()));
}

#[test]
fn missing_user_redirects_to_supplied_path() {
    assert_eq!(
        guard_decision(false, Some("/welcome")),
        GuardDecision::Redirect("/welcome".to_owned())
    );
}

#[test]
fn present_user_renders_regardless_of_redirect() {
    assert_eq!(guard_decision(true, None), GuardDecision::Render);
    assert_eq!(guard_decision(true, Some("/elsewhere")), GuardDecision::Render);
}
