use super::*;

#[test]
fn current_user_parses_me_response() {
    let raw = r#"{"id":7,"email":"ada@uni.example","username":"ada"}"#;
    let user: CurrentUser = serde_json::from_str(raw).unwrap();
    assert_eq!(
        user,
        CurrentUser { id: 7, email: "ada@uni.example".to_owned(), username: "ada".to_owned() }
    );
}

#[test]
fn current_user_rejects_error_body() {
    let raw = r#"{"error":"User not authenticated"}"#;
    assert!(serde_json::from_str::<CurrentUser>(raw).is_err());
}
