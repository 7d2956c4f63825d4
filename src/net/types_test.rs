use super::*;

fn full_raw() -> RawProfile {
    RawProfile {
        username: Some("alice".to_owned()),
        email: Some("a@x.com".to_owned()),
        sub: Some("123".to_owned()),
    }
}

// =============================================================
// Validation
// =============================================================

#[test]
fn complete_raw_profile_validates() {
    let profile = Profile::try_from(full_raw()).expect("all fields present");
    assert_eq!(profile.username, "alice");
    assert_eq!(profile.email, "a@x.com");
    assert_eq!(profile.sub, "123");
}

#[test]
fn missing_username_names_the_field() {
    let raw = RawProfile { username: None, ..full_raw() };
    assert_eq!(Profile::try_from(raw), Err("username"));
}

#[test]
fn missing_email_names_the_field() {
    let raw = RawProfile { email: None, ..full_raw() };
    assert_eq!(Profile::try_from(raw), Err("email"));
}

#[test]
fn missing_sub_names_the_field() {
    let raw = RawProfile { sub: None, ..full_raw() };
    assert_eq!(Profile::try_from(raw), Err("sub"));
}

// =============================================================
// Deserialization
// =============================================================

#[test]
fn deserializes_username_claim() {
    let raw: RawProfile =
        serde_json::from_str(r#"{"username":"alice","email":"a@x.com","sub":"123"}"#).unwrap();
    assert_eq!(raw.username.as_deref(), Some("alice"));
}

#[test]
fn accepts_preferred_username_alias() {
    let raw: RawProfile =
        serde_json::from_str(r#"{"preferred_username":"alice","email":"a@x.com","sub":"123"}"#)
            .unwrap();
    assert_eq!(raw.username.as_deref(), Some("alice"));
}

#[test]
fn absent_fields_deserialize_as_none() {
    let raw: RawProfile = serde_json::from_str(r#"{"email":"a@x.com"}"#).unwrap();
    assert_eq!(raw.username, None);
    assert_eq!(raw.sub, None);
}

#[test]
fn unknown_fields_are_ignored() {
    let raw: RawProfile = serde_json::from_str(
        r#"{"username":"alice","email":"a@x.com","sub":"123","email_verified":true,"name":"Alice"}"#,
    )
    .unwrap();
    assert_eq!(raw.username.as_deref(), Some("alice"));
}
