use super::*;

/// Tests that a missing header is reported as such.
///
/// Expected: Err(AuthError::MissingAuthorization)
#[tokio::test]
async fn rejects_missing_header() {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let headers = HeaderMap::new();

    let result = AuthGuard::new(db, &headers).token();

    assert!(matches!(result, Err(AuthError::MissingAuthorization)));
}

/// Tests that non-bearer schemes and empty tokens are rejected.
///
/// Expected: Err(AuthError::MalformedAuthorization)
#[tokio::test]
async fn rejects_malformed_header() {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for value in ["Basic abc123", "Bearer", "Bearer    ", "abc123"] {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static(value));

        let result = AuthGuard::new(db, &headers).token();

        assert!(
            matches!(result, Err(AuthError::MalformedAuthorization)),
            "{value} should be rejected"
        );
    }
}

/// Tests that the scheme is matched case-insensitively.
///
/// Expected: Ok with the token text
#[tokio::test]
async fn extracts_token_from_bearer_header() {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("bearer tok-1"));

    let token = AuthGuard::new(db, &headers).token().unwrap();

    assert_eq!(token, "tok-1");
}
