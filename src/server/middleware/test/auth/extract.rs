use super::*;

fn headers(name: header::HeaderName, value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(name, HeaderValue::from_str(value).unwrap());
    headers
}

/// Tests reading the session token from the cookie.
///
/// Verifies that the `access_token` cookie is found among other cookies.
///
/// Expected: AuthToken carrying the user id
#[test]
fn reads_token_from_cookie() {
    let tokens = TokenService::new(SECRET);
    let token = tokens.issue(42).unwrap();
    let headers = headers(
        header::COOKIE,
        &format!("theme=dark; {}={}", ACCESS_TOKEN_COOKIE, token),
    );

    let auth = AuthToken::from_headers(&headers, &tokens);

    assert_eq!(auth.user_id(), Some(42));
}

/// Tests reading the session token from a bearer header.
///
/// Expected: AuthToken carrying the user id
#[test]
fn reads_token_from_bearer_header() {
    let tokens = TokenService::new(SECRET);
    let token = tokens.issue(7).unwrap();
    let headers = headers(header::AUTHORIZATION, &format!("Bearer {}", token));

    let auth = AuthToken::from_headers(&headers, &tokens);

    assert_eq!(auth.user_id(), Some(7));
}

/// Tests that the bearer header wins over the cookie.
///
/// Expected: AuthToken carrying the bearer token's user id
#[test]
fn prefers_bearer_header_over_cookie() {
    let tokens = TokenService::new(SECRET);
    let mut headers = headers(
        header::AUTHORIZATION,
        &format!("Bearer {}", tokens.issue(1).unwrap()),
    );
    headers.insert(
        header::COOKIE,
        HeaderValue::from_str(&format!(
            "{}={}",
            ACCESS_TOKEN_COOKIE,
            tokens.issue(2).unwrap()
        ))
        .unwrap(),
    );

    let auth = AuthToken::from_headers(&headers, &tokens);

    assert_eq!(auth.user_id(), Some(1));
}

/// Tests requests without any token.
///
/// Expected: anonymous AuthToken
#[test]
fn missing_token_is_anonymous() {
    let tokens = TokenService::new(SECRET);

    let auth = AuthToken::from_headers(&HeaderMap::new(), &tokens);

    assert_eq!(auth, AuthToken::anonymous());
}

/// Tests that tokens signed with another secret are ignored.
///
/// Expected: anonymous AuthToken
#[test]
fn forged_token_is_anonymous() {
    let forged = TokenService::new("other-secret").issue(42).unwrap();
    let headers = headers(
        header::COOKIE,
        &format!("{}={}", ACCESS_TOKEN_COOKIE, forged),
    );

    let auth = AuthToken::from_headers(&headers, &TokenService::new(SECRET));

    assert_eq!(auth.user_id(), None);
}
