// Auth handlers
// Login and register fabricate a session without touching the user collection

use serde::Serialize;
use serde_json::{json, Value};

use super::{ApiError, ApiRequest, ApiResponse, ApiResult};
use crate::routing::RouteParams;
use crate::store::{Role, Store};

const TOKEN_PREFIX: &str = "mock_token_";
const REGISTER_FIELDS: [&str; 4] = ["full_name", "email", "phone_number", "password"];

/// User object returned with a token
#[derive(Debug, Serialize)]
struct SessionUser {
    id: u64,
    name: Value,
    email: Value,
    role: Role,
}

pub fn requires_action(_store: &mut Store, _req: &ApiRequest, _params: &RouteParams) -> ApiResult {
    Err(ApiError::validation("Auth endpoint requires action"))
}

pub fn get_not_supported(_store: &mut Store, _req: &ApiRequest, params: &RouteParams) -> ApiResult {
    Err(ApiError::MethodNotAllowed(format!(
        "GET not supported for /auth/{}",
        params.get(0).unwrap_or_default()
    )))
}

pub fn login(_store: &mut Store, req: &ApiRequest, _params: &RouteParams) -> ApiResult {
    let (Some(email), Some(_password)) = (req.filled("email"), req.filled("password")) else {
        return Err(ApiError::validation("Email and password required"));
    };
    // Any filled password is accepted, but the email has to be text to infer a role
    let Some(email) = email.as_str() else {
        return Err(ApiError::internal(format!("email is not a string: {email}")));
    };

    let user = if email.to_lowercase().contains("admin") {
        SessionUser {
            id: 1,
            name: Value::from("Admin User"),
            email: Value::from(email),
            role: Role::Admin,
        }
    } else {
        SessionUser {
            id: 2,
            name: Value::from(display_name(email)),
            email: Value::from(email),
            role: Role::User,
        }
    };

    Ok(ApiResponse::ok(json!({
        "success": true,
        "token": mock_token(),
        "user": user,
    })))
}

pub fn register(store: &mut Store, req: &ApiRequest, _params: &RouteParams) -> ApiResult {
    if !req.has_all(&REGISTER_FIELDS) {
        return Err(ApiError::validation("Missing required fields"));
    }

    let user = SessionUser {
        id: u64::try_from(store.users().len()).unwrap_or(u64::MAX) + 1,
        name: req.body["full_name"].clone(),
        email: req.body["email"].clone(),
        role: Role::User,
    };

    Ok(ApiResponse::created(json!({
        "success": true,
        "token": mock_token(),
        "user": user,
    })))
}

pub fn logout(_store: &mut Store, _req: &ApiRequest, _params: &RouteParams) -> ApiResult {
    Ok(ApiResponse::ok(json!({
        "success": true,
        "message": "Logged out successfully",
    })))
}

/// `mock_token_` followed by 16 random hex characters; not a credential
fn mock_token() -> String {
    let hex = uuid::Uuid::new_v4().simple().to_string();
    format!("{TOKEN_PREFIX}{}", &hex[..16])
}

/// Title-cased local part of an email address
fn display_name(email: &str) -> String {
    let local = email.split('@').next().unwrap_or_default();
    title_case(local)
}

/// Upper-case the first letter of every run of letters, lower-case the rest
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::tests::{get, post, router};
    use hyper::StatusCode;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("bob"), "Bob");
        assert_eq!(title_case("mary.jane"), "Mary.Jane");
        assert_eq!(title_case("JOHN"), "John");
        assert_eq!(title_case("abc123def"), "Abc123Def");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_mock_token_shape() {
        let token = mock_token();
        let hex = token.strip_prefix(TOKEN_PREFIX).unwrap();
        assert_eq!(hex.len(), 16);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_login_admin() {
        let resp = post(
            &mut router(),
            "/auth/login",
            json!({"email": "admin@test.com", "password": "x"}),
        );
        assert_eq!(resp.status, StatusCode::OK);
        assert_eq!(resp.body["success"], true);
        assert_eq!(resp.body["user"]["role"], "admin");
        assert_eq!(resp.body["user"]["name"], "Admin User");
        assert!(resp.body["token"].as_str().unwrap().starts_with(TOKEN_PREFIX));
    }

    #[test]
    fn test_login_admin_case_insensitive() {
        let resp = post(
            &mut router(),
            "/auth/login",
            json!({"email": "SuperADMIN@corp.io", "password": "x"}),
        );
        assert_eq!(resp.body["user"]["role"], "admin");
    }

    #[test]
    fn test_login_user() {
        let resp = post(
            &mut router(),
            "/auth/login",
            json!({"email": "bob@x.com", "password": "x"}),
        );
        assert_eq!(resp.status, StatusCode::OK);
        assert_eq!(resp.body["user"]["role"], "user");
        assert_eq!(resp.body["user"]["name"], "Bob");
        assert_eq!(resp.body["user"]["id"], 2);
        assert_eq!(resp.body["user"]["email"], "bob@x.com");
    }

    #[test]
    fn test_login_missing_or_empty_fields() {
        let mut r = router();
        for body in [
            json!({}),
            json!({"email": "bob@x.com"}),
            json!({"email": "", "password": "x"}),
            json!({"email": "bob@x.com", "password": null}),
            json!({"email": "bob@x.com", "password": 0}),
            json!({"email": "bob@x.com", "password": false}),
            json!({"email": 0, "password": "x"}),
        ] {
            let resp = post(&mut r, "/auth/login", body);
            assert_eq!(resp.status, StatusCode::BAD_REQUEST);
            assert_eq!(resp.body["success"], false);
            assert_eq!(resp.body["message"], "Email and password required");
        }
    }

    #[test]
    fn test_login_accepts_non_string_password() {
        for password in [json!(12345), json!(true), json!(["x"])] {
            let resp = post(
                &mut router(),
                "/auth/login",
                json!({"email": "bob@x.com", "password": password}),
            );
            assert_eq!(resp.status, StatusCode::OK);
            assert_eq!(resp.body["user"]["role"], "user");
        }
    }

    #[test]
    fn test_login_non_string_email_is_a_fault() {
        let resp = post(
            &mut router(),
            "/auth/login",
            json!({"email": 42, "password": "x"}),
        );
        assert_eq!(resp.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(resp.body["success"], false);
        assert!(resp.body["message"]
            .as_str()
            .unwrap()
            .starts_with("Internal server error: "));
    }

    #[test]
    fn test_register() {
        let resp = post(
            &mut router(),
            "/auth/register",
            json!({
                "full_name": "Test User",
                "email": "test@test.com",
                "phone_number": "1234567890",
                "password": "password"
            }),
        );
        assert_eq!(resp.status, StatusCode::CREATED);
        assert_eq!(resp.body["user"]["id"], 3);
        assert_eq!(resp.body["user"]["name"], "Test User");
        assert_eq!(resp.body["user"]["role"], "user");
    }

    #[test]
    fn test_register_does_not_store_user() {
        let mut r = router();
        let body = json!({"full_name": "A", "email": "a@a", "phone_number": "1", "password": "p"});
        post(&mut r, "/auth/register", body.clone());
        let resp = post(&mut r, "/auth/register", body);
        assert_eq!(resp.body["user"]["id"], 3);
        assert_eq!(r.store().users().len(), 2);
    }

    #[test]
    fn test_register_missing_field() {
        let resp = post(
            &mut router(),
            "/auth/register",
            json!({"full_name": "A", "email": "a@a", "password": "p"}),
        );
        assert_eq!(resp.status, StatusCode::BAD_REQUEST);
        assert_eq!(resp.body["message"], "Missing required fields");
    }

    #[test]
    fn test_logout() {
        let resp = post(&mut router(), "/auth/logout", json!({}));
        assert_eq!(resp.status, StatusCode::OK);
        assert_eq!(resp.body["success"], true);
    }

    #[test]
    fn test_auth_without_action() {
        let mut r = router();
        assert_eq!(get(&mut r, "/auth").status, StatusCode::BAD_REQUEST);
        let resp = post(&mut r, "/auth", json!({}));
        assert_eq!(resp.status, StatusCode::BAD_REQUEST);
        assert_eq!(resp.body["message"], "Auth endpoint requires action");
    }

    #[test]
    fn test_get_on_auth_action() {
        let resp = get(&mut router(), "/auth/login");
        assert_eq!(resp.status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(resp.body["message"], "GET not supported for /auth/login");
    }

    #[test]
    fn test_unknown_auth_action() {
        let resp = post(&mut router(), "/auth/refresh", json!({}));
        assert_eq!(resp.status, StatusCode::NOT_FOUND);
        assert_eq!(resp.body["message"], "Auth action not found: refresh");
    }

    #[test]
    fn test_trailing_segments_after_action() {
        let mut r = router();
        let resp = post(
            &mut r,
            "/auth/login/extra",
            json!({"email": "bob@x.com", "password": "x"}),
        );
        assert_eq!(resp.status, StatusCode::OK);
        assert_eq!(post(&mut r, "/auth/logout/now", json!({})).status, StatusCode::OK);

        let resp = get(&mut r, "/auth/login/extra");
        assert_eq!(resp.status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(resp.body["message"], "GET not supported for /auth/login");

        let resp = post(&mut r, "/auth/refresh/token", json!({}));
        assert_eq!(resp.body["message"], "Auth action not found: refresh");
    }
}
