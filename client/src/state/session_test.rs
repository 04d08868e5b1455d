use super::*;
use crate::test_support::{ScriptedTransport, scripted_client};
use futures::executor::block_on;
use serde_json::json;

fn store() -> (SessionStore<ScriptedTransport>, ScriptedTransport) {
    let (api, transport) = scripted_client();
    (SessionStore::new(api), transport)
}

fn alice() -> SessionUser {
    SessionUser { username: "alice".to_owned(), is_admin: false, avatar: Some("/static/uploads/a.png".to_owned()) }
}

fn signed_in(store: &SessionStore<ScriptedTransport>, transport: &ScriptedTransport) {
    transport.reply_json(
        200,
        json!({ "logged_in": true, "username": "alice", "is_admin": false, "avatar_url": "/static/uploads/a.png" }),
    );
    block_on(store.check_auth());
}

// =============================================================
// Getters
// =============================================================

#[test]
fn default_state_is_anonymous() {
    let state = SessionState::default();
    assert!(!state.is_logged_in());
    assert!(!state.is_admin());
    assert_eq!(state.username(), "");
    assert_eq!(state.avatar(), None);
    assert!(!state.loading);
    assert!(!state.checked);
}

#[test]
fn getters_derive_from_user() {
    let state = SessionState {
        user: Some(SessionUser { username: "root".to_owned(), is_admin: true, avatar: Some("r.png".to_owned()) }),
        ..SessionState::default()
    };
    assert!(state.is_logged_in());
    assert!(state.is_admin());
    assert_eq!(state.username(), "root");
    assert_eq!(state.avatar(), Some("r.png"));
}

#[test]
fn from_current_respects_logged_in_flag() {
    assert_eq!(SessionUser::from_current(CurrentUser::default()), None);
    let current = CurrentUser { logged_in: true, username: Some("alice".to_owned()), is_admin: false, avatar_url: None };
    assert_eq!(SessionUser::from_current(current).map(|u| u.username), Some("alice".to_owned()));
}

// =============================================================
// login
// =============================================================

#[test]
fn login_success_authenticates_and_maps_avatar() {
    let (store, transport) = store();
    transport.reply_json(
        200,
        json!({
            "success": true,
            "message": "登录成功",
            "user": { "username": "alice", "is_admin": false, "avatar_url": "/static/uploads/a.png" }
        }),
    );

    let outcome = block_on(store.login("alice", "pw"));
    assert_eq!(outcome, ActionOutcome { success: true, message: Some("登录成功".to_owned()) });

    let state = store.snapshot();
    assert!(state.is_logged_in());
    assert_eq!(state.user, Some(alice()));
    assert!(!state.loading);
}

#[test]
fn login_rejected_credentials_stay_anonymous() {
    let (store, transport) = store();
    transport.reply_json(401, json!({ "success": false, "message": "密码错误" }));

    let outcome = block_on(store.login("alice", "wrong"));
    assert!(!outcome.success);
    assert_eq!(outcome.message.as_deref(), Some("密码错误"));
    assert!(!store.snapshot().is_logged_in());
    assert!(!store.snapshot().loading);
}

#[test]
fn login_unsuccessful_envelope_stays_anonymous() {
    let (store, transport) = store();
    transport.reply_json(200, json!({ "success": false, "message": "nope" }));
    let outcome = block_on(store.login("a", "b"));
    assert_eq!(outcome, ActionOutcome { success: false, message: Some("nope".to_owned()) });
    assert!(!store.snapshot().is_logged_in());
}

#[test]
fn login_network_failure_becomes_outcome() {
    let (store, transport) = store();
    transport.fail(ApiError::Transport("offline".to_owned()));
    let outcome = block_on(store.login("a", "b"));
    assert!(!outcome.success);
    assert_eq!(outcome.message.as_deref(), Some("network error: offline"));
    assert!(!store.snapshot().loading);
}

#[test]
fn login_success_without_user_is_failure() {
    let (store, transport) = store();
    transport.reply_json(200, json!({ "success": true }));
    assert!(!block_on(store.login("a", "b")).success);
    assert!(!store.snapshot().is_logged_in());
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_clears_session() {
    let (store, transport) = store();
    signed_in(&store, &transport);
    transport.reply_json(200, json!({ "success": true, "message": "登出成功" }));

    let outcome = block_on(store.logout());
    assert!(outcome.success);
    assert!(!store.snapshot().is_logged_in());
}

#[test]
fn logout_clears_session_even_when_server_fails() {
    let (store, transport) = store();
    signed_in(&store, &transport);
    transport.reply_json(500, json!({ "success": false, "message": "登出失败" }));

    let outcome = block_on(store.logout());
    assert_eq!(outcome, ActionOutcome { success: false, message: Some("登出失败".to_owned()) });
    assert!(!store.snapshot().is_logged_in());
}

// =============================================================
// register
// =============================================================

#[test]
fn register_relays_result_without_signing_in() {
    let (store, transport) = store();
    transport.reply_json(200, json!({ "success": true, "message": "注册成功" }));
    let outcome = block_on(store.register("new", "pw"));
    assert_eq!(outcome, ActionOutcome { success: true, message: Some("注册成功".to_owned()) });
    assert!(!store.snapshot().is_logged_in());
    assert!(!store.snapshot().loading);
}

#[test]
fn register_duplicate_username_fails() {
    let (store, transport) = store();
    transport.reply_json(400, json!({ "success": false, "message": "用户名已存在" }));
    let outcome = block_on(store.register("taken", "pw"));
    assert!(!outcome.success);
    assert_eq!(outcome.message.as_deref(), Some("用户名已存在"));
}

// =============================================================
// check_auth
// =============================================================

#[test]
fn check_auth_populates_session() {
    let (store, transport) = store();
    signed_in(&store, &transport);
    let state = store.snapshot();
    assert_eq!(state.user, Some(alice()));
    assert!(state.checked);
    assert_eq!(transport.last().url, "/api/auth/user");
}

#[test]
fn check_auth_is_idempotent() {
    let (store, transport) = store();
    signed_in(&store, &transport);
    let first = store.snapshot();
    signed_in(&store, &transport);
    assert_eq!(store.snapshot(), first);
}

#[test]
fn check_auth_logged_out_forces_anonymous() {
    let (store, transport) = store();
    signed_in(&store, &transport);
    transport.reply_json(200, json!({ "logged_in": false }));
    block_on(store.check_auth());
    assert!(!store.snapshot().is_logged_in());
    assert!(store.snapshot().checked);
}

#[test]
fn check_auth_error_forces_anonymous() {
    let (store, transport) = store();
    signed_in(&store, &transport);
    transport.reply_json(500, json!({ "logged_in": false }));
    block_on(store.check_auth());
    assert!(!store.snapshot().is_logged_in());
}

// =============================================================
// upload_avatar
// =============================================================

fn avatar_file() -> AvatarFile {
    AvatarFile { file_name: "me.png".to_owned(), content_type: Some("image/png".to_owned()), bytes: vec![1, 2, 3] }
}

#[test]
fn upload_avatar_updates_only_avatar() {
    let (store, transport) = store();
    signed_in(&store, &transport);
    transport.reply_json(200, json!({ "success": true, "message": "ok", "data": { "avatar_url": "x.png" } }));

    let outcome = block_on(store.upload_avatar(avatar_file()));
    assert_eq!(
        outcome,
        AvatarOutcome { success: true, message: Some("ok".to_owned()), avatar_url: Some("x.png".to_owned()) }
    );
    let state = store.snapshot();
    assert_eq!(state.avatar(), Some("x.png"));
    assert_eq!(state.username(), "alice");
}

#[test]
fn upload_avatar_when_anonymous_returns_url_without_user() {
    let (store, transport) = store();
    transport.reply_json(200, json!({ "success": true, "data": { "avatar_url": "x.png" } }));
    let outcome = block_on(store.upload_avatar(avatar_file()));
    assert_eq!(outcome.avatar_url.as_deref(), Some("x.png"));
    assert!(store.snapshot().user.is_none());
}

#[test]
fn upload_avatar_failure_keeps_old_avatar() {
    let (store, transport) = store();
    signed_in(&store, &transport);
    transport.reply_json(400, json!({ "success": false, "message": "没有选择文件" }));

    let outcome = block_on(store.upload_avatar(avatar_file()));
    assert!(!outcome.success);
    assert_eq!(outcome.message.as_deref(), Some("没有选择文件"));
    assert_eq!(store.snapshot().avatar(), Some("/static/uploads/a.png"));
}
