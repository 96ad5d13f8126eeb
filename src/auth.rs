//! Identity Adapter
//!
//! Bindings to the Firebase auth bridge the page exposes as
//! `window.firebaseBridge` (see `index.html`). The popup flow and the
//! auth-state subscription stay in the Firebase JS SDK; this module
//! marshals user payloads across the boundary.

use serde::Deserialize;
use wasm_bindgen::prelude::*;

/// Signed-in user as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserInfo {
    pub uid: String,
    #[serde(default, rename = "displayName")]
    pub display_name: String,
    /// Bearer token for Firestore REST calls.
    #[serde(default, rename = "idToken")]
    pub id_token: String,
}

impl UserInfo {
    /// Name shown in the title bar, with the anonymous fallback.
    pub fn label(&self) -> String {
        if self.display_name.trim().is_empty() {
            "User: Anonymous".to_string()
        } else {
            format!("User: {}", self.display_name)
        }
    }
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "firebaseBridge"], js_name = signInWithPopup, catch)]
    async fn bridge_sign_in() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["window", "firebaseBridge"], js_name = signOut, catch)]
    async fn bridge_sign_out() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["window", "firebaseBridge"], js_name = onAuthStateChanged)]
    fn bridge_on_auth_state_changed(callback: &Closure<dyn FnMut(JsValue)>);
}

/// Run the popup sign-in flow. Errors are logged here and propagated so
/// the caller decides any user-visible messaging.
pub async fn sign_in() -> Result<UserInfo, JsValue> {
    let value = bridge_sign_in().await.inspect_err(|err| {
        web_sys::console::error_2(&"Sign-in error:".into(), err);
    })?;
    serde_wasm_bindgen::from_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}

pub async fn sign_out() -> Result<(), JsValue> {
    bridge_sign_out()
        .await
        .map(|_| ())
        .inspect_err(|err| web_sys::console::error_2(&"Sign-out error:".into(), err))
}

/// Subscribe to auth changes. The bridge fires immediately with the
/// current state, then on every sign-in/out; a signed-out session
/// arrives as `None`.
pub fn subscribe_auth_changes(handler: impl Fn(Option<UserInfo>) + 'static) {
    let callback = Closure::<dyn FnMut(JsValue)>::new(move |value: JsValue| {
        let user = if value.is_null() || value.is_undefined() {
            None
        } else {
            serde_wasm_bindgen::from_value::<UserInfo>(value).ok()
        };
        handler(user);
    });
    bridge_on_auth_state_changed(&callback);
    // The subscription lives for the whole page session.
    callback.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_falls_back_to_anonymous() {
        let user = UserInfo {
            uid: "u1".into(),
            display_name: "  ".into(),
            id_token: String::new(),
        };
        assert_eq!(user.label(), "User: Anonymous");
    }

    #[test]
    fn label_uses_the_display_name() {
        let user = UserInfo {
            uid: "u1".into(),
            display_name: "Rusty Shackleford".into(),
            id_token: String::new(),
        };
        assert_eq!(user.label(), "User: Rusty Shackleford");
    }
}
