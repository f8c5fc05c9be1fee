//! Bindings for the Plaid Link drop-in loaded from
//! `https://cdn.plaid.com/link/v2/stable/link-initialize.js`.

use js_sys::{Object, Reflect};
use shared::{LinkToken, PublicToken, ServiceError};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    type PlaidHandler;

    #[wasm_bindgen(catch, js_namespace = Plaid, js_name = create)]
    fn plaid_create(config: &JsValue) -> Result<PlaidHandler, JsValue>;

    #[wasm_bindgen(method)]
    fn open(this: &PlaidHandler);
}

/// Callbacks handed to an open Plaid session. Plaid fires only one of
/// them, so both stay owned here and are released when this is dropped.
pub struct LinkSession {
    _on_success: Closure<dyn FnMut(String, JsValue)>,
    _on_exit: Closure<dyn FnMut(JsValue, JsValue)>,
}

/// Opens a linking session for `token`. Exactly one of `on_success` or
/// `on_exit` fires; `on_exit` receives the provider's error message, if any.
/// Keep the returned session alive until one of them has run.
pub fn open_link_session<S, E>(token: &LinkToken, on_success: S, on_exit: E) -> Result<LinkSession, ServiceError>
where
    S: FnOnce(PublicToken) + 'static,
    E: FnOnce(Option<String>) + 'static,
{
    let config = Object::new();
    set(&config, "token", &JsValue::from_str(&token.link_token))?;

    let success: Closure<dyn FnMut(String, JsValue)> = Closure::once(move |public_token: String, _metadata: JsValue| {
        on_success(PublicToken { public_token });
    });
    set(&config, "onSuccess", success.as_ref())?;

    let exit: Closure<dyn FnMut(JsValue, JsValue)> = Closure::once(move |error: JsValue, _metadata: JsValue| {
        on_exit(exit_message(&error));
    });
    set(&config, "onExit", exit.as_ref())?;

    let handler = plaid_create(&config).map_err(|e| {
        ServiceError::Provider(format!("Plaid Link is unavailable: {}", describe(&e)))
    })?;
    handler.open();

    Ok(LinkSession {
        _on_success: success,
        _on_exit: exit,
    })
}

fn set(target: &Object, key: &str, value: &JsValue) -> Result<(), ServiceError> {
    Reflect::set(target, &JsValue::from_str(key), value)
        .map(|_| ())
        .map_err(|e| ServiceError::Provider(describe(&e)))
}

fn exit_message(error: &JsValue) -> Option<String> {
    if error.is_null() || error.is_undefined() {
        return None;
    }
    ["display_message", "error_message", "error_code"]
        .iter()
        .filter_map(|key| Reflect::get(error, &JsValue::from_str(key)).ok())
        .find_map(|value| value.as_string())
        .or_else(|| Some("Linking session ended with an error".to_string()))
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
