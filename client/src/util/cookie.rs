//! Credential-token persistence in the `token` cookie.
//!
//! Reads and writes `document.cookie` in the browser. The value is
//! URI-component encoded so tokens with `;` or spaces survive, and the cookie
//! is scoped to `/` so every route sees it.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is browser-only; SSR paths report no token and ignore writes,
//! which keeps server rendering deterministic.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

/// Name of the cookie that holds the credential token.
pub const TOKEN_COOKIE: &str = "token";

/// Where the session's credential token is persisted.
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn store(&self, token: &str);
    fn clear(&self);
}

/// `document.cookie`-backed token store.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserCookie;

impl TokenStore for BrowserCookie {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let raw = html_document()?.cookie().ok()?;
            let encoded = find_cookie(&raw, TOKEN_COOKIE)?;
            let decoded = js_sys::decode_uri_component(encoded).ok().map(String::from)?;
            Some(decoded).filter(|t| !t.is_empty())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn store(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(doc) = html_document() else {
                return;
            };
            let encoded = String::from(js_sys::encode_uri_component(token));
            cookie_written(doc.set_cookie(&set_cookie_value(TOKEN_COOKIE, &encoded)), "persist");
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(doc) = html_document() {
                cookie_written(doc.set_cookie(&expire_cookie_value(TOKEN_COOKIE)), "clear");
            }
        }
    }
}

#[cfg(feature = "hydrate")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;

    web_sys::window()?.document()?.dyn_into::<web_sys::HtmlDocument>().ok()
}

/// Report a failed `document.cookie` write. Returns whether the write succeeded.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn cookie_written<E: std::fmt::Debug>(result: Result<(), E>, action: &str) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            log::warn!("failed to {action} {TOKEN_COOKIE} cookie: {e:?}");
            false
        }
    }
}

/// Find the raw value of `name` in a `document.cookie` / `Cookie:` string.
pub fn find_cookie<'a>(raw: &'a str, name: &str) -> Option<&'a str> {
    raw.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key.trim() == name).then(|| value.trim())
    })
}

/// Assignment string that sets `name` for the whole site.
pub fn set_cookie_value(name: &str, encoded_value: &str) -> String {
    format!("{name}={encoded_value}; path=/")
}

/// Assignment string that deletes `name`.
pub fn expire_cookie_value(name: &str) -> String {
    format!("{name}=; path=/; expires=Thu, 01 Jan 1970 00:00:00 GMT")
}
