use payloads::Role;
use wasm_bindgen::JsCast;

/// Role from the session's `role` cookie, if the document has one.
pub fn role_from_cookie() -> Option<Role> {
    let document = web_sys::window()?
        .document()?
        .dyn_into::<web_sys::HtmlDocument>()
        .ok()?;
    let cookies = document.cookie().ok()?;
    let role = Role::from_cookie_header(&cookies);
    tracing::debug!(?role, "Read session role");
    role
}
