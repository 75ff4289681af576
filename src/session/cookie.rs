//! Signed session cookie values.
//!
//! Cookie format: `base64url(session_id).base64url(hmac_sha256(secret, session_id))`.
//! Only the ID travels to the browser; session data stays server-side.

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use hmac::digest::InvalidLength;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

fn mac_over(secret: &[u8], session_id: &str) -> Result<HmacSha256, InvalidLength> {
    let mut mac = HmacSha256::new_from_slice(secret)?;
    mac.update(session_id.as_bytes());
    Ok(mac)
}

/// Sign a session ID, returning the cookie value.
pub fn sign_session_id(secret: &[u8], session_id: &str) -> Result<String, InvalidLength> {
    let signature = mac_over(secret, session_id)?.finalize().into_bytes();
    Ok(format!(
        "{}.{}",
        URL_SAFE_NO_PAD.encode(session_id.as_bytes()),
        URL_SAFE_NO_PAD.encode(signature)
    ))
}

/// Verify a signed cookie value and extract the session ID.
///
/// Returns `None` for a bad signature or a malformed value; callers treat
/// both as "no session".
pub fn verify_cookie(secret: &[u8], cookie_value: &str) -> Option<String> {
    let (id_part, sig_part) = cookie_value.split_once('.')?;
    let session_id = String::from_utf8(URL_SAFE_NO_PAD.decode(id_part).ok()?).ok()?;
    let signature = URL_SAFE_NO_PAD.decode(sig_part).ok()?;

    mac_over(secret, &session_id)
        .ok()?
        .verify_slice(&signature)
        .ok()?;

    Some(session_id)
}
