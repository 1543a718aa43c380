/// Best-effort normalization of Philippine mobile numbers toward `+63` form.
///
/// Rules: trim whitespace; `+63...` stays unchanged; a leading `0` becomes
/// `+63`. Anything else passes through as-is and is left for the courier's
/// own validation to accept or reject.
pub fn normalize_ph(phone: &str) -> String {
    let phone = phone.trim();

    if phone.starts_with("+63") {
        return phone.to_string();
    }

    if let Some(rest) = phone.strip_prefix('0') {
        return format!("+63{rest}");
    }

    phone.to_string()
}
