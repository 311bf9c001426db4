use std::fmt::Write as _;

use idtoken_core::{
    human_expiry, preview, separator, AuthFailure, ErrorEnvelope, SignInResponse,
    SEPARATOR_WIDTH, TOKEN_PREVIEW_CHARS,
};

pub(crate) fn success_report(response: &SignInResponse, api_base: &str) -> String {
    let rule = separator(SEPARATOR_WIDTH);
    let mut out = String::new();
    let _ = writeln!(out, "Successfully authenticated!");
    let _ = writeln!(out);
    let _ = writeln!(out, "User info:");
    let _ = writeln!(out, "   Email: {}", response.email);
    let _ = writeln!(out, "   UID: {}", response.local_id);
    let _ = writeln!(
        out,
        "   Expires in: {}s ({})",
        response.expires_in,
        human_expiry(response.expires_in)
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "ID token:");
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "{}", response.id_token);
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out);
    let _ = writeln!(out, "Refresh token (save for later):");
    let _ = writeln!(
        out,
        "{}...",
        preview(&response.refresh_token, TOKEN_PREVIEW_CHARS)
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "How to use in Postman:");
    let _ = writeln!(out, "1. Open your collection → Variables tab");
    let _ = writeln!(out, "2. Set firebase_token = [copy token above]");
    let _ = writeln!(out, "3. Test with any authenticated endpoint");
    let _ = writeln!(out);
    let _ = writeln!(out, "Quick test command:");
    let _ = writeln!(
        out,
        "   curl -H \"Authorization: Bearer {}...\" \\",
        preview(&response.id_token, TOKEN_PREVIEW_CHARS)
    );
    let _ = writeln!(out, "        {api_base}/api/me");
    out
}

pub(crate) fn failure_report(body: &serde_json::Value) -> anyhow::Result<String> {
    let mut out = String::new();
    let _ = writeln!(out, "Authentication failed:");
    let _ = writeln!(out, "{}", serde_json::to_string_pretty(body)?);
    if let Some(failure) = failure_kind(body) {
        let _ = writeln!(out);
        for (index, line) in failure.hint().iter().enumerate() {
            if index == 0 {
                let _ = writeln!(out, "Hint: {line}");
            } else {
                let _ = writeln!(out, "      {line}");
            }
        }
    }
    Ok(out)
}

pub(crate) fn error_message(body: &serde_json::Value) -> String {
    serde_json::from_value::<ErrorEnvelope>(body.clone())
        .map(|envelope| envelope.error.message)
        .unwrap_or_default()
}

fn failure_kind(body: &serde_json::Value) -> Option<AuthFailure> {
    AuthFailure::classify(&error_message(body))
}
