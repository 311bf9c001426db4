use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use chrono::NaiveDateTime;
use tracing::debug;

use crate::api::SignInResponse;
use crate::constants::record_keys;
use crate::errors::RecordError;
use crate::format::human_expiry;

/// Credentials persisted to an `.env`-style file after a successful sign-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRecord {
    pub token: String,
    pub refresh_token: String,
    pub user_id: String,
    pub email: String,
    pub expires_in: u64,
}

impl From<&SignInResponse> for TokenRecord {
    fn from(response: &SignInResponse) -> Self {
        Self {
            token: response.id_token.clone(),
            refresh_token: response.refresh_token.clone(),
            user_id: response.local_id.clone(),
            email: response.email.clone(),
            expires_in: response.expires_in,
        }
    }
}

impl TokenRecord {
    pub fn entries(&self) -> [(&'static str, &str); 4] {
        [
            (record_keys::TOKEN, &self.token),
            (record_keys::REFRESH_TOKEN, &self.refresh_token),
            (record_keys::USER_ID, &self.user_id),
            (record_keys::EMAIL, &self.email),
        ]
    }

    pub fn render(&self, generated_at: NaiveDateTime) -> String {
        let mut out = String::new();
        out.push_str("# Firebase Authentication Token\n");
        let _ = writeln!(out, "# Generated: {}", generated_at.format("%Y-%m-%d %H:%M:%S"));
        let _ = writeln!(out, "# Expires in: {}", human_expiry(self.expires_in));
        out.push('\n');
        for (key, value) in self.entries() {
            let _ = writeln!(out, "{key}={value}");
        }
        out
    }

    /// Writes the record, replacing whatever `path` held before.
    pub fn write(&self, path: &Path, generated_at: NaiveDateTime) -> Result<(), RecordError> {
        let to_error = |source| RecordError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(to_error)?;
        }
        fs::write(path, self.render(generated_at)).map_err(to_error)?;
        debug!(path = %path.display(), "wrote token record");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record() -> TokenRecord {
        TokenRecord {
            token: "id-token".to_string(),
            refresh_token: "refresh-token".to_string(),
            user_id: "uid-1".to_string(),
            email: "user@example.com".to_string(),
            expires_in: 3600,
        }
    }

    fn generated_at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .and_then(|date| date.and_hms_opt(9, 30, 5))
            .expect("timestamp")
    }

    #[test]
    fn render_matches_env_layout() {
        assert_eq!(
            record().render(generated_at()),
            "# Firebase Authentication Token\n\
             # Generated: 2024-05-01 09:30:05\n\
             # Expires in: 1 hour\n\
             \n\
             FIREBASE_TOKEN=id-token\n\
             FIREBASE_REFRESH_TOKEN=refresh-token\n\
             FIREBASE_USER_ID=uid-1\n\
             FIREBASE_EMAIL=user@example.com\n"
        );
    }

    #[test]
    fn write_replaces_existing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(".env.firebase-token");
        fs::write(&path, "STALE=1\nOTHER=2\nMORE=3\nEXTRA=4\nLAST=5\n").expect("seed");

        record().write(&path, generated_at()).expect("write");

        let contents = fs::read_to_string(&path).expect("read");
        assert!(!contents.contains("STALE"));
        let pairs: Vec<&str> = contents
            .lines()
            .filter(|line| !line.starts_with('#') && line.contains('='))
            .collect();
        assert_eq!(
            pairs,
            [
                "FIREBASE_TOKEN=id-token",
                "FIREBASE_REFRESH_TOKEN=refresh-token",
                "FIREBASE_USER_ID=uid-1",
                "FIREBASE_EMAIL=user@example.com",
            ]
        );
    }

    #[test]
    fn write_creates_parent_directories() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("token.env");
        record().write(&path, generated_at()).expect("write");
        assert!(path.exists());
    }

    #[test]
    fn write_reports_path_on_failure() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = record()
            .write(dir.path(), generated_at())
            .expect_err("directory is not writable as a file");
        assert!(err.to_string().contains(&dir.path().display().to_string()));
    }
}
