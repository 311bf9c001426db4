/// Known sign-in failures that get a follow-up hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFailure {
    InvalidCredentials,
    EmailNotFound,
    UserDisabled,
    TooManyAttempts,
}

impl AuthFailure {
    /// Match order matters: a message naming several codes gets the first hint.
    pub fn classify(message: &str) -> Option<Self> {
        if message.contains("INVALID_LOGIN_CREDENTIALS") || message.contains("INVALID_PASSWORD") {
            Some(Self::InvalidCredentials)
        } else if message.contains("EMAIL_NOT_FOUND") {
            Some(Self::EmailNotFound)
        } else if message.contains("USER_DISABLED") {
            Some(Self::UserDisabled)
        } else if message.contains("TOO_MANY_ATTEMPTS") {
            Some(Self::TooManyAttempts)
        } else {
            None
        }
    }

    pub fn hint(self) -> &'static [&'static str] {
        match self {
            Self::InvalidCredentials => &[
                "Wrong email or password",
                "Check your credentials or reset password",
            ],
            Self::EmailNotFound => &[
                "No user found with this email",
                "Create user in Firebase Console → Authentication",
            ],
            Self::UserDisabled => &["This user account is disabled"],
            Self::TooManyAttempts => &["Too many failed attempts", "Try again later"],
        }
    }
}
