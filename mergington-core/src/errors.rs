use thiserror::Error;

/// Domain failures for registry mutations. The server crate maps these onto
/// HTTP status codes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SignupError {
    #[error("Activity not found")]
    UnknownActivity(String),

    #[error("Student already signed up for this activity")]
    AlreadySignedUp { email: String, activity: String },

    #[error("Student is not signed up for this activity")]
    NotSignedUp { email: String, activity: String },
}
