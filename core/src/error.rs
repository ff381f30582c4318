use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum IntakeError {
    #[error("'{name}' is not a supported payslip document (declared type: {media_type})")]
    UnsupportedFileType { name: String, media_type: String },
}
