use thiserror::Error;

/// A failed field check. `Display` is the message shown under the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Name is required.")]
    NameRequired,
    #[error("Email is required.")]
    EmailRequired,
    #[error("Please enter a valid email address.")]
    EmailInvalid,
    #[error("Username is required.")]
    UsernameRequired,
    #[error("Username must be at least 3 characters.")]
    UsernameTooShort,
    #[error("Username can only contain letters, numbers, underscores, and hyphens.")]
    UsernameCharset,
    #[error("Password is required.")]
    PasswordRequired,
    #[error("Password must be at least 8 characters.")]
    PasswordTooShort,
    #[error("Password must contain at least one letter and one number.")]
    PasswordTooSimple,
    #[error("Please confirm your password.")]
    ConfirmRequired,
    #[error("Passwords do not match.")]
    PasswordMismatch,

    // Code analysis
    #[error("Please provide a GitHub URL, upload a .zip file, or paste code directly.")]
    NoInput,
    #[error("Please use only one input method.")]
    MultipleInputs,
    #[error("Please select a programming language for your code.")]
    LanguageRequired,
    #[error("Please provide a valid GitHub repository URL.")]
    NotGithub,
    #[error("Please provide a valid GitHub repository URL (e.g., https://github.com/user/repo).")]
    GithubUrlShape,
    #[error("Please upload a .zip file.")]
    NotZip,
    #[error("File size must be less than 50MB.")]
    ZipTooLarge,
}
