//! The code-analysis form: one of a GitHub URL, a zip upload or pasted
//! code, plus the progress panel shown while the analysis runs.

#[cfg(test)]
#[path = "analysis_test.rs"]
mod analysis_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::error::FieldError;
use crate::rules::matches;

pub const FORM_ID: &str = "bughunter-form";
pub const SUBMIT_BUTTON_ID: &str = "analyze-btn";
pub const LANGUAGE_GROUP_ID: &str = "language-group";
pub const PROGRESS_ID: &str = "analysis-progress";

/// Largest accepted upload: 50 MiB.
pub const MAX_ZIP_BYTES: f64 = 50.0 * 1024.0 * 1024.0;

/// Re-enable the submit button if the page has not navigated by then.
pub const LOADING_TIMEOUT_MS: u32 = 300_000;

static GITHUB_REPO: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^https?://(www\.)?github\.com/[A-Za-z0-9_.\-]+/[A-Za-z0-9_.\-]+/?$"));

/// The three mutually exclusive ways to submit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMethod {
    GithubUrl,
    ZipFile,
    Code,
}

impl InputMethod {
    pub const ALL: [Self; 3] = [Self::GithubUrl, Self::ZipFile, Self::Code];

    #[must_use]
    pub fn input_id(self) -> &'static str {
        match self {
            Self::GithubUrl => "id_github_url",
            Self::ZipFile => "id_zip_file",
            Self::Code => "id_code_input",
        }
    }
}

/// Where an analysis error is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    GithubUrl,
    ZipFile,
    Code,
    Language,
}

impl Slot {
    pub const ALL: [Self; 4] = [Self::GithubUrl, Self::ZipFile, Self::Code, Self::Language];

    #[must_use]
    pub fn error_id(self) -> &'static str {
        match self {
            Self::GithubUrl => "github-url-error",
            Self::ZipFile => "zip-file-error",
            Self::Code => "code-input-error",
            Self::Language => "language-error",
        }
    }
}

pub const LANGUAGE_ID: &str = "id_language";

/// The file picked in the zip input.
#[derive(Debug, Clone, PartialEq)]
pub struct ZipUpload {
    pub name: String,
    pub size: f64,
}

/// Snapshot of the analysis form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisInput {
    pub github_url: String,
    pub zip: Option<ZipUpload>,
    pub code: String,
    pub language: String,
}

impl AnalysisInput {
    fn provided(&self) -> usize {
        [!self.github_url.trim().is_empty(), self.zip.is_some(), !self.code.trim().is_empty()]
            .into_iter()
            .filter(|p| *p)
            .count()
    }

    /// Check the form. Only the first failure is reported.
    ///
    /// # Errors
    ///
    /// The slot to show the message in and the message itself.
    pub fn validate(&self) -> Result<(), (Slot, FieldError)> {
        match self.provided() {
            0 => return Err((Slot::GithubUrl, FieldError::NoInput)),
            1 => {}
            _ => return Err((Slot::GithubUrl, FieldError::MultipleInputs)),
        }
        if !self.code.trim().is_empty() && self.language.is_empty() {
            return Err((Slot::Language, FieldError::LanguageRequired));
        }
        let url = self.github_url.trim();
        if !url.is_empty() {
            github_url(url).map_err(|e| (Slot::GithubUrl, e))?;
        }
        if let Some(zip) = &self.zip {
            zip_upload(zip).map_err(|e| (Slot::ZipFile, e))?;
        }
        Ok(())
    }
}

/// # Errors
///
/// [`FieldError::NotGithub`] if the host is missing, otherwise
/// [`FieldError::GithubUrlShape`] if it is not `<owner>/<repo>`.
pub fn github_url(url: &str) -> Result<(), FieldError> {
    if !url.contains("github.com") {
        return Err(FieldError::NotGithub);
    }
    if !matches(&GITHUB_REPO, url) {
        return Err(FieldError::GithubUrlShape);
    }
    Ok(())
}

/// # Errors
///
/// [`FieldError::NotZip`] or [`FieldError::ZipTooLarge`].
pub fn zip_upload(zip: &ZipUpload) -> Result<(), FieldError> {
    if !zip.name.to_lowercase().ends_with(".zip") {
        return Err(FieldError::NotZip);
    }
    if zip.size > MAX_ZIP_BYTES {
        return Err(FieldError::ZipTooLarge);
    }
    Ok(())
}

/// What editing one input does to the others.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusiveEdit {
    pub clear: Vec<InputMethod>,
    pub show_language: bool,
}

/// Reaction to `method` changing. A non-empty value clears the other
/// methods; the language picker is shown only while code is pasted.
#[must_use]
pub fn exclusive_edit(method: InputMethod, has_value: bool) -> Option<ExclusiveEdit> {
    if !has_value {
        if method != InputMethod::Code {
            return None;
        }
        return Some(ExclusiveEdit { clear: Vec::new(), show_language: false });
    }
    Some(ExclusiveEdit {
        clear: InputMethod::ALL.into_iter().filter(|m| *m != method).collect(),
        show_language: method == InputMethod::Code,
    })
}

/// One line of the progress panel, updated `delay_ms` after submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressStep {
    pub id: &'static str,
    pub icon: &'static str,
    pub text: &'static str,
    pub delay_ms: u32,
}

pub const PROGRESS_STEPS: [ProgressStep; 3] = [
    ProgressStep { id: "step-download", icon: "✅", text: "Project downloaded/extracted", delay_ms: 1_000 },
    ProgressStep { id: "step-collect", icon: "✅", text: "Code files collected", delay_ms: 3_000 },
    ProgressStep {
        id: "step-analyze",
        icon: "🤖",
        text: "AI analyzing code... (this may take a while)",
        delay_ms: 5_000,
    },
];
