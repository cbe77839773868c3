use std::fmt;

/// Warnings about a manifest that do not stop a run.
/// These are non-fatal issues that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// The manifest lists no files
    EmptyManifest { path: String },
    /// The same file and field are listed more than once and will be bumped repeatedly
    DuplicateEntry { file: String, field: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::EmptyManifest { path } => {
                write!(f, "Manifest '{}' lists no files, nothing to bump", path)
            }
            BoundaryWarning::DuplicateEntry { file, field } => {
                write!(
                    f,
                    "Field '{}' in '{}' is listed more than once and will be bumped once per listing",
                    field, file
                )
            }
        }
    }
}
