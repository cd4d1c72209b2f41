use std::fmt;

/// The set of patients an export covers.
///
/// The caller is responsible for authorizing the scope before exporting.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ExportScope {
    /// One user, by ID.
    SingleUser(String),
    /// Every patient whose profile names this organization (exact match).
    Organization(String),
    /// Every patient.
    All,
}

impl ExportScope {
    /// File name a transport layer should offer for the archive.
    pub fn archive_file_name(&self) -> String {
        match self {
            Self::SingleUser(user_id) => format!("export_user_{user_id}.zip"),
            Self::Organization(organization) => format!("export_organization_{organization}.zip"),
            Self::All => "export_all.zip".to_string(),
        }
    }
}

impl fmt::Display for ExportScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SingleUser(user_id) => write!(f, "user:{user_id}"),
            Self::Organization(organization) => write!(f, "organization:{organization}"),
            Self::All => write!(f, "all"),
        }
    }
}
