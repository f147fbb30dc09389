//! Loaders turning role definition files into [`Role`] records.
//!
//! Two formats are supported:
//! - structured JSON documents (see [`load_roles_from_json`]), and
//! - two-sheet spreadsheets (see [`load_roles_from_spreadsheet`]).
//!
//! [`load_roles`] picks the loader based on the file extension.

use std::path::Path;

use rolesync_core::Role;

mod errors;
mod json;
mod spreadsheet;

pub use errors::*;
pub use json::load_roles_from_json;
pub use spreadsheet::{load_roles_from_spreadsheet, SpreadsheetLayout};


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ImportFormat {
    Json,
    Spreadsheet,
}

impl ImportFormat {
    /// Determines the import format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();

        match extension.as_str() {
            "json" => Some(Self::Json),
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" | "xslx" => Some(Self::Spreadsheet),
            _ => None,
        }
    }
}


/// Loads roles from `path`, choosing the loader by file extension.
pub fn load_roles<P>(path: P, layout: &SpreadsheetLayout) -> Result<Vec<Role>, ImportError>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();

    match ImportFormat::from_path(path) {
        Some(ImportFormat::Json) => load_roles_from_json(path),
        Some(ImportFormat::Spreadsheet) => load_roles_from_spreadsheet(path, layout),
        None => Err(ImportError::UnsupportedFileExtension {
            path: path.to_path_buf(),
        }),
    }
}



#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn detects_format_from_extension() {
        assert_eq!(
            ImportFormat::from_path(Path::new("roles.json")),
            Some(ImportFormat::Json)
        );
        assert_eq!(
            ImportFormat::from_path(Path::new("roles.XLSX")),
            Some(ImportFormat::Spreadsheet)
        );
        assert_eq!(
            ImportFormat::from_path(Path::new("roles.xslx")),
            Some(ImportFormat::Spreadsheet)
        );
        assert_eq!(ImportFormat::from_path(Path::new("roles.csv")), None);
        assert_eq!(ImportFormat::from_path(Path::new("roles")), None);
    }

    #[test]
    fn rejects_unknown_extensions() {
        assert!(matches!(
            load_roles("roles.csv", &SpreadsheetLayout::default()),
            Err(ImportError::UnsupportedFileExtension { .. })
        ));
    }
}
