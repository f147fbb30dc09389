use std::{io, path::PathBuf};

use rolesync_core::InvalidRoleError;
use thiserror::Error;


#[derive(Debug, Error)]
pub enum ImportError {
    #[error(
        "unsupported import file extension: {} (expected .json, .xlsx, .xlsm, .xlsb, .xls, .ods or .xslx)",
        .path.display()
    )]
    UnsupportedFileExtension { path: PathBuf },

    #[error("unable to read import file at {}", .path.display())]
    UnableToReadFile {
        path: PathBuf,

        #[source]
        error: io::Error,
    },

    #[error("failed to parse {} as a JSON role document", .path.display())]
    InvalidJson {
        path: PathBuf,

        #[source]
        error: serde_json::Error,
    },

    #[error("role #{} in {} is invalid", .index + 1, .path.display())]
    InvalidRole {
        path: PathBuf,

        index: usize,

        #[source]
        error: InvalidRoleError,
    },

    #[error("unable to open spreadsheet at {}", .path.display())]
    UnableToOpenSpreadsheet {
        path: PathBuf,

        #[source]
        error: calamine::Error,
    },

    #[error(
        "spreadsheet {} has no sheet named \"{}\" (found: {:?})",
        .path.display(),
        .sheet_name,
        .available_sheets
    )]
    MissingSheet {
        path: PathBuf,
        sheet_name: String,
        available_sheets: Vec<String>,
    },

    #[error("unable to read sheet \"{}\"", .sheet_name)]
    UnableToReadSheet {
        sheet_name: String,

        #[source]
        error: calamine::Error,
    },

    #[error(
        "row {} of sheet \"{}\" has content, but no role name in its first column",
        .row_number,
        .sheet_name
    )]
    EmptyRoleName { sheet_name: String, row_number: u32 },
}
