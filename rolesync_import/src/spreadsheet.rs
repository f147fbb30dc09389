use std::{
    collections::HashMap,
    fs::File,
    io::BufReader,
    path::Path,
};

use calamine::{open_workbook, open_workbook_auto, Data, Range, Reader, Sheets, Xlsx};
use rolesync_core::Role;
use tracing::{debug, warn};

use crate::ImportError;



/// Where the roles and their users live inside a spreadsheet.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SpreadsheetLayout {
    /// Sheet with one role per row: name, whitespace-separated permissions, pattern.
    pub role_sheet: String,

    /// Sheet with one role per row: name, followed by any number of user cells.
    pub user_sheet: String,

    /// Number of leading rows of the role sheet to skip.
    pub role_sheet_header_rows: u32,

    /// Number of leading rows of the user sheet to skip.
    pub user_sheet_header_rows: u32,
}

impl Default for SpreadsheetLayout {
    fn default() -> Self {
        Self {
            role_sheet: "Sheet1".to_string(),
            user_sheet: "Sheet2".to_string(),
            role_sheet_header_rows: 1,
            user_sheet_header_rows: 0,
        }
    }
}



/// A single non-header row of a sheet.
#[derive(Clone, PartialEq, Eq, Debug)]
pub(crate) struct SheetRow {
    /// One-based row number, as displayed by spreadsheet applications.
    pub(crate) row_number: u32,

    /// Trimmed cell contents, starting at column A.
    pub(crate) cells: Vec<String>,
}

impl SheetRow {
    fn cell(&self, column: usize) -> &str {
        self.cells.get(column).map(String::as_str).unwrap_or("")
    }

    fn is_blank(&self) -> bool {
        self.cells.iter().all(String::is_empty)
    }
}



type SpreadsheetWorkbook = Sheets<BufReader<File>>;

fn open_spreadsheet(path: &Path) -> Result<SpreadsheetWorkbook, ImportError> {
    let has_legacy_extension = path
        .extension()
        .and_then(|extension| extension.to_str())
        .map(|extension| extension.eq_ignore_ascii_case("xslx"))
        .unwrap_or(false);

    // Files written with the misspelled ".xslx" extension are plain xlsx workbooks.
    let workbook = if has_legacy_extension {
        open_workbook::<Xlsx<_>, _>(path)
            .map(Sheets::Xlsx)
            .map_err(calamine::Error::from)
    } else {
        open_workbook_auto(path)
    };

    workbook.map_err(|error| ImportError::UnableToOpenSpreadsheet {
        path: path.to_path_buf(),
        error,
    })
}

fn read_sheet(
    workbook: &mut SpreadsheetWorkbook,
    path: &Path,
    sheet_name: &str,
) -> Result<Range<Data>, ImportError> {
    let available_sheets = workbook.sheet_names();

    if !available_sheets.iter().any(|name| name == sheet_name) {
        return Err(ImportError::MissingSheet {
            path: path.to_path_buf(),
            sheet_name: sheet_name.to_string(),
            available_sheets,
        });
    }

    workbook
        .worksheet_range(sheet_name)
        .map_err(|error| ImportError::UnableToReadSheet {
            sheet_name: sheet_name.to_string(),
            error,
        })
}


/// Collects the rows of a sheet by their absolute position, so that
/// header skipping and column indices do not depend on where the
/// used area of the sheet happens to start.
fn collect_sheet_rows(range: &Range<Data>, header_rows: u32) -> Vec<SheetRow> {
    let Some((_, (last_row, last_column))) = range.start().zip(range.end()) else {
        return Vec::new();
    };

    let first_row = range
        .start()
        .map(|(first_row, _)| first_row)
        .unwrap_or(0)
        .max(header_rows);

    (first_row..=last_row)
        .map(|row| SheetRow {
            row_number: row + 1,
            cells: (0..=last_column)
                .map(|column| {
                    range
                        .get_value((row, column))
                        .map(|cell| cell.to_string().trim().to_string())
                        .unwrap_or_default()
                })
                .collect(),
        })
        .collect()
}



/// Maps role names to their users. Rows without a role name are skipped,
/// and so are empty user cells.
pub(crate) fn parse_user_rows(sheet_name: &str, rows: Vec<SheetRow>) -> HashMap<String, Vec<String>> {
    let mut users_by_role = HashMap::with_capacity(rows.len());

    for row in rows {
        let mut cells = row.cells.into_iter();

        let Some(role_name) = cells.next().filter(|name| !name.is_empty()) else {
            continue;
        };

        let users = cells.filter(|user| !user.is_empty()).collect::<Vec<_>>();

        if users_by_role.insert(role_name.clone(), users).is_some() {
            warn!(
                sheet = sheet_name,
                row = row.row_number,
                role_name = role_name.as_str(),
                "Role is listed more than once, using its last row."
            );
        }
    }

    users_by_role
}


/// Parses role rows, in order, and joins them with their users by name.
pub(crate) fn parse_role_rows(
    sheet_name: &str,
    rows: Vec<SheetRow>,
    users_by_role: &HashMap<String, Vec<String>>,
) -> Result<Vec<Role>, ImportError> {
    let mut roles = Vec::with_capacity(rows.len());

    for row in rows {
        if row.is_blank() {
            continue;
        }

        let role_name = row.cell(0);
        if role_name.is_empty() {
            return Err(ImportError::EmptyRoleName {
                sheet_name: sheet_name.to_string(),
                row_number: row.row_number,
            });
        }

        let pattern = row.cell(2);

        let role = Role {
            name: role_name.to_string(),
            permissions: row
                .cell(1)
                .split_whitespace()
                .map(str::to_string)
                .collect(),
            pattern: (!pattern.is_empty()).then(|| pattern.to_string()),
            users: users_by_role.get(role_name).cloned().unwrap_or_default(),
        };

        debug!(role = ?role, "Read role.");
        roles.push(role);
    }

    Ok(roles)
}



/// Loads roles from a two-sheet spreadsheet (see [`SpreadsheetLayout`]).
///
/// The output preserves the row order of the role sheet. A role with
/// no row in the user sheet gets an empty user list.
pub fn load_roles_from_spreadsheet<P>(
    path: P,
    layout: &SpreadsheetLayout,
) -> Result<Vec<Role>, ImportError>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let mut workbook = open_spreadsheet(path)?;

    let user_range = read_sheet(&mut workbook, path, &layout.user_sheet)?;
    let users_by_role = parse_user_rows(
        &layout.user_sheet,
        collect_sheet_rows(&user_range, layout.user_sheet_header_rows),
    );

    let role_range = read_sheet(&mut workbook, path, &layout.role_sheet)?;
    parse_role_rows(
        &layout.role_sheet,
        collect_sheet_rows(&role_range, layout.role_sheet_header_rows),
        &users_by_role,
    )
}



#[cfg(test)]
mod test {
    use rolesync_test_util::spreadsheet::{sample_spreadsheet, SpreadsheetFixture};

    use super::*;

    fn row(row_number: u32, cells: &[&str]) -> SheetRow {
        SheetRow {
            row_number,
            cells: cells.iter().map(|cell| cell.to_string()).collect(),
        }
    }

    #[test]
    fn user_rows_drop_empty_cells() {
        let users_by_role = parse_user_rows(
            "Sheet2",
            vec![
                row(1, &["", "", ""]),
                row(2, &["build", "u1", "", "u2"]),
                row(3, &["deployment", "u3", ""]),
            ],
        );

        assert_eq!(users_by_role.len(), 2);
        assert_eq!(users_by_role["build"], vec!["u1", "u2"]);
        assert_eq!(users_by_role["deployment"], vec!["u3"]);
    }

    #[test]
    fn later_user_rows_win() {
        let users_by_role = parse_user_rows(
            "Sheet2",
            vec![row(1, &["build", "u1"]), row(2, &["build", "u2"])],
        );

        assert_eq!(users_by_role["build"], vec!["u2"]);
    }

    #[test]
    fn role_rows_skip_blank_rows_and_reject_missing_names() {
        let users_by_role = HashMap::new();

        let roles = parse_role_rows(
            "Sheet1",
            vec![row(2, &["build", "a\tb  c", "build-.*"]), row(3, &["", "", ""])],
            &users_by_role,
        )
        .unwrap();

        assert_eq!(roles.len(), 1);
        assert_eq!(roles[0].permissions, vec!["a", "b", "c"]);
        assert!(roles[0].users.is_empty());

        let error = parse_role_rows(
            "Sheet1",
            vec![row(4, &["", "a", ""])],
            &users_by_role,
        )
        .unwrap_err();

        assert!(matches!(
            error,
            ImportError::EmptyRoleName { row_number: 4, .. }
        ));
    }

    #[test]
    fn loads_sample_spreadsheet() {
        let directory = tempfile::tempdir().unwrap();
        let spreadsheet_path = directory.path().join("roles.xlsx");
        sample_spreadsheet().write_to(&spreadsheet_path).unwrap();

        let roles =
            load_roles_from_spreadsheet(&spreadsheet_path, &SpreadsheetLayout::default()).unwrap();

        assert_eq!(roles.len(), 2);

        assert_eq!(roles[0].name, "build");
        assert_eq!(roles[0].permissions, vec!["a", "b", "c"]);
        assert_eq!(roles[0].pattern.as_deref(), Some("build-.*"));
        assert_eq!(roles[0].users, vec!["u1", "u2", "u3"]);

        assert_eq!(roles[1].name, "deployment");
        assert_eq!(roles[1].permissions, vec!["a"]);
        assert_eq!(roles[1].pattern.as_deref(), Some("deploy-.*"));
        assert_eq!(roles[1].users, vec!["u1", "u2"]);
    }

    #[test]
    fn role_without_user_row_gets_no_users() {
        let directory = tempfile::tempdir().unwrap();
        let spreadsheet_path = directory.path().join("roles.xlsx");

        SpreadsheetFixture::new()
            .role("build", "a b", "build-.*")
            .role("audit", "hudson.model.Item.Read", "")
            .users("build", &["u1"])
            .write_to(&spreadsheet_path)
            .unwrap();

        let roles =
            load_roles_from_spreadsheet(&spreadsheet_path, &SpreadsheetLayout::default()).unwrap();

        assert_eq!(roles.len(), 2);
        assert_eq!(roles[1].name, "audit");
        assert_eq!(roles[1].pattern, None);
        assert!(roles[1].users.is_empty());
    }

    #[test]
    fn opens_legacy_extension_as_xlsx() {
        let directory = tempfile::tempdir().unwrap();
        let spreadsheet_path = directory.path().join("roles.xslx");
        sample_spreadsheet().write_to(&spreadsheet_path).unwrap();

        let roles =
            load_roles_from_spreadsheet(&spreadsheet_path, &SpreadsheetLayout::default()).unwrap();

        assert_eq!(roles.len(), 2);
    }

    #[test]
    fn reports_missing_user_sheet() {
        let directory = tempfile::tempdir().unwrap();
        let spreadsheet_path = directory.path().join("roles.xlsx");
        sample_spreadsheet().write_to(&spreadsheet_path).unwrap();

        let layout = SpreadsheetLayout {
            user_sheet: "Users".to_string(),
            ..SpreadsheetLayout::default()
        };

        let error = load_roles_from_spreadsheet(&spreadsheet_path, &layout).unwrap_err();

        match error {
            ImportError::MissingSheet {
                sheet_name,
                available_sheets,
                ..
            } => {
                assert_eq!(sheet_name, "Users");
                assert_eq!(available_sheets, vec!["Sheet1", "Sheet2"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
