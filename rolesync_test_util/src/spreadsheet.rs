use std::path::Path;

use rust_xlsxwriter::{Workbook, XlsxError};


/// Builder for two-sheet role spreadsheets, laid out the way
/// the importer expects them by default:
/// - `Sheet1`: a header row, then `name | permissions | pattern`,
/// - `Sheet2`: an empty first row, then `name | user | user | ...`.
#[derive(Default)]
pub struct SpreadsheetFixture {
    roles: Vec<(String, String, String)>,
    users: Vec<(String, Vec<String>)>,
}

impl SpreadsheetFixture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn role(mut self, name: &str, permissions: &str, pattern: &str) -> Self {
        self.roles.push((
            name.to_string(),
            permissions.to_string(),
            pattern.to_string(),
        ));
        self
    }

    pub fn users(mut self, role_name: &str, users: &[&str]) -> Self {
        self.users.push((
            role_name.to_string(),
            users.iter().map(|user| user.to_string()).collect(),
        ));
        self
    }

    pub fn write_to<P>(&self, path: P) -> Result<(), XlsxError>
    where
        P: AsRef<Path>,
    {
        let mut workbook = Workbook::new();

        let role_sheet = workbook.add_worksheet();
        role_sheet.set_name("Sheet1")?;
        role_sheet.write_string(0, 0, "Project roles")?;
        role_sheet.write_string(0, 1, "Jenkins permissions")?;
        role_sheet.write_string(0, 2, "Pattern")?;

        for (index, (name, permissions, pattern)) in self.roles.iter().enumerate() {
            let row = index as u32 + 1;

            role_sheet.write_string(row, 0, name)?;
            role_sheet.write_string(row, 1, permissions)?;
            if !pattern.is_empty() {
                role_sheet.write_string(row, 2, pattern)?;
            }
        }

        let user_sheet = workbook.add_worksheet();
        user_sheet.set_name("Sheet2")?;

        for (index, (role_name, users)) in self.users.iter().enumerate() {
            let row = index as u32 + 1;

            user_sheet.write_string(row, 0, role_name)?;
            for (column, user) in users.iter().enumerate() {
                user_sheet.write_string(row, column as u16 + 1, user)?;
            }
        }

        workbook.save(path.as_ref())
    }
}


/// Two roles with three and two users respectively.
pub fn sample_spreadsheet() -> SpreadsheetFixture {
    SpreadsheetFixture::new()
        .role("build", "a b c", "build-.*")
        .role("deployment", "a", "deploy-.*")
        .users("build", &["u1", "u2", "u3"])
        .users("deployment", &["u1", "u2"])
}
