use std::{fs, path::Path};

use rolesync_core::{Role, RoleDocument};
use tracing::debug;

use crate::ImportError;


/// Loads roles from a JSON document.
///
/// The document is either `{"roles": [...]}` or a bare list of roles.
pub fn load_roles_from_json<P>(path: P) -> Result<Vec<Role>, ImportError>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let document_string =
        fs::read_to_string(path).map_err(|error| ImportError::UnableToReadFile {
            path: path.to_path_buf(),
            error,
        })?;

    let roles = serde_json::from_str::<RoleDocument>(&document_string)
        .map_err(|error| ImportError::InvalidJson {
            path: path.to_path_buf(),
            error,
        })?
        .into_roles();

    for (index, role) in roles.iter().enumerate() {
        role.validate()
            .map_err(|error| ImportError::InvalidRole {
                path: path.to_path_buf(),
                index,
                error,
            })?;

        debug!(role = ?role, "Read role.");
    }

    Ok(roles)
}



#[cfg(test)]
mod test {
    use std::fs;

    use super::*;

    #[test]
    fn loads_every_role_field_for_field() {
        let directory = tempfile::tempdir().unwrap();
        let document_path = directory.path().join("roles.json");

        fs::write(
            &document_path,
            r#"{
                "roles": [
                    {
                        "name": "build",
                        "permissions": ["hudson.model.Item.Discover", "hudson.model.Item.Build"],
                        "pattern": "build-.*",
                        "users": ["testuser1", "testuser2"]
                    },
                    {
                        "name": "deployment",
                        "permissions": ["hudson.model.Item.Discover"],
                        "pattern": "deploy-.*",
                        "users": []
                    },
                    {
                        "name": "readers",
                        "permissions": ["hudson.model.Item.Read"]
                    }
                ]
            }"#,
        )
        .unwrap();

        let roles = load_roles_from_json(&document_path).unwrap();

        assert_eq!(roles.len(), 3);
        assert_eq!(
            roles[0],
            Role {
                name: "build".to_string(),
                permissions: vec![
                    "hudson.model.Item.Discover".to_string(),
                    "hudson.model.Item.Build".to_string()
                ],
                pattern: Some("build-.*".to_string()),
                users: vec!["testuser1".to_string(), "testuser2".to_string()],
            }
        );
        assert_eq!(roles[1].name, "deployment");
        assert!(roles[1].users.is_empty());
        assert_eq!(roles[2].pattern, None);
    }

    #[test]
    fn rejects_malformed_documents() {
        let directory = tempfile::tempdir().unwrap();
        let document_path = directory.path().join("roles.json");

        fs::write(&document_path, r#"{ "roles": "build" }"#).unwrap();

        assert!(matches!(
            load_roles_from_json(&document_path),
            Err(ImportError::InvalidJson { .. })
        ));
    }

    #[test]
    fn reports_the_underlying_parse_error() {
        let directory = tempfile::tempdir().unwrap();
        let document_path = directory.path().join("roles.json");

        fs::write(
            &document_path,
            "{\n  \"roles\": [\n    { \"permissions\": [\"a\"] }\n  ]\n}",
        )
        .unwrap();

        match load_roles_from_json(&document_path) {
            Err(ImportError::InvalidJson { error, .. }) => {
                assert!(error.to_string().contains("missing field `name`"));
                assert_eq!(error.line(), 3);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn accepts_null_lists() {
        let directory = tempfile::tempdir().unwrap();
        let document_path = directory.path().join("roles.json");

        fs::write(
            &document_path,
            r#"{ "roles": [ { "name": "build", "permissions": null, "users": null } ] }"#,
        )
        .unwrap();

        let roles = load_roles_from_json(&document_path).unwrap();

        assert_eq!(roles, vec![Role::new("build")]);
    }

    #[test]
    fn rejects_roles_without_names() {
        let directory = tempfile::tempdir().unwrap();
        let document_path = directory.path().join("roles.json");

        fs::write(
            &document_path,
            r#"[ { "name": "build" }, { "name": "" } ]"#,
        )
        .unwrap();

        assert!(matches!(
            load_roles_from_json(&document_path),
            Err(ImportError::InvalidRole { index: 1, .. })
        ));
    }

    #[test]
    fn reports_missing_files() {
        let directory = tempfile::tempdir().unwrap();

        assert!(matches!(
            load_roles_from_json(directory.path().join("missing.json")),
            Err(ImportError::UnableToReadFile { .. })
        ));
    }
}
