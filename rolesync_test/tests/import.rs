use std::path::Path;

use rolesync::actions::{run_action, ActionError, ActionOutcome, ActionRequest, ImportSummary};
use rolesync_api_client::ClientError;
use rolesync_configuration::Configuration;
use rolesync_import::ImportError;
use rolesync_test_util::prelude::*;


fn default_configuration() -> Configuration {
    Configuration::load_from_str("").unwrap()
}

fn write_sample_spreadsheet(directory: &Path, file_name: &str) -> std::path::PathBuf {
    let file_path = directory.join(file_name);
    sample_spreadsheet().write_to(&file_path).unwrap();
    file_path
}



#[tokio::test]
async fn imports_sample_spreadsheet_in_row_order() {
    let directory = tempfile::tempdir().unwrap();
    let file_path = write_sample_spreadsheet(directory.path(), "roles.xlsx");

    let client = RecordingClient::new();

    let outcome = run_action(
        &client.role_strategy(),
        ActionRequest::Import { file_path },
        &default_configuration(),
    )
    .await
    .unwrap();

    assert_eq!(
        outcome,
        ActionOutcome::Imported(ImportSummary {
            roles_created: 2,
            users_assigned: 5,
            empty_users_skipped: 0,
        })
    );


    let requests = client.requests();
    let calls = requests
        .iter()
        .map(|request| {
            (
                request.endpoint().to_string(),
                request.query("roleName").unwrap_or_default(),
                request.query("sid").unwrap_or_default(),
            )
        })
        .collect::<Vec<_>>();

    let expected_calls = [
        ("addRole", "build", ""),
        ("assignRole", "build", "u1"),
        ("assignRole", "build", "u2"),
        ("assignRole", "build", "u3"),
        ("addRole", "deployment", ""),
        ("assignRole", "deployment", "u1"),
        ("assignRole", "deployment", "u2"),
    ]
    .iter()
    .map(|(endpoint, role_name, sid)| {
        (
            endpoint.to_string(),
            role_name.to_string(),
            sid.to_string(),
        )
    })
    .collect::<Vec<_>>();

    assert_eq!(calls, expected_calls);


    for request in &requests {
        assert_eq!(request.method, "POST");
        assert_eq!(request.query("type").as_deref(), Some("projectRoles"));
    }

    let role_creations = client.requests_to("addRole");
    assert_eq!(
        role_creations[0].query("permissionIds").as_deref(),
        Some("a,b,c")
    );
    assert_eq!(
        role_creations[0].query("pattern").as_deref(),
        Some("build-.*")
    );
    assert_eq!(
        role_creations[0].query("overwrite").as_deref(),
        Some("false")
    );
    assert_eq!(role_creations[1].query("permissionIds").as_deref(), Some("a"));
    assert_eq!(
        role_creations[1].query("pattern").as_deref(),
        Some("deploy-.*")
    );
}


#[tokio::test]
async fn accepts_legacy_extension() {
    let directory = tempfile::tempdir().unwrap();
    let file_path = write_sample_spreadsheet(directory.path(), "roles.xslx");

    let client = RecordingClient::new();

    run_action(
        &client.role_strategy(),
        ActionRequest::Import { file_path },
        &default_configuration(),
    )
    .await
    .unwrap();

    assert_eq!(client.requests_to("addRole").len(), 2);
    assert_eq!(client.requests_to("assignRole").len(), 5);
}


#[tokio::test]
async fn aborts_on_first_unsuccessful_response() {
    let directory = tempfile::tempdir().unwrap();
    let file_path = write_sample_spreadsheet(directory.path(), "roles.xlsx");

    // Third request is the assignment of "u2" to "build".
    let client = RecordingClient::new().failing_request(2, StatusCode::FORBIDDEN);

    let error = run_action(
        &client.role_strategy(),
        ActionRequest::Import { file_path },
        &default_configuration(),
    )
    .await
    .unwrap_err();

    match &error {
        ActionError::RoleAssignmentFailed {
            role_name,
            sid,
            error: ClientError::UnexpectedStatusCode { status_code, .. },
        } => {
            assert_eq!(role_name, "build");
            assert_eq!(sid, "u2");
            assert_eq!(*status_code, StatusCode::FORBIDDEN);
        }
        other => panic!("unexpected error: {other:?}"),
    }

    assert_eq!(client.requests().len(), 3);
}


#[tokio::test]
async fn imports_json_document() {
    let directory = tempfile::tempdir().unwrap();
    let file_path = directory.path().join("roles.json");

    std::fs::write(
        &file_path,
        serde_json::json!({
            "roles": [
                {
                    "name": "admin",
                    "permissions": ["hudson.model.Hudson.Administer"],
                    "users": ["root"]
                },
                {
                    "name": "build",
                    "permissions": ["hudson.model.Item.Build", "hudson.model.Item.Read"],
                    "pattern": "build-.*",
                    "users": ["u1", "", "u2"]
                }
            ]
        })
        .to_string(),
    )
    .unwrap();

    let configuration =
        Configuration::load_from_str("[import]\nrole_type = \"globalRoles\"\n").unwrap();
    let client = RecordingClient::new();

    let outcome = run_action(
        &client.role_strategy(),
        ActionRequest::Import { file_path },
        &configuration,
    )
    .await
    .unwrap();

    assert_eq!(
        outcome,
        ActionOutcome::Imported(ImportSummary {
            roles_created: 2,
            users_assigned: 3,
            empty_users_skipped: 1,
        })
    );

    let role_creations = client.requests_to("addRole");
    assert!(!role_creations[0].has_query("pattern"));
    assert_eq!(
        role_creations[1].query("permissionIds").as_deref(),
        Some("hudson.model.Item.Build,hudson.model.Item.Read")
    );

    for request in client.requests() {
        assert_eq!(request.query("type").as_deref(), Some("globalRoles"));
    }
}


#[tokio::test]
async fn unreadable_file_sends_nothing() {
    let directory = tempfile::tempdir().unwrap();
    let client = RecordingClient::new();

    let missing_file = run_action(
        &client.role_strategy(),
        ActionRequest::Import {
            file_path: directory.path().join("missing.xlsx"),
        },
        &default_configuration(),
    )
    .await;

    assert!(matches!(
        missing_file,
        Err(ActionError::LoadingFailed {
            error: ImportError::UnableToOpenSpreadsheet { .. }
        })
    ));


    let unsupported = run_action(
        &client.role_strategy(),
        ActionRequest::Import {
            file_path: directory.path().join("roles.csv"),
        },
        &default_configuration(),
    )
    .await;

    assert!(matches!(
        unsupported,
        Err(ActionError::LoadingFailed {
            error: ImportError::UnsupportedFileExtension { .. }
        })
    ));

    assert!(client.requests().is_empty());
}
