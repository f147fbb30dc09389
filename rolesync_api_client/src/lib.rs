//! A client for the Jenkins Role Strategy plugin implementing
//! **the subset of its REST API we need for provisioning (!)**:
//! listing roles, creating roles and assigning SIDs to roles.
//!
//! # Example
//! ```no_run
//! # use std::rc::Rc;
//! # use rolesync_api_client::{
//! #     api::roles::RoleAssignment,
//! #     authentication::BasicCredentials,
//! #     server::{ApiServer, ApiServerOptions},
//! #     Client,
//! # };
//! # use rolesync_core::RoleType;
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let server = Rc::new(ApiServer::new("localhost", ApiServerOptions::default()));
//! let credentials = Rc::new(BasicCredentials::new("admin", Some("admin")));
//!
//! let client = Client::new(server)?.with_authentication(&credentials);
//!
//! client
//!     .role_strategy()
//!     .assign_role(&RoleAssignment::new(RoleType::Project, "build", "jane"))
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod authentication;
mod clients;
pub mod errors;
pub(crate) mod macros;
pub(crate) mod request;
pub mod response;
pub mod server;

pub use clients::*;
pub use errors::*;
pub use response::ServerResponse;
pub use server::ApiServer;
