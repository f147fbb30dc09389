//! Shared data model for `rolesync`: role types as understood by
//! the Role Strategy plugin and the role records we import.

pub mod role_type;
pub mod roles;

pub use role_type::{InvalidRoleTypeError, RoleType};
pub use roles::{InvalidRoleError, Role, RoleDocument};
