pub mod auth_guard;
pub mod list_status;
pub mod nav;
