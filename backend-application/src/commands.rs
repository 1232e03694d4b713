// Write-side use cases

pub mod import_users;
pub mod session_commands;
