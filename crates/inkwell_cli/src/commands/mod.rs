mod exec;
mod migrate;
mod user;

pub use exec::cmd_exec;
pub use migrate::cmd_migrate;
pub use user::{cmd_create_user, cmd_delete_user};
