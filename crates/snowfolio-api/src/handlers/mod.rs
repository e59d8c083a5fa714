pub mod users;

pub use users::{delete_users, get_user_assets, get_user_history, list_users, register_user};
