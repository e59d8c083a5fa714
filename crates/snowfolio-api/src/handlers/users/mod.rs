pub mod assets;
pub mod delete;
pub mod history;
pub mod list;
pub mod register;

pub use assets::get_user_assets;
pub use delete::delete_users;
pub use history::get_user_history;
pub use list::list_users;
pub use register::register_user;
