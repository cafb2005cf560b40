pub mod create;
pub mod delete_all;
pub mod delete_by_id;
pub mod delete_by_name;
pub mod health;
pub mod home;
pub mod list;

pub use create::create_handler;
pub use delete_all::delete_all_handler;
pub use delete_by_id::delete_by_id_handler;
pub use delete_by_name::delete_by_name_handler;
pub use health::health_handler;
pub use home::home_handler;
pub use list::list_handler;
