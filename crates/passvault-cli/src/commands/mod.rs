//! Command implementations.

pub mod add;
pub mod dashboard;
pub mod delete;
pub mod list;
pub mod show;
pub mod unlock;

pub use self::add::execute_add;
pub use self::dashboard::execute_dashboard;
pub use self::delete::execute_delete;
pub use self::list::{execute_list, execute_stats};
pub use self::show::execute_show;
pub use self::unlock::{execute_lock, execute_unlock};
