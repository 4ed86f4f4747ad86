pub mod task;
pub mod user;

pub use task::{CreateTaskRequest, Task, TaskStatusUpdate};
pub use user::User;
