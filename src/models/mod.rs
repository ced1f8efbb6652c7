pub mod task;
pub mod user;

pub use task::{Task, TaskInput, TaskResponse};
pub use user::{Credentials, User, UserResponse};
