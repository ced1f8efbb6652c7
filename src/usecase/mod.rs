pub mod task;
pub mod user;

pub use task::TaskUsecase;
pub use user::UserUsecase;
