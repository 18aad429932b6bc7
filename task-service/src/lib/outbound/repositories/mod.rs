pub mod task;
pub mod user;

pub use task::PostgresTaskRepository;
pub use user::PostgresUserRepository;
