pub mod dto;
pub mod model;
pub mod repository;

pub use dto::CreateUserDto;
pub use model::{User, UserRole};
pub use repository::UserRepository;
