// analytics-backend/src/repository/mod.rs
pub mod completion_event_repository;
pub mod directory_repository;
pub mod member_workspace_repository;

pub use completion_event_repository::CompletionEventRepository;
pub use directory_repository::{DirectoryRepository, ProjectFilter, UserFilter};
pub use member_workspace_repository::MemberWorkspaceRepository;
