pub mod base44_session_repository;
pub mod config_service;
pub mod paths;
pub mod secret_service;

pub use crate::base44_session_repository::Base44SessionRepository;
pub use crate::config_service::ConfigService;
pub use crate::paths::CodeTutorPaths;
pub use crate::secret_service::SecretServiceImpl;
