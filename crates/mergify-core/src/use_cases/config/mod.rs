pub(crate) mod get_repository_config;

pub use get_repository_config::GetRepositoryConfigInterface;

#[cfg(any(test, feature = "testkit"))]
pub use get_repository_config::MockGetRepositoryConfigInterface;
