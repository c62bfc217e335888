mod application;
mod branch;
mod label;
mod repository;
mod user;

pub use application::GhApplication;
pub use branch::{GhBranch, GhBranchShort};
pub use label::GhLabel;
pub use repository::GhRepository;
pub use user::GhUser;
