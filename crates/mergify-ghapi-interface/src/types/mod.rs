mod checks;
mod common;
mod events;
mod issues;
mod orgs;
mod pulls;

pub use checks::*;
pub use common::*;
pub use events::*;
pub use issues::*;
pub use orgs::*;
pub use pulls::*;
