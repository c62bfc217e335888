mod organization;

pub use organization::GhOrganization;
