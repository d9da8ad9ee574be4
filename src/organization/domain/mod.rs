//! Domain model for organizations, the top-level tenants.

mod error;
mod ids;
mod organization;
mod slug;

pub use error::OrganizationDomainError;
pub use ids::OrganizationId;
pub use organization::Organization;
pub use slug::OrganizationSlug;
