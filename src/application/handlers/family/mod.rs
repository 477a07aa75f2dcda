//! Family command and query handlers.

mod add_member;
mod get_family;
mod remove_member;

pub use add_member::{AddFamilyMemberCommand, AddFamilyMemberHandler};
pub use get_family::GetFamilyHandler;
pub use remove_member::{RemoveFamilyMemberCommand, RemoveFamilyMemberHandler, RemoveFamilyMemberResult};
