//! Read-only population query behind the general evaluation page.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::overview::PopulationRow;

#[async_trait]
pub trait PopulationReader: Send + Sync {
    /// Every user with their latest diagnosis, ordered by family then name.
    async fn all_users_with_latest(&self) -> Result<Vec<PopulationRow>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn population_reader_is_object_safe() {
        fn _accepts_dyn(_reader: &dyn PopulationReader) {}
    }
}
