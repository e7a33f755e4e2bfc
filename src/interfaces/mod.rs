use crate::phonemetadata::TerritoryMetadata;

/// Source of per-country formatting metadata.
///
/// Implementations are read concurrently by every formatter sharing them and
/// are never mutated through this trait.
pub trait MetadataProvider: Send + Sync {
    /// Returns the territory data for `country_calling_code`, if any.
    fn lookup(&self, country_calling_code: i32) -> Option<&TerritoryMetadata>;
}
