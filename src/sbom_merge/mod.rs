/// Domain layer - the SBOM reconciliation engine
///
/// Pure business logic: data model, conflict policy and the services that
/// match, reconcile and re-link entities. Nothing here performs I/O.
pub mod domain;
pub mod policies;
pub mod services;
