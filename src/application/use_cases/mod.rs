/// Use cases module containing application business logic orchestration
mod merge_sbom;

pub use merge_sbom::MergeSbomUseCase;
