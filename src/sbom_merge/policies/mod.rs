mod conflict_resolution;

pub use conflict_resolution::ConflictResolution;
