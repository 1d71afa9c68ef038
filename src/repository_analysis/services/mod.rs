mod comparison_engine;
mod dependency_synthesizer;
mod manifest_parser;
mod sbom_generator;
mod simulated_record;

pub use comparison_engine::ComparisonEngine;
pub use dependency_synthesizer::{
    dedup_preserving_order, DependencySetSource, DependencySynthesizer, COMMON_PACKAGES,
};
pub use manifest_parser::{
    ManifestParser, ParsedManifest, DEFAULT_MANIFEST_CANDIDATES, NODE_MANIFEST,
};
pub use sbom_generator::SbomGenerator;
pub use simulated_record::{SimulatedRecordFactory, SIMULATED_DESCRIPTION};
