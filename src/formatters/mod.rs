pub mod json_summary;
pub mod plantuml;

pub use json_summary::JsonSummaryFormatter;
pub use plantuml::PlantUmlFormatter;
