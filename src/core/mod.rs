pub mod config;
pub mod edge;
pub mod filter;
pub mod grouping;
pub mod pipeline;

pub use config::{
    AllowList, GroupingPolicy, ParseStrategy, PipelineConfig, RenderStrategy, DEDUP_PACKAGE_DEPTH,
};
pub use edge::{package_of, Edge};
pub use grouping::EdgeGroup;
pub use pipeline::{
    EdgeObserver, NoopObserver, Pipeline, PipelineOutput, PipelineStats,
    RunReport, StdoutEdgeEcho,
};
