// Observability: metrics recorded through the `metrics` facade.
// No exporter is installed here; a host process may install any recorder.

pub mod metrics;

pub use metrics::MetricName;
