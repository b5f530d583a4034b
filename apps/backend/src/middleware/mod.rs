//! Request middleware. Wire order (outermost first): `RequestTrace`,
//! `TraceSpan`, `StructuredLogger`; `.wrap()` calls run innermost first.

pub mod request_trace;
pub mod structured_logger;
pub mod trace_span;

pub use request_trace::RequestTrace;
pub use structured_logger::StructuredLogger;
pub use trace_span::TraceSpan;
