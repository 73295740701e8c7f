pub mod lua;
pub mod registry;
pub mod sink;

pub use registry::{Export, ExportTable};
pub use sink::{Captured, OutputSink};
