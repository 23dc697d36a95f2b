mod report_generator_factory;

pub use report_generator_factory::{DefaultReportGenerator, ReportGeneratorFactory};
