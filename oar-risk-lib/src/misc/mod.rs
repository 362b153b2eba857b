mod color_mode;
mod log_level;
mod report_format;
mod title_case;

pub use color_mode::ColorMode;
pub use log_level::LogLevel;
pub use report_format::ReportFormat;
pub use title_case::title_case;
