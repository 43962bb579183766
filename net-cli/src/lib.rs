pub mod app;
pub mod export;
pub mod form;
pub mod logging;
pub mod report;
