//! Reports module for family-report
//!
//! Turns a month of transactions into an ordered, multi-section report.
//! The variant decides visibility and layout, the assembler lays the
//! sections out, and the service wires a transaction source to both.

pub mod assembler;
pub mod service;
pub mod variant;

pub use assembler::{PreviousMonth, Report, ReportAssembler, ReportInputs, Section, SectionBody};
pub use service::{ReportRequest, ReportService};
pub use variant::{ReportVariant, SectionKind};
