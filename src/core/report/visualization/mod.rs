//! Chart generation for dashboard reports
//!
//! Provides the three dashboard charts (credit progress, grade trajectory,
//! days required per module) as terminal bars and as Mermaid `xychart-beta`
//! blocks for Markdown.

pub mod bars;
pub mod mermaid;

pub use bars::TextChart;
pub use mermaid::MermaidGenerator;
