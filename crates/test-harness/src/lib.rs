//! Test harness for scripted blueprint workflows.
//!
//! Provides programmatic tools for driving multi-step design sessions
//! through the real bridge dispatch path, verifying the observable
//! properties at every step, and generating diagnostic output.
//!
//! # Key Components
//!
//! - [`DesignScript`] — Fluent API for driving and verifying a session
//! - [`oracle`] — Verification functions returning pass/fail verdicts
//! - [`report`] — Structured text blueprint descriptions
//! - [`helpers`] — Scenario constructors, profile and mesh math
//! - [`assertions`] — Rich assertion helpers with diagnostics

pub mod assertions;
pub mod helpers;
pub mod oracle;
pub mod report;
pub mod workflow;

pub use helpers::HarnessError;
pub use oracle::OracleVerdict;
pub use report::BlueprintReport;
pub use workflow::DesignScript;
