//! The customization seam of the generator.

use crate::{error::CodegenError, section::OperationSection, writer::CodeFragment};

/// A unit of trait-driven behavior contributed to a generated operation
/// module.
///
/// A customization is bound to exactly one operation for its whole lifetime
/// and is queried once per declared section by the generator. The contract:
///
/// - queries are idempotent: asking the same section twice yields equal
///   fragments;
/// - contributions are independent: a fragment may not rely on what other
///   customizations emit, only on the section's own documented bindings;
/// - contributing nothing is the normal case and is expressed with
///   [`CodeFragment::empty`].
///
/// Returning an error aborts generation of the bound operation; none of its
/// fragments, from any section, are used.
pub trait OperationCustomization {
    /// Stable name for logs and error context.
    fn name(&self) -> &'static str;

    /// The fragment this customization contributes at `section`.
    fn section(&self, section: &OperationSection<'_>) -> Result<CodeFragment, CodegenError>;
}
