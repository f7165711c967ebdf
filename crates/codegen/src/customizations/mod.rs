//! Built-in operation customizations.

mod http_checksum_required;

pub use http_checksum_required::HttpChecksumRequired;

use crate::customize::OperationCustomization;
use swage_model::{Model, OperationShape};

/// The customizations applied to every generated operation, in contribution
/// order.
pub fn default_customizations<'a>(
    model: &'a Model,
    operation: &'a OperationShape,
) -> Vec<Box<dyn OperationCustomization + 'a>> {
    vec![Box::new(HttpChecksumRequired::new(model, operation))]
}
