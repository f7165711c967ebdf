//! Extension points of a generated operation module.

/// A section of a generated operation module where customizations may
/// contribute code.
///
/// The set is closed by design: customizations match on it exhaustively, so
/// adding a section is a compile-checked change at every customization
/// site rather than a silently ignored query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperationSection<'a> {
    /// Extra doc lines appended to the module header docs.
    ExtraDocs,
    /// Extra `use` items appended to the module imports.
    Imports,
    /// Inside the generated request builder, immediately before the built
    /// request is returned.
    MutateRequest {
        /// Name of the in-scope request binding the fragment mutates.
        request: &'a str,
    },
    /// Inside the generated `runtime_config` function, between construction
    /// of the configuration and its return.
    AdditionalRuntimeConfig {
        /// Name of the in-scope configuration binding the fragment extends.
        config: &'a str,
    },
}

impl OperationSection<'_> {
    /// Stable section name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ExtraDocs => "extra_docs",
            Self::Imports => "imports",
            Self::MutateRequest { .. } => "mutate_request",
            Self::AdditionalRuntimeConfig { .. } => "additional_runtime_config",
        }
    }
}
