//! Operation module rendering and the client generation driver.

use crate::{
    customizations,
    customize::OperationCustomization,
    error::CodegenError,
    section::OperationSection,
    writer::{CodeFragment, RustWriter},
};
use eyre::{Result, WrapErr};
use heck::ToSnakeCase;
use itertools::Itertools;
use std::{fs, path::Path};
use swage_model::{Model, OperationShape};

/// Renders the client module of a single operation.
///
/// Customizations are held in contribution order; every declared section of
/// the module is visited exactly once, and the fragments contributed to a
/// section are concatenated in that order. A customization error aborts the
/// render with no partial output.
pub struct OperationGenerator<'a> {
    operation: &'a OperationShape,
    customizations: Vec<Box<dyn OperationCustomization + 'a>>,
}

impl<'a> OperationGenerator<'a> {
    /// Creates a generator for `operation` with the built-in customizations.
    pub fn new(model: &'a Model, operation: &'a OperationShape) -> Self {
        Self { operation, customizations: customizations::default_customizations(model, operation) }
    }

    /// Appends a customization after the built-in ones.
    pub fn with_customization(mut self, customization: impl OperationCustomization + 'a) -> Self {
        self.customizations.push(Box::new(customization));
        self
    }

    /// Name of the generated module, the snake_case of the operation name.
    pub fn module_name(&self) -> String {
        self.operation.id.name().to_snake_case()
    }

    /// Collects the non-empty fragments contributed to `section`, in
    /// customization order.
    fn section(&self, section: &OperationSection<'_>) -> Result<Vec<CodeFragment>, CodegenError> {
        let mut fragments = Vec::new();
        for customization in &self.customizations {
            let fragment = customization.section(section)?;
            trace!(
                customization = customization.name(),
                section = section.name(),
                contributed = !fragment.is_empty(),
                "queried customization"
            );
            if !fragment.is_empty() {
                fragments.push(fragment);
            }
        }
        Ok(fragments)
    }

    /// Renders the operation module source.
    pub fn render(&self) -> Result<String, CodegenError> {
        // Query every section up front so a failing customization aborts
        // before any text is assembled.
        let extra_docs = self.section(&OperationSection::ExtraDocs)?;
        let imports = self.section(&OperationSection::Imports)?;
        let mutate_request =
            self.section(&OperationSection::MutateRequest { request: "request" })?;
        let runtime_config =
            self.section(&OperationSection::AdditionalRuntimeConfig { config: "config" })?;

        let name = self.operation.id.name();
        let mut w = RustWriter::new();

        w.write_line(format!("//! Client support for the `{}` operation.", self.operation.id));
        for fragment in &extra_docs {
            w.write_fragment(fragment);
        }
        w.blank_line();
        w.write_line("use swage_runtime::{Body, BuildError, HttpRequest, OperationRuntimeConfig};");
        for fragment in &imports {
            w.write_fragment(fragment);
        }

        w.blank_line();
        w.write_line(format!("/// Builds the HTTP request for `{name}` from its serialized payload."));
        w.open_block("pub fn build_http_request(payload: Body) -> Result<HttpRequest, BuildError>");
        if mutate_request.is_empty() {
            w.write_line(format!("let request = HttpRequest::post(\"/{name}\", payload)?;"));
        } else {
            w.write_line(format!("let mut request = HttpRequest::post(\"/{name}\", payload)?;"));
            for fragment in &mutate_request {
                w.write_fragment(fragment);
            }
        }
        w.write_line("Ok(request)");
        w.close_block();

        w.blank_line();
        w.write_line(format!("/// Runtime configuration applied to `{name}` invocations."));
        w.open_block("pub fn runtime_config() -> OperationRuntimeConfig");
        if runtime_config.is_empty() {
            w.write_line("OperationRuntimeConfig::new()");
        } else {
            w.write_line("let mut config = OperationRuntimeConfig::new();");
            for fragment in &runtime_config {
                w.write_fragment(fragment);
            }
            w.write_line("config");
        }
        w.close_block();

        Ok(w.finish())
    }
}

/// Source of one generated operation module.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedModule {
    /// Module name, the snake_case of the operation name.
    pub name: String,
    /// Rendered module source.
    pub contents: String,
}

/// Drives generation over every operation of a model.
///
/// Operations are visited in shape-id order, so regenerating from the same
/// model reproduces the output byte for byte.
pub struct ClientGenerator<'a> {
    model: &'a Model,
}

impl<'a> ClientGenerator<'a> {
    /// Creates a driver over `model`.
    pub fn new(model: &'a Model) -> Self {
        Self { model }
    }

    /// Renders every operation module.
    pub fn generate(&self) -> Result<Vec<GeneratedModule>> {
        let mut modules = Vec::with_capacity(self.model.operations().count());
        for operation in self.model.operations() {
            debug!(operation = %operation.id, "generating operation module");
            let generator = OperationGenerator::new(self.model, operation);
            let contents = generator
                .render()
                .wrap_err_with(|| format!("failed to generate operation `{}`", operation.id))?;
            modules.push(GeneratedModule { name: generator.module_name(), contents });
        }
        Ok(modules)
    }

    /// Renders every operation module and writes them under `dir`.
    ///
    /// One `<module>.rs` file is written per operation, plus a `mod.rs`
    /// declaring them all.
    pub fn write_to(&self, dir: &Path) -> Result<()> {
        let modules = self.generate()?;
        fs::create_dir_all(dir)
            .wrap_err_with(|| format!("failed to create {}", dir.display()))?;
        for module in &modules {
            let path = dir.join(format!("{}.rs", module.name));
            debug!(path = %path.display(), "writing generated module");
            fs::write(&path, &module.contents)
                .wrap_err_with(|| format!("failed to write {}", path.display()))?;
        }
        let declarations = modules.iter().map(|m| format!("pub mod {};", m.name)).join("\n");
        fs::write(dir.join("mod.rs"), format!("{declarations}\n"))
            .wrap_err_with(|| format!("failed to write {}", dir.join("mod.rs").display()))?;
        Ok(())
    }
}
