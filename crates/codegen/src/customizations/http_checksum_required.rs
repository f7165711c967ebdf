//! The checksum-required customization.

use crate::{
    customize::OperationCustomization,
    error::CodegenError,
    section::OperationSection,
    writer::{CodeFragment, RustWriter},
};
use swage_model::{Model, OperationShape, TraitId};

/// Weaves mandatory `Content-MD5` enforcement into operations carrying the
/// checksum-required trait.
///
/// Two fragments are contributed: a build step spliced into the generated
/// request builder that hashes the buffered body into a `content-md5`
/// header, and registration of the runtime interceptor that performs the
/// same enforcement immediately before transmission. Operations without the
/// trait get the empty fragment in every section.
///
/// The trait cannot be combined with a streaming input: the body must be
/// fully buffered to be hashed, so that combination fails generation with
/// [`CodegenError::ChecksumOnStreamingInput`] before any code is emitted.
#[derive(Clone, Copy)]
pub struct HttpChecksumRequired<'a> {
    model: &'a Model,
    operation: &'a OperationShape,
}

impl<'a> HttpChecksumRequired<'a> {
    /// Binds the customization to `operation`.
    pub fn new(model: &'a Model, operation: &'a OperationShape) -> Self {
        Self { model, operation }
    }

    /// True iff the operation carries the checksum-required trait.
    fn applies(&self) -> bool {
        self.operation.has_trait(TraitId::HttpChecksumRequired)
    }

    /// True iff the operation's input shape has a streaming member.
    fn has_streaming_input(&self) -> Result<bool, CodegenError> {
        let input = self.operation.input_shape(self.model).ok_or_else(|| {
            CodegenError::UnresolvedShape {
                operation: self.operation.id.clone(),
                shape: self.operation.input.clone(),
            }
        })?;
        Ok(input.has_streaming_member())
    }

    /// The build step inserted into the request builder.
    ///
    /// All runtime paths are fully qualified so the fragment needs nothing
    /// from the module's import section.
    fn mutate_request(&self, request: &str) -> CodeFragment {
        let mut w = RustWriter::new();
        w.open_block(format!("{request} = {request}.augment(|mut req|"));
        w.write_line("let body = req");
        w.indent();
        w.write_line(".body()");
        w.write_line(".bytes()");
        w.write_line(".ok_or_else(swage_runtime::BuildError::unbuffered_body)?;");
        w.dedent();
        w.write_line("let checksum = swage_runtime::checksum::content_md5(body)?;");
        w.write_line("req.headers_mut()");
        w.indent();
        w.write_line(".insert(swage_runtime::checksum::CONTENT_MD5, checksum);");
        w.dedent();
        w.write_line("Ok(req)");
        w.close_block_with(")?;");
        w.into_fragment()
    }

    /// The registration inserted into the runtime configuration.
    fn register_interceptor(&self, config: &str) -> CodeFragment {
        let mut w = RustWriter::new();
        w.write_line(format!(
            "{config}.register_interceptor(swage_runtime::checksum::HttpChecksumRequiredInterceptor::new());"
        ));
        w.into_fragment()
    }
}

impl OperationCustomization for HttpChecksumRequired<'_> {
    fn name(&self) -> &'static str {
        "HttpChecksumRequired"
    }

    fn section(&self, section: &OperationSection<'_>) -> Result<CodeFragment, CodegenError> {
        if !self.applies() {
            return Ok(CodeFragment::empty());
        }
        if self.has_streaming_input()? {
            return Err(CodegenError::ChecksumOnStreamingInput {
                operation: self.operation.id.clone(),
            });
        }
        Ok(match *section {
            OperationSection::ExtraDocs | OperationSection::Imports => CodeFragment::empty(),
            OperationSection::MutateRequest { request } => self.mutate_request(request),
            OperationSection::AdditionalRuntimeConfig { config } => {
                self.register_interceptor(config)
            }
        })
    }
}
