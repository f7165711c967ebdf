//! End-to-end generation tests driven by JSON model documents.

use similar_asserts::assert_eq;
use swage_codegen::{ClientGenerator, CodegenError};
use swage_model::Model;
use swage_runtime::{checksum, Body, HttpRequest};

const MODEL: &str = r#"{
    "operations": [
        {
            "id": "test.smoke#GetRecord",
            "input": "test.smoke#GetRecordInput"
        },
        {
            "id": "test.smoke#PutRecord",
            "input": "test.smoke#PutRecordInput",
            "traits": ["http_checksum_required"]
        }
    ],
    "structures": [
        { "id": "test.smoke#GetRecordInput" },
        {
            "id": "test.smoke#PutRecordInput",
            "members": [{ "name": "payload" }]
        }
    ]
}"#;

const STREAMING_MODEL: &str = r#"{
    "operations": [
        {
            "id": "test.smoke#UploadPart",
            "input": "test.smoke#UploadPartInput",
            "traits": ["http_checksum_required"]
        }
    ],
    "structures": [
        {
            "id": "test.smoke#UploadPartInput",
            "members": [{ "name": "body", "traits": ["streaming"] }]
        }
    ]
}"#;

#[test]
fn generates_the_checksum_operation_module() {
    let model = Model::from_json(MODEL).unwrap();
    let modules = ClientGenerator::new(&model).generate().unwrap();

    assert_eq!(modules.len(), 2);
    assert_eq!(modules[0].name, "get_record");
    assert_eq!(modules[1].name, "put_record");

    assert_eq!(
        modules[1].contents,
        r#"//! Client support for the `test.smoke#PutRecord` operation.

use swage_runtime::{Body, BuildError, HttpRequest, OperationRuntimeConfig};

/// Builds the HTTP request for `PutRecord` from its serialized payload.
pub fn build_http_request(payload: Body) -> Result<HttpRequest, BuildError> {
    let mut request = HttpRequest::post("/PutRecord", payload)?;
    request = request.augment(|mut req| {
        let body = req
            .body()
            .bytes()
            .ok_or_else(swage_runtime::BuildError::unbuffered_body)?;
        let checksum = swage_runtime::checksum::content_md5(body)?;
        req.headers_mut()
            .insert(swage_runtime::checksum::CONTENT_MD5, checksum);
        Ok(req)
    })?;
    Ok(request)
}

/// Runtime configuration applied to `PutRecord` invocations.
pub fn runtime_config() -> OperationRuntimeConfig {
    let mut config = OperationRuntimeConfig::new();
    config.register_interceptor(swage_runtime::checksum::HttpChecksumRequiredInterceptor::new());
    config
}
"#
    );
}

#[test]
fn operations_without_the_trait_stay_untouched() {
    let model = Model::from_json(MODEL).unwrap();
    let modules = ClientGenerator::new(&model).generate().unwrap();

    let get_record = &modules[0].contents;
    assert!(get_record.contains("let request = HttpRequest::post(\"/GetRecord\", payload)?;"));
    assert!(!get_record.contains("content-md5"));
    assert!(!get_record.contains("content_md5"));
    assert!(!get_record.contains("register_interceptor"));
}

#[test]
fn streaming_input_aborts_the_run() {
    let model = Model::from_json(STREAMING_MODEL).unwrap();
    let err = ClientGenerator::new(&model).generate().unwrap_err();

    assert!(err.to_string().contains("test.smoke#UploadPart"));
    let cause = err
        .chain()
        .find_map(|e| e.downcast_ref::<CodegenError>())
        .expect("typed codegen error in the chain");
    assert!(matches!(cause, CodegenError::ChecksumOnStreamingInput { operation }
        if operation.to_string() == "test.smoke#UploadPart"));
}

#[test]
fn write_to_emits_one_file_per_operation_and_a_mod_rs() {
    let model = Model::from_json(MODEL).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("operations");

    ClientGenerator::new(&model).write_to(&out).unwrap();

    let mod_rs = std::fs::read_to_string(out.join("mod.rs")).unwrap();
    assert_eq!(mod_rs, "pub mod get_record;\npub mod put_record;\n");

    let put_record = std::fs::read_to_string(out.join("put_record.rs")).unwrap();
    assert!(put_record.contains("pub fn build_http_request"));
    assert!(put_record.contains("HttpChecksumRequiredInterceptor::new()"));
    assert!(out.join("get_record.rs").exists());
}

#[test]
fn regeneration_is_byte_identical() {
    let model = Model::from_json(MODEL).unwrap();
    let first = ClientGenerator::new(&model).generate().unwrap();
    let second = ClientGenerator::new(&model).generate().unwrap();
    assert_eq!(first, second);
}

// The build step the emitted fragment performs, written against the same
// runtime API the fragment names. Keeping it in sync with the generated
// text is what `generates_the_checksum_operation_module` asserts.
fn build_http_request(payload: Body) -> Result<HttpRequest, swage_runtime::BuildError> {
    let mut request = HttpRequest::post("/PutRecord", payload)?;
    request = request.augment(|mut req| {
        let body = req
            .body()
            .bytes()
            .ok_or_else(swage_runtime::BuildError::unbuffered_body)?;
        let checksum = swage_runtime::checksum::content_md5(body)?;
        req.headers_mut()
            .insert(swage_runtime::checksum::CONTENT_MD5, checksum);
        Ok(req)
    })?;
    Ok(request)
}

#[test]
fn emitted_build_step_and_interceptor_agree_on_the_wire_contract() {
    // Build-time enforcement, as spliced into the request builder.
    let built = build_http_request(Body::empty()).unwrap();
    assert_eq!(built.headers()[&checksum::CONTENT_MD5], "1B2M2Y8AsgTpgAmY7PhCfg==");

    // Runtime enforcement through the registered interceptor.
    let mut config = swage_runtime::OperationRuntimeConfig::new();
    config.register_interceptor(checksum::HttpChecksumRequiredInterceptor::new());
    let mut request = HttpRequest::post("/PutRecord", Body::empty()).unwrap();
    config.apply_before_transmit(&mut request).unwrap();

    assert_eq!(request.headers()[&checksum::CONTENT_MD5], built.headers()[&checksum::CONTENT_MD5]);
}
