use jsonschema::JSONSchema;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

mod common;
use common::{standard_routes, MockService, TestEnv};

fn load_schema(name: &str) -> Value {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let raw = fs::read_to_string(root.join("docs/contracts").join(name)).expect("read schema");
    serde_json::from_str(&raw).expect("parse schema")
}

fn validate(schema_name: &str, data: &Value) {
    let schema = load_schema(schema_name);
    let validator = JSONSchema::compile(&schema).expect("compile schema");
    let msgs: Vec<String> = match validator.validate(data) {
        Ok(()) => return,
        Err(errors) => errors.map(|e| e.to_string()).collect(),
    };
    panic!("schema validation failed: {}", msgs.join(" | "));
}

#[test]
fn contracts_check() {
    let env = TestEnv::new();
    let mut routes = standard_routes();
    routes.push((
        "/predict/9",
        404,
        serde_json::json!({"detail": "User not found"}),
    ));
    routes.push(("/users/random", 200, serde_json::json!({"user_id": 3})));
    let service = MockService::start(routes);

    let lookup = env.run_json(service.base_url(), &["lookup", "3"]);
    assert_eq!(lookup["ok"], true);
    validate("lookup.schema.json", &lookup["data"]);

    let random = env.run_json(service.base_url(), &["random"]);
    assert_eq!(random["ok"], true);
    validate("lookup.schema.json", &random["data"]);

    let failure = env.run_json_failure(service.base_url(), &["lookup", "9"]);
    validate("error.schema.json", &failure);
}
