#![allow(unused_crate_dependencies)]

use std::io::Write;

use schema_bridge_datamodel::DataModel;
use schema_bridge_projection::{project, GeneratorSettings};
use schema_bridge_runtime::guard;

const DATAMODEL: &str = r#"{
  "enums": [{ "name": "Role", "values": [{ "name": "ADMIN" }] }],
  "models": [{ "name": "User", "fields": [{ "name": "id", "kind": "scalar", "type": "String", "isId": true, "isRequired": true }] }]
}"#;

// One test per binary: the guard is process-wide.
#[test]
fn artifact_is_read_from_the_environment() {
    let datamodel = DataModel::from_json(DATAMODEL).unwrap();
    let schema = project(&datamodel, &GeneratorSettings::default()).unwrap();

    let mut artifact = tempfile::NamedTempFile::new().unwrap();
    artifact.write_all(schema.to_json().unwrap().as_bytes()).unwrap();

    std::env::set_var(guard::ARTIFACT_ENV_VAR, artifact.path());

    let global = guard::global();

    assert!(global.is_generated());
    assert_eq!(global.schema().unwrap(), &schema);
    assert_eq!(guard::model("User").descriptor().unwrap().name, "User");
    assert_eq!(guard::r#enum("Role").descriptor().unwrap().members[0].name, "ADMIN");
}
