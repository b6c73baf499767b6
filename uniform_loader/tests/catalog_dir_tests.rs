use std::fs;
use tempfile::TempDir;
use uniform_loader::{CatalogDir, CatalogError};
use uniform_types::FunctionFamily;

fn write_catalog(dir: &TempDir, family: FunctionFamily, content: &str) {
    let catalogs = CatalogDir::new(dir.path());
    fs::write(catalogs.path_for(family), content).unwrap();
}

fn full_catalog_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_catalog(
        &dir,
        FunctionFamily::SingleSetter,
        "f32: \"gl.uniform1f(location, v);\"\nvec2<f32>: \"gl.uniform2f(location, v[0], v[1]);\"\n",
    );
    write_catalog(
        &dir,
        FunctionFamily::ArraySetter,
        "f32: \"gl.uniform1fv(location, v);\"\n",
    );
    write_catalog(
        &dir,
        FunctionFamily::UniformParser,
        r#"
- type: mat3x3<f32>
  uniform: "gl.uniformMatrix3fv(ud[name].location, false, uv[name].toArray(true));"
  ubo: "data[offset] = v[0];"
- type: vec4<f32>
  uniform: "gl.uniform4f(ud[name].location, v.x, v.y, v.z, v.w);"
  uboWgsl: "data[offset] = v.x;"
"#,
    );
    write_catalog(&dir, FunctionFamily::UboSingleWgsl, "f32: \"data[offset] = v;\"\n");
    write_catalog(&dir, FunctionFamily::UboSingleStd40, "f32: \"data[offset] = v;\"\n");
    dir
}

#[test]
fn loads_uniform_catalogs_in_document_order() {
    let dir = full_catalog_dir();
    let catalogs = CatalogDir::new(dir.path()).load_uniform_catalogs().unwrap();

    let keys: Vec<&str> = catalogs.single_setters.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["f32", "vec2<f32>"]);
    assert_eq!(catalogs.array_setters.len(), 1);
    assert_eq!(catalogs.parsers.len(), 2);
    assert_eq!(catalogs.parsers[0].uniform_type, "mat3x3<f32>");
    assert_eq!(catalogs.parsers[1].uniform_type, "vec4<f32>");
}

#[test]
fn loads_ubo_catalogs() {
    let dir = full_catalog_dir();
    let catalogs = CatalogDir::new(dir.path()).load_ubo_catalogs().unwrap();

    assert_eq!(catalogs.parsers.len(), 2);
    assert!(catalogs.parsers[1].ubo_wgsl.is_some());
    assert!(catalogs.parsers[1].ubo.is_none());
    assert_eq!(catalogs.wgsl_setters["f32"].as_str(), "data[offset] = v;");
    assert_eq!(catalogs.std40_setters.len(), 1);
}

#[test]
fn blank_catalog_is_empty() {
    let dir = full_catalog_dir();
    write_catalog(&dir, FunctionFamily::ArraySetter, "\n");

    let catalogs = CatalogDir::new(dir.path()).load_uniform_catalogs().unwrap();
    assert!(catalogs.array_setters.is_empty());
}

#[test]
fn missing_catalog_is_an_io_error() {
    let dir = full_catalog_dir();
    let catalogs = CatalogDir::new(dir.path());
    fs::remove_file(catalogs.path_for(FunctionFamily::UboSingleStd40)).unwrap();

    /* The uniform pass does not need the missing file */
    assert!(catalogs.load_uniform_catalogs().is_ok());

    let err = catalogs.load_ubo_catalogs().unwrap_err();
    assert!(matches!(err, CatalogError::Io { .. }));
    assert_eq!(err.path(), &catalogs.path_for(FunctionFamily::UboSingleStd40));
}

#[test]
fn wrong_shape_is_a_shape_error() {
    let dir = full_catalog_dir();
    /* A sequence where a mapping is expected */
    write_catalog(&dir, FunctionFamily::SingleSetter, "- a\n- b\n");

    let err = CatalogDir::new(dir.path())
        .load_uniform_catalogs()
        .unwrap_err();
    assert!(matches!(err, CatalogError::Shape { .. }));
    assert!(err.to_string().contains("single_setters.yaml"));
}
