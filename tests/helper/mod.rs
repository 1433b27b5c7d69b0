//! Shared fixtures for end-to-end tests

use std::fs;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use mockito::{Matcher, Mock, ServerGuard};
use tempfile::TempDir;

use vcheck::config::Config;

/// Source tree with `github.com/sendgrid/<name>/version.go` per package
pub fn source_tree(packages: &[(&str, &str)]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let namespace = temp_dir.path().join("github.com/sendgrid");
    fs::create_dir_all(&namespace).unwrap();
    for (name, version) in packages {
        let dir = namespace.join(name);
        fs::create_dir(&dir).unwrap();
        fs::write(
            dir.join("version.go"),
            format!("package {name}\n\n// VERSION is the library version\nconst VERSION = \"{version}\"\n"),
        )
        .unwrap();
    }
    temp_dir
}

pub fn config_for(temp_dir: &TempDir, server: &ServerGuard) -> Config {
    Config {
        src_dir: format!("{}/", temp_dir.path().display()),
        token: "test-token".to_string(),
        owner: "sendgrid".to_string(),
        version_file: "version.go".to_string(),
        branch: "master".to_string(),
        api_url: server.url(),
        timeout: None,
        jobs: None,
    }
}

/// Mocks the contents API response for `package` declaring `version`
pub async fn mock_remote_version(server: &mut ServerGuard, package: &str, version: &str) -> Mock {
    let source = format!("package {package}\n\nconst VERSION = \"{version}\"\n");
    let body = serde_json::json!({
        "name": "version.go",
        "path": "version.go",
        "type": "file",
        "content": format!("{}\n", STANDARD.encode(source)),
        "encoding": "base64",
    });

    server
        .mock(
            "GET",
            format!("/repos/sendgrid/{package}/contents/version.go").as_str(),
        )
        .match_query(Matcher::UrlEncoded("ref".into(), "master".into()))
        .match_header("authorization", "token test-token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await
}
