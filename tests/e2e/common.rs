//! Shared fixtures for the e2e tests

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

pub const EXPORT: &str = r#"[{"id":"0","title":"","children":[
    {"id":"1","parentId":"0","title":"Bookmarks bar","children":[
        {"id":"10","parentId":"1","title":"Rust","children":[
            {"id":"100","parentId":"10","title":"The Book","url":"https://doc.rust-lang.org/book/"}
        ]},
        {"id":"11","parentId":"1","title":"Docs","url":"https://docs.rs/"}
    ]},
    {"id":"2","parentId":"0","title":"Other bookmarks","children":[
        {"id":"20","parentId":"2","title":"crates.io","url":"https://crates.io/"}
    ]}
]}]"#;

/// Isolated home for one pmb run: config dir, config file and bookmarks
pub struct Fixture {
    pub dir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("bookmark-nav")).unwrap();
        fs::write(dir.path().join("bookmarks.json"), EXPORT).unwrap();
        fs::write(dir.path().join("config.toml"), "").unwrap();
        Self { dir }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, content).unwrap();
        path
    }

    /// pmb with bookmarks and config pointing into the fixture
    pub fn pmb(&self) -> Command {
        let mut cmd = pmb();
        cmd.env("XDG_CONFIG_HOME", self.dir.path())
            .env("HOME", self.dir.path())
            .arg("--bookmarks")
            .arg(self.path("bookmarks.json"))
            .arg("--config")
            .arg(self.path("config.toml"));
        cmd
    }
}

pub fn pmb() -> Command {
    Command::cargo_bin("pmb").unwrap()
}
