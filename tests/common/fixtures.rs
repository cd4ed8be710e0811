// Test fixtures for integration testing

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test repository fixture for creating synthetic source trees
#[allow(dead_code)] // Not every test binary uses every fixture
pub struct TestRepo {
    pub dir: TempDir,
    pub files: Vec<PathBuf>,
}

impl TestRepo {
    /// A small multi-language project
    #[allow(dead_code)]
    pub fn small() -> Self {
        Self::with_files(&[
            (
                "src/main.rs",
                "use crate::config::Config;\n\nfn main() {\n    let config = Config::load();\n    run(&config);\n}\n",
            ),
            (
                "src/config.rs",
                "pub struct Config {\n    pub port: u16,\n}\n\nimpl Config {\n    pub fn load() -> Config {\n        Config { port: 5974 }\n    }\n}\n",
            ),
            (
                "src/run.rs",
                "pub fn run(config: &Config) {\n    println!(\"{}\", config.port);\n}\n",
            ),
            ("scripts/tool.py", "def helper(x):\n    return x + 1\n\nprint(helper(2))\n"),
            ("README.md", "# Test Project\n\nRun it with `cargo run`.\n"),
        ])
    }

    /// A different project with no files in common with [`TestRepo::small`]
    #[allow(dead_code)]
    pub fn other() -> Self {
        Self::with_files(&[
            ("lib/app.js", "function start() {\n  return 1;\n}\n"),
            ("package.json", "{\"name\": \"other\"}\n"),
        ])
    }

    /// Create with custom files
    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let dir = TempDir::new().unwrap();
        let mut paths = Vec::new();

        for (path, content) in files {
            let full_path = dir.path().join(path);
            std::fs::create_dir_all(full_path.parent().unwrap()).unwrap();
            std::fs::write(&full_path, content).unwrap();
            paths.push(full_path);
        }

        Self { dir, files: paths }
    }

    /// Get path to the repository
    #[allow(dead_code)]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Repository path as the string a caller would pass to `init`
    #[allow(dead_code)]
    pub fn path_str(&self) -> &str {
        self.dir.path().to_str().unwrap()
    }
}
