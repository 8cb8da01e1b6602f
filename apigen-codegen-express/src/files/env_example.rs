use std::path::{Path, PathBuf};

use apigen_core::{FileRules, GeneratedFile};

/// `.env.example`: the variables the generated server reads.
pub struct EnvExample;

impl EnvExample {
    pub const VARIABLES: [(&'static str, &'static str); 3] = [
        ("PORT", "5000"),
        ("MONGO_URI", "mongodb://localhost:27017/generated-api"),
        ("JWT_SECRET", "change-me"),
    ];
}

impl GeneratedFile for EnvExample {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(".env.example")
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        Self::VARIABLES
            .iter()
            .map(|(key, value)| format!("{key}={value}\n"))
            .collect()
    }
}
