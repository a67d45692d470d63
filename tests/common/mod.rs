#![allow(dead_code)]

use std::fmt::Write;
use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the sentiment-report binary.
#[macro_export]
macro_rules! sentiment_report {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("sentiment-report"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a fixture holding every default artifact with valid content.
    pub fn with_artifacts() -> Self {
        let fixture = Self::new();
        fixture.create_file("Hasil_Preprocessing_Data.csv", PREPROCESSING_CSV);
        fixture.create_file("HasilLabeling.csv", &labeling_csv(120, 80));
        fixture.create_file("confusion_matrix.csv", CONFUSION_CSV);
        fixture.create_file("classification_report.txt", CLASSIFICATION_REPORT_CSV);
        fixture.create_file("average_scores.csv", AVERAGE_SCORES_CSV);
        fixture.create_binary_file("confusion_matrix.png", FAKE_PNG);
        fixture
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        self.create_binary_file(relative_path, content.as_bytes());
    }

    pub fn create_binary_file(&self, relative_path: &str, content: &[u8]) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a local config file.
    pub fn create_config(&self, content: &str) {
        self.create_file(".sentiment-report.toml", content);
    }

    /// A command running inside the fixture, isolated from the user's config and colors.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = sentiment_report!();
        cmd.current_dir(self.path())
            .env("XDG_CONFIG_HOME", self.path().join("xdg"))
            .env("HOME", self.path())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Labeling artifact with the given class counts, positives first.
pub fn labeling_csv(positive: usize, negative: usize) -> String {
    let mut content = String::from("stemming_data,sentiment\n");
    for i in 0..positive {
        let _ = writeln!(content, "dukung putus {i},positive");
    }
    for i in 0..negative {
        let _ = writeln!(content, "tolak sidang {i},negative");
    }
    content
}

pub const PREPROCESSING_CSV: &str = "\
full_text,cleasing,case_folding,tokenize,Filtering/stopwords removal,stemming_data,extra
Sidang MK!,Sidang MK,sidang mk,\"['sidang', 'mk']\",\"['sidang', 'mk']\",sidang mk,x
Putusan <final>,Putusan final,putusan final,\"['putusan', 'final']\",\"['putusan', 'final']\",putus final,y
";

pub const CONFUSION_CSV: &str = "\
Actual Negative,Predicted Negative
50,45
5,3
";

pub const CLASSIFICATION_REPORT_CSV: &str = "\
label,precision,recall,f1-score,support
negative,0.71,0.69,0.70,80
positive,0.78,0.80,0.79,120
";

pub const AVERAGE_SCORES_CSV: &str = "\
Metric,Score
Accuracy,0.72
Precision,0.75
Recall,0.77
F1-Score,0.74
";

pub const FAKE_PNG: &[u8] = b"\x89PNG\r\n\x1a\nnot-really-an-image";
