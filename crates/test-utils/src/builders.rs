#![allow(dead_code)]

use std::path::Path;

use rhobatch::config::{ConfigFile, RawConfigFile, RunConfig};

/// Builder for CSV tables in the layout the runner expects.
pub struct CsvBuilder {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl CsvBuilder {
    /// Table with the default `ModulusName,Modulus` header.
    pub fn new() -> Self {
        Self::with_header(&["ModulusName", "Modulus"])
    }

    pub fn with_header(columns: &[&str]) -> Self {
        Self {
            header: columns.iter().map(|c| c.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn row(mut self, fields: &[&str]) -> Self {
        self.rows.push(fields.iter().map(|f| f.to_string()).collect());
        self
    }

    /// Append `count` complete rows named `Filler<i>`; enough of them fill the
    /// positional skip block.
    pub fn filler_rows(mut self, count: usize) -> Self {
        for i in 0..count {
            let mut fields = vec![String::new(); self.header.len()];
            if let Some(first) = fields.get_mut(0) {
                *first = format!("Filler{i}");
            }
            if let Some(second) = fields.get_mut(1) {
                *second = format!("{}", 1000 + i);
            }
            self.rows.push(fields);
        }
        self
    }

    pub fn build(self) -> String {
        let mut out = self.header.join(",");
        out.push('\n');
        for row in self.rows {
            out.push_str(&row.join(","));
            out.push('\n');
        }
        out
    }
}

impl Default for CsvBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a validated `RunConfig`.
pub struct RunConfigBuilder {
    config: RawConfigFile,
}

impl RunConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile::default(),
        }
    }

    pub fn program(mut self, program: impl AsRef<Path>) -> Self {
        self.config.run.program = program.as_ref().to_path_buf();
        self
    }

    pub fn input(mut self, input: impl AsRef<Path>) -> Self {
        self.config.run.input = input.as_ref().to_path_buf();
        self
    }

    pub fn skip_rows(mut self, skip_rows: usize) -> Self {
        self.config.run.skip_rows = skip_rows;
        self
    }

    pub fn columns(mut self, name_column: &str, value_column: &str) -> Self {
        self.config.run.name_column = name_column.to_string();
        self.config.run.value_column = value_column.to_string();
        self
    }

    pub fn build(self) -> RunConfig {
        ConfigFile::try_from(self.config)
            .expect("Failed to build valid config from builder")
            .into_run()
    }
}

impl Default for RunConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
