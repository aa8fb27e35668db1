use std::io::{self, Write};

use anyhow::Error;

use crate::util::text::wrap;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    let msg = err.to_string();
    for line in wrap(&msg, 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    let mut source = err.source();
    while let Some(cause) = source {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 57) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
        source = cause.source();
    }

    if let Some(hints) = HintCollector::collect(err) {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

struct HintCollector {
    hints: Vec<String>,
    has_typed_hints: bool,
}

impl HintCollector {
    fn new() -> Self {
        Self {
            hints: Vec::new(),
            has_typed_hints: false,
        }
    }

    fn collect(err: &Error) -> Option<Vec<String>> {
        let mut collector = Self::new();

        collector.collect_store_hints(err);
        collector.collect_query_hints(err);
        collector.collect_config_hints(err);
        collector.collect_generate_hints(err);

        if !collector.has_typed_hints {
            collector.collect_fallback_hints(err);
        }

        if collector.hints.is_empty() {
            None
        } else {
            Some(collector.hints)
        }
    }

    fn add(&mut self, hint: impl Into<String>) {
        self.hints.push(hint.into());
    }

    fn mark_typed(&mut self) {
        self.has_typed_hints = true;
    }

    fn collect_store_hints(&mut self, err: &Error) {
        use periodically::store::Error as StoreError;

        let Some(store_err) = err.downcast_ref::<StoreError>() else {
            return;
        };

        self.mark_typed();

        match store_err {
            StoreError::NotFound { .. } => {
                self.add("The database directory or file does not exist");
                self.add("Point --root at the directory holding elements/ and reactions/");
                self.add("Directory names can be changed in the [layout] config section");
            }

            StoreError::Malformed { .. } => {
                self.add("A record file is not valid JSON or lacks a required field");
                self.add("Run `ptdb validate` to list every problem at once");
            }

            StoreError::Io { source, .. } => {
                self.collect_std_io_hints(source);
            }

            StoreError::Serialize(_) => {
                self.add("A record could not be serialized back to JSON");
                self.add("This may indicate a bug, please report if reproducible");
            }
        }
    }

    fn collect_query_hints(&mut self, err: &Error) {
        use periodically::query::{Error as QueryError, FilterProperty};

        let Some(query_err) = err.downcast_ref::<QueryError>() else {
            return;
        };

        self.mark_typed();

        match query_err {
            QueryError::UnknownProperty { .. } => {
                self.add(format!("Filterable properties: {}", FilterProperty::available()));
                self.add("Hyphens may be used instead of underscores");
            }

            QueryError::InvalidThreshold { .. } | QueryError::InvalidFilter(_) => {
                self.add("Filters take the form PROPERTY=VALUE, e.g. melting_point=3000");
                self.add("VALUE must be a number in the property's stored unit");
            }

            QueryError::UnresolvedIdentifier(_) => {
                self.add("Identify elements by atomic number (26), symbol (Fe) or name (iron)");
                self.add("Symbols and names are matched case-insensitively");
            }

            QueryError::InvalidBool(_) => {
                self.add("Use true/false, yes/no or 1/0");
            }
        }
    }

    fn collect_config_hints(&mut self, err: &Error) {
        use periodically::config::Error as ConfigError;

        let Some(config_err) = err.downcast_ref::<ConfigError>() else {
            return;
        };

        self.mark_typed();

        match config_err {
            ConfigError::Io { source, .. } => self.collect_std_io_hints(source),
            ConfigError::Parse(_) => {
                self.add("The configuration file has invalid TOML syntax or a mistyped key");
                self.add("Recognized sections: [layout], [report], [display]");
            }
        }
    }

    fn collect_generate_hints(&mut self, err: &Error) {
        use periodically::GenerateError;

        let Some(generate_err) = err.downcast_ref::<GenerateError>() else {
            return;
        };

        self.mark_typed();

        let issues = generate_err.issues();
        self.add("Nothing was written; fix the reaction records listed above");
        if issues.iter().any(|i| i.kind() == "cross-reference") {
            self.add("Every symbol in elements_involved needs an element record");
        }
        if issues.iter().any(|i| i.kind() == "id-format") {
            self.add("Reaction ids follow Symbol-category-NNN, e.g. Fe-industrial-001");
        }
        if issues.iter().any(|i| i.kind() == "duplicate") {
            self.add("Reaction ids must be unique across all category files");
        }
    }

    fn collect_std_io_hints(&mut self, source: &std::io::Error) {
        use std::io::ErrorKind;

        match source.kind() {
            ErrorKind::NotFound => {
                self.add("File or directory not found");
                self.add("Check the path spelling and ensure the file exists");
            }

            ErrorKind::PermissionDenied => {
                self.add("Permission denied accessing the file");
                self.add("Check file permissions with `ls -la`");
            }

            ErrorKind::InvalidData => {
                self.add("File contains invalid data (not UTF-8?)");
                self.add("Verify the file is not truncated or corrupted");
            }

            ErrorKind::WriteZero | ErrorKind::StorageFull => {
                self.add("Failed to write data (disk full?)");
                self.add("Check available disk space");
            }

            ErrorKind::BrokenPipe => {
                self.add("Output consumer terminated early");
                self.add("This may occur when piping to commands like `head`");
            }

            _ => {
                self.add("I/O operation failed");
                self.add("Check file path, permissions, and disk space");
            }
        }
    }

    fn collect_fallback_hints(&mut self, err: &Error) {
        let msg = error_chain_text(err);

        if msg.contains("no such file") || msg.contains("not found") {
            self.add("Check that the path is correct");
            self.add("Verify the file exists and is readable");
            return;
        }

        if msg.contains("permission denied") {
            self.add("Check file permissions with `ls -la`");
            self.add("Ensure you have the required access rights");
            return;
        }

        if msg.contains("validation") {
            self.add("Fix the issues listed above and re-run `ptdb validate`");
            self.add("Stale derived files are refreshed by `ptdb index` and `ptdb link`");
        }
    }
}

fn error_chain_text(err: &Error) -> String {
    let mut text = String::new();

    text.push_str(&err.to_string());

    let mut source = err.source();
    while let Some(cause) = source {
        text.push('\n');
        text.push_str(&cause.to_string());
        source = cause.source();
    }

    text.to_lowercase()
}
