use std::path::Path;

use serde::Serialize;
use sfscope::{render, SfFile, SfReport};

use crate::{app::GlobalOptions, output::print_output};

#[derive(Debug, Serialize)]
pub struct SectionEntry {
    pub index: usize,
    pub name: String,
    pub r#type: u32,
    pub size: u32,
}

#[derive(Debug, Serialize)]
pub struct ParseOutput {
    pub path: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nr_sections: Option<u8>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<SectionEntry>,
    #[serde(skip)]
    pub text: String,
}

impl ParseOutput {
    pub fn new(path: &Path, outcome: &sfscope::Result<SfReport>) -> Self {
        let text = render(outcome);
        let path = path.display().to_string();

        match outcome {
            Ok(report) => ParseOutput {
                path,
                success: true,
                error: None,
                version: Some(report.version()),
                nr_sections: Some(report.section_count()),
                sections: report
                    .sections
                    .iter()
                    .map(|s| SectionEntry {
                        index: s.index,
                        name: s.name.to_string(),
                        r#type: s.section_type.code(),
                        size: s.size,
                    })
                    .collect(),
                text,
            },
            Err(e) => ParseOutput {
                path,
                success: false,
                error: Some(e.to_string()),
                version: None,
                nr_sections: None,
                sections: Vec::new(),
                text,
            },
        }
    }
}

/// Parse one SF file and print the outcome.
///
/// A rejected file is a normal outcome of this command and is reported on stdout; it does
/// not make the command itself fail.
pub fn run(path: &Path, opts: &GlobalOptions) -> anyhow::Result<()> {
    let outcome = SfFile::from_path(path);
    if let Ok(report) = &outcome {
        log::debug!(
            "{}: {} sections accepted",
            path.display(),
            report.sections.len()
        );
    }

    let result = ParseOutput::new(path, &outcome);
    print_output(&result, opts, |r| print!("{}", r.text))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use sfscope::Error;
    use tempfile::NamedTempFile;

    use super::*;

    fn crafted() -> Vec<u8> {
        let mut data = vec![b's', 0x06, 0x00, 0x32, 0x00, 0x02];
        for (name, ty, size) in [(&b"one"[..], 60_u32, 11_u32), (&b"two"[..], 88, 22)] {
            let mut field = [0_u8; 20];
            field[..name.len()].copy_from_slice(name);
            data.extend_from_slice(&field);
            data.extend_from_slice(&ty.to_le_bytes());
            data.extend_from_slice(&0_u32.to_le_bytes());
            data.extend_from_slice(&size.to_le_bytes());
        }
        data
    }

    #[test]
    fn success_output() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(&crafted()).unwrap();
        temp.flush().unwrap();

        let outcome = SfFile::from_path(temp.path());
        let output = ParseOutput::new(temp.path(), &outcome);

        assert!(output.success);
        assert_eq!(output.version, Some(50));
        assert_eq!(output.nr_sections, Some(2));
        assert_eq!(output.sections[1].name, "two");
        assert_eq!(
            output.text,
            "SUCCESS\nversion=50\nnr_sections=2\nsection1: one 60 11\nsection2: two 88 22\n"
        );

        let json: serde_json::Value = serde_json::to_value(&output).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["sections"][0]["type"], 60);
        assert!(json.get("error").is_none());
        assert!(json.get("text").is_none());
    }

    #[test]
    fn error_output() {
        let outcome: sfscope::Result<SfReport> = Err(Error::BadSectionCount);
        let output = ParseOutput::new(Path::new("bad.sf"), &outcome);

        assert!(!output.success);
        assert_eq!(output.error.as_deref(), Some("wrong sect_nr"));
        assert!(output.sections.is_empty());
        assert_eq!(output.text, "ERROR\nwrong sect_nr\n");

        let json: serde_json::Value = serde_json::to_value(&output).unwrap();
        assert_eq!(json["path"], "bad.sf");
        assert!(json.get("version").is_none());
        assert!(json.get("sections").is_none());
    }

    #[test]
    fn missing_file_is_reported_not_raised() {
        let opts = GlobalOptions {
            json: false,
            verbose: false,
        };
        assert!(run(Path::new("/nonexistent/input.sf"), &opts).is_ok());
    }
}
