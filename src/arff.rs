//! Reader for attribute-relation (ARFF) dataset files.
//!
//! Only the subset of the format the experiment datasets use is
//! recognized: an `@relation` declaration, `@attribute` declarations
//! with numeric, string, or nominal types, and a comma-separated
//! `@data` section. Header keywords are case-insensitive; `%` comment
//! lines and blank lines are skipped.

use crate::error::Error;
use csv::ReaderBuilder;
use std::fs;
use std::path::Path;

/// The declared type of an attribute column.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeType {
    /// `numeric`, `real`, or `integer`.
    Numeric,
    /// Free-form `string`.
    String,
    /// An enumeration of allowed values, e.g. `{Yes,No}`.
    Nominal(Vec<String>),
}

/// One column declaration from the file header.
#[derive(Debug, Clone)]
pub struct Attribute {
    pub name: String,
    pub kind: AttributeType,
}

/// A parsed attribute-relation file: header plus row-major data.
///
/// Values are kept as raw strings; numeric interpretation happens when
/// a feature matrix is built from the file.
#[derive(Debug)]
pub struct ArffFile {
    pub relation: String,
    pub attributes: Vec<Attribute>,
    pub rows: Vec<Vec<String>>,
}

impl ArffFile {
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn num_attributes(&self) -> usize {
        self.attributes.len()
    }

    /// Position of the attribute with the given name, if declared.
    pub fn attribute_index(&self, name: &str) -> Option<usize> {
        self.attributes.iter().position(|a| a.name == name)
    }

    /// All values of one column, in row order.
    pub fn column(&self, name: &str) -> Result<Vec<&str>, Error> {
        let index = self
            .attribute_index(name)
            .ok_or_else(|| Error::MissingColumn(name.to_string()))?;
        Ok(self.rows.iter().map(|row| row[index].as_str()).collect())
    }
}

/// Reads and parses the attribute-relation file at `path`.
pub fn read(path: &Path) -> Result<ArffFile, Error> {
    parse(&fs::read_to_string(path)?)
}

/// Parses attribute-relation text into an [`ArffFile`].
pub fn parse(text: &str) -> Result<ArffFile, Error> {
    let mut relation = None;
    let mut attributes = Vec::new();
    let mut data = String::new();
    let mut in_data = false;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('%') {
            continue;
        }
        if in_data {
            data.push_str(line);
            data.push('\n');
            continue;
        }
        let keyword = line.to_ascii_lowercase();
        if keyword.starts_with("@relation") {
            relation = Some(unquote(line["@relation".len()..].trim()).to_string());
        } else if keyword.starts_with("@attribute") {
            attributes.push(parse_attribute(line["@attribute".len()..].trim())?);
        } else if keyword.starts_with("@data") {
            in_data = true;
        } else {
            return Err(Error::Parse(format!("unexpected header line: {}", line)));
        }
    }

    let relation = relation.ok_or_else(|| Error::Parse("missing @relation declaration".to_string()))?;
    if attributes.is_empty() {
        return Err(Error::Parse("no @attribute declarations".to_string()));
    }
    if !in_data {
        return Err(Error::Parse("missing @data section".to_string()));
    }

    let mut rows = Vec::new();
    for record in ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(data.as_bytes())
        .records()
    {
        let record = record?;
        if record.len() != attributes.len() {
            return Err(Error::Parse(format!(
                "row {} has {} values, expected {}",
                rows.len() + 1,
                record.len(),
                attributes.len()
            )));
        }
        rows.push(record.iter().map(|value| unquote(value).to_string()).collect());
    }

    Ok(ArffFile {
        relation,
        attributes,
        rows,
    })
}

/// Parses one `@attribute` declaration: a name followed by a type.
fn parse_attribute(declaration: &str) -> Result<Attribute, Error> {
    let (name, kind) = declaration
        .split_once(char::is_whitespace)
        .ok_or_else(|| Error::Parse(format!("malformed attribute declaration: {}", declaration)))?;
    let name = unquote(name).to_string();
    let kind = kind.trim();

    let kind = if let Some(domain) = kind.strip_prefix('{') {
        let domain = domain
            .strip_suffix('}')
            .ok_or_else(|| Error::Parse(format!("unterminated nominal domain for {}", name)))?;
        AttributeType::Nominal(
            domain
                .split(',')
                .map(|value| unquote(value.trim()).to_string())
                .collect(),
        )
    } else {
        match kind.to_ascii_lowercase().as_str() {
            "numeric" | "real" | "integer" => AttributeType::Numeric,
            "string" => AttributeType::String,
            other => return Err(Error::Parse(format!("unsupported attribute type: {}", other))),
        }
    };

    Ok(Attribute { name, kind })
}

fn unquote(value: &str) -> &str {
    value
        .trim_matches('\'')
        .trim_matches('"')
}
