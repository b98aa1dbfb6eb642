// command documentation (markdown pages, rust help and manual constants)
// generated from one toml table per command

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const INDENT: &str = "    ";

/// column where quick-help descriptions start
const HELP_COLUMN: usize = 26;

const GENERATED_NOTE: &str = "// Automatically generated by relkit mansync.\n";

/// documentation for one command, as written in the commands file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandDoc {
    pub name: String,
    pub summary: String,
    pub synopsis: String,
    pub description: String,
    pub examples: String,
    pub alias: Option<String>,
    /// positional arguments in file order, with their descriptions
    pub args: Vec<(String, String)>,
    /// options in file order, with their descriptions
    pub options: Vec<(String, String)>,
}

#[derive(Deserialize)]
struct RawCommandDoc {
    name: Option<String>,
    summary: Option<String>,
    synopsis: Option<String>,
    description: Option<String>,
    examples: Option<String>,
    alias: Option<String>,
    #[serde(default)]
    args: toml::Table,
    #[serde(default)]
    options: toml::Table,
}

impl RawCommandDoc {
    /// the program entry only needs what its quick help shows
    fn into_doc(self, command: &str, is_program: bool) -> Result<CommandDoc> {
        let field = |name: &str, value: Option<String>, required: bool| match value {
            Some(value) => Ok(value),
            None if !required => Ok(String::new()),
            None => Err(Error::CommandDocError {
                command: command.to_string(),
                reason: format!("missing field '{}'", name),
            }),
        };

        Ok(CommandDoc {
            name: field("name", self.name, !is_program)?,
            summary: field("summary", self.summary, true)?,
            synopsis: field("synopsis", self.synopsis, true)?,
            description: field("description", self.description, !is_program)?,
            examples: field("examples", self.examples, !is_program)?,
            alias: self.alias,
            args: described(command, self.args)?,
            options: described(command, self.options)?,
        })
    }
}

fn described(command: &str, table: toml::Table) -> Result<Vec<(String, String)>> {
    table
        .into_iter()
        .map(|(key, value)| match value {
            toml::Value::String(text) => Ok((key, text)),
            _ => Err(Error::CommandDocError {
                command: command.to_string(),
                reason: format!("description of '{}' is not a string", key),
            }),
        })
        .collect()
}

/// every command of a program, in the order the commands file lists them
#[derive(Debug, Clone)]
pub struct CommandBook {
    pub program: String,
    pub root: CommandDoc,
    pub commands: Vec<(String, CommandDoc)>,
}

impl CommandBook {
    /// build from a parsed commands file; the table named `program` is the root
    pub fn from_table(table: toml::Table, program: &str) -> Result<Self> {
        let mut root = None;
        let mut commands = Vec::new();

        for (command, value) in table {
            let raw: RawCommandDoc = value.try_into().map_err(|e: toml::de::Error| {
                Error::CommandDocError {
                    command: command.clone(),
                    reason: e.to_string(),
                }
            })?;

            if command == program {
                root = Some(raw.into_doc(&command, true)?);
            } else {
                let doc = raw.into_doc(&command, false)?;
                commands.push((command, doc));
            }
        }

        let root = root.ok_or_else(|| Error::CommandDocError {
            command: program.to_string(),
            reason: "no table for the program itself".to_string(),
        })?;

        Ok(Self {
            program: program.to_string(),
            root,
            commands,
        })
    }

    pub fn load<P: AsRef<Path>>(path: P, program: &str) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| Error::FileReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let table: toml::Table = toml::from_str(&content).map_err(|e| Error::TomlParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::from_table(table, program)
    }
}

/// upper-case the first character and lower-case the rest
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// lower-case the first character unless the word looks like an acronym
fn decapitalize(text: &str) -> String {
    let mut chars = text.chars();
    let (Some(first), Some(second)) = (chars.next(), chars.next()) else {
        return text.to_string();
    };

    if second.is_lowercase() || second == ' ' {
        first
            .to_lowercase()
            .chain(text[first.len_utf8()..].chars())
            .collect()
    } else {
        text.to_string()
    }
}

/// one quick-help row; `wrap` moves long fields onto their own line
fn push_row(out: &mut String, field: &str, text: &str, wrap: bool) {
    let width = field.chars().count();
    out.push_str(field);
    if wrap && width + 2 >= HELP_COLUMN {
        out.push('\n');
        out.push_str(&" ".repeat(HELP_COLUMN));
    } else {
        out.push_str(&" ".repeat(HELP_COLUMN.saturating_sub(width)));
    }
    out.push_str(&decapitalize(text));
    out.push('\n');
}

fn push_rows(out: &mut String, title: &str, rows: &[(String, String)]) {
    if rows.is_empty() {
        return;
    }
    out.push_str(&format!("\n{}:\n", title));
    for (field, text) in rows {
        push_row(out, &format!("{}{}", INDENT, field), text, true);
    }
}

/// wrap text in a raw string literal with enough `#`s to hold it
fn raw_literal(text: &str) -> String {
    let mut hashes = 1;
    while text.contains(&format!("\"{}", "#".repeat(hashes))) {
        hashes += 1;
    }
    let fence = "#".repeat(hashes);
    format!("r{}\"{}\"{}", fence, text, fence)
}

/// module name for a command (`-` is not valid in rust identifiers)
fn module_name(command: &str) -> String {
    command.replace('-', "_")
}

/// quick help for the program: usage, every command and the global options
pub fn render_program_help(book: &CommandBook) -> String {
    let root = &book.root;
    let mut out = format!(
        "{}.\n\nUsage:\n{}{}\n",
        capitalize(&root.summary),
        INDENT,
        root.synopsis
    );

    if !book.commands.is_empty() {
        out.push_str("\nCommands:\n");
        for (command, doc) in &book.commands {
            let field = match &doc.alias {
                Some(alias) => format!("{}{}, {}", INDENT, command, alias),
                None => format!("{}{}", INDENT, command),
            };
            push_row(&mut out, &field, &doc.summary, false);
        }
    }
    push_rows(&mut out, "Options", &root.options);

    out
}

/// quick help for a single command: usage, arguments and options
pub fn render_command_help(doc: &CommandDoc) -> String {
    let mut out = format!(
        "{}.\n\nUsage:\n{}{}\n",
        capitalize(&doc.summary),
        INDENT,
        doc.synopsis
    );
    push_rows(&mut out, "Arguments", &doc.args);
    push_rows(&mut out, "Options", &doc.options);
    out
}

/// markdown manual page for a command
pub fn render_markdown(program: &str, command: &str, doc: &CommandDoc) -> String {
    let mut out = format!("# __{} {}__\n\n", program, command);
    out.push_str(&format!("## __NAME__\n\n{} - {}\n\n", doc.name, doc.summary));
    out.push_str(&format!("## __SYNOPSIS__\n\n```\n{}\n```\n\n", doc.synopsis));
    out.push_str(&format!(
        "## __DESCRIPTION__\n\n{}\n\n",
        doc.description.trim()
    ));

    if !doc.args.is_empty() || !doc.options.is_empty() {
        out.push_str("## __OPTIONS__\n\n");
        for (field, text) in doc.args.iter().chain(&doc.options) {
            out.push_str(&format!("`{}`  \n      {}\n\n", field, capitalize(text)));
        }
    }

    out.push_str(&format!(
        "## __EXAMPLES__\n\n```\n{}\n```\n",
        doc.examples.trim()
    ));
    out
}

/// text of the `MANUAL` constant for a command
pub fn render_manual(doc: &CommandDoc) -> String {
    let mut out = format!("NAME\n{}{} - {}\n\n", INDENT, doc.name, doc.summary);
    out.push_str(&format!("SYNOPSIS\n{}{}\n\n", INDENT, doc.synopsis));

    out.push_str("DESCRIPTION\n");
    for line in doc.description.trim().lines() {
        // backticks read poorly in a terminal
        push_indented(&mut out, &line.replace('`', "'"));
    }
    out.push('\n');

    if !doc.args.is_empty() || !doc.options.is_empty() {
        out.push_str("OPTIONS\n");
        for (field, text) in doc.args.iter().chain(&doc.options) {
            out.push_str(&format!(
                "{}{}\n{}{}{}\n\n",
                INDENT,
                field,
                INDENT,
                INDENT,
                capitalize(text)
            ));
        }
    }

    out.push_str("EXAMPLES\n");
    for line in doc.examples.trim().lines() {
        push_indented(&mut out, line);
    }
    out
}

fn push_indented(out: &mut String, line: &str) {
    if !line.is_empty() {
        out.push_str(INDENT);
        out.push_str(line);
    }
    out.push('\n');
}

/// rust source declaring `pub const <name>: &str` holding `text`
fn render_constant(header: &str, name: &str, text: &str) -> String {
    format!(
        "{}{}pub const {}: &str = {};\n",
        header,
        GENERATED_NOTE,
        name,
        raw_literal(text)
    )
}

/// files written by one [`ManualWriter::run`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MansyncReport {
    pub written: Vec<PathBuf>,
    /// pages a complete run produces: three per command plus the program help
    pub expected: usize,
}

/// writes every page of a [`CommandBook`] into the configured directories
pub struct ManualWriter {
    pub markdown_dir: PathBuf,
    pub manual_dir: PathBuf,
    pub help_dir: PathBuf,
    /// license header put above the generated rust files
    pub header: String,
}

impl ManualWriter {
    pub fn new(
        markdown_dir: impl Into<PathBuf>,
        manual_dir: impl Into<PathBuf>,
        help_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            markdown_dir: markdown_dir.into(),
            manual_dir: manual_dir.into(),
            help_dir: help_dir.into(),
            header: String::new(),
        }
    }

    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }

    pub fn run(&self, book: &CommandBook) -> Result<MansyncReport> {
        let mut report = MansyncReport {
            written: Vec::new(),
            expected: 3 * book.commands.len() + 1,
        };

        for dir in [&self.markdown_dir, &self.manual_dir, &self.help_dir] {
            fs::create_dir_all(dir).map_err(|e| Error::FileWriteError {
                path: dir.clone(),
                source: e,
            })?;
        }

        for (command, doc) in &book.commands {
            let module = module_name(command);

            let path = self.markdown_dir.join(format!("{}.md", command));
            write_page(&path, &render_markdown(&book.program, command, doc))?;
            report.written.push(path);

            let path = self.manual_dir.join(format!("{}.rs", module));
            write_page(
                &path,
                &render_constant(&self.header, "MANUAL", &render_manual(doc)),
            )?;
            declare_module(&self.manual_dir, &module)?;
            report.written.push(path);

            let help = format!(
                "{}\n\nUse '{} help {}' to read more about the command.",
                render_command_help(doc).trim(),
                book.program,
                command
            );
            let path = self.help_dir.join(format!("{}.rs", module));
            write_page(&path, &render_constant(&self.header, "HELP", &help))?;
            declare_module(&self.help_dir, &module)?;
            report.written.push(path);
        }

        let help = format!(
            "{}\n\nUse '{} help <command>' for more information about a command.",
            render_program_help(book).trim(),
            book.program
        );
        let module = module_name(&book.program);
        let path = self.help_dir.join(format!("{}.rs", module));
        write_page(&path, &render_constant(&self.header, "HELP", &help))?;
        declare_module(&self.help_dir, &module)?;
        report.written.push(path);

        Ok(report)
    }
}

fn write_page(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| Error::FileWriteError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// make sure `mod.rs` in `dir` declares `pub mod <module>;`
///
/// returns whether the declaration had to be added
fn declare_module(dir: &Path, module: &str) -> Result<bool> {
    let path = dir.join("mod.rs");
    let declaration = format!("pub mod {};", module);

    let mut content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(Error::FileReadError { path, source: e }),
    };

    if content.lines().any(|line| line.trim() == declaration) {
        return Ok(false);
    }

    if !content.is_empty() && !content.ends_with('\n') {
        content.push('\n');
    }
    content.push_str(&declaration);
    content.push('\n');

    write_page(&path, &content)?;
    Ok(true)
}
