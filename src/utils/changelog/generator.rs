// changelog draft generation from commit subjects

use super::config::ChangelogConfig;
use super::types::{ChangelogDraft, DraftSection, ParsedCommit};

/// issue-closing keywords removed from a trailing "(close #12)" reference
const ISSUE_CLOSERS: [&str; 9] = [
    "close ", "resolve ", "fix ", "closes ", "resolves ", "fixes ", "closed ", "resolved ",
    "fixed ",
];

const NO_CHANGES: &str = "_There are no documented changes for this release._";

/// drop issue-closing keywords from the last parenthesized issue reference
///
/// only applies when the rightmost `(` is not the first character and a `#`
/// follows it. the reference text is lower-cased.
pub fn strip_issue_closers(subject: &str) -> String {
    let (Some(open), Some(hash)) = (subject.rfind('('), subject.rfind('#')) else {
        return subject.to_string();
    };
    if open == 0 || hash <= open {
        return subject.to_string();
    }

    let mut issue = subject[open + 1..].to_lowercase();
    for closer in ISSUE_CLOSERS {
        issue = issue.replace(closer, "");
    }
    format!("{}({}", &subject[..open], issue)
}

/// match a commit subject against the configured prefixes
///
/// prefixes are tried in configured order; the first `prefix:` the subject
/// starts with is replaced by `-` to form the list line.
pub fn parse_commit(subject: &str, config: &ChangelogConfig) -> Option<ParsedCommit> {
    let commit = strip_issue_closers(subject);

    config.prefixes.iter().find_map(|mapping| {
        let key = format!("{}:", mapping.prefix);
        commit.starts_with(&key).then(|| {
            ParsedCommit::new(
                mapping.prefix.clone(),
                mapping.category.clone(),
                commit.replacen(&key, "-", 1),
            )
        })
    })
}

/// build a draft from commit subjects (newest first, as `git log` lists them)
///
/// entries are bucketed by category, so prefixes sharing a category share a
/// section. sections are emitted in `include` order, each category once.
pub fn build_draft<I, S>(subjects: I, config: &ChangelogConfig) -> ChangelogDraft
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut buckets: Vec<DraftSection> = Vec::new();
    let mut draft = ChangelogDraft::default();

    for subject in subjects {
        let subject = subject.as_ref();
        if subject.is_empty() {
            continue;
        }

        match parse_commit(subject, config) {
            Some(commit) => match buckets.iter().position(|b| b.category == commit.category) {
                Some(pos) => buckets[pos].entries.push(commit.line),
                None => buckets.push(DraftSection {
                    category: commit.category,
                    entries: vec![commit.line],
                }),
            },
            None => draft.skipped.push(subject.to_string()),
        }
    }

    for prefix in &config.include {
        let Some(category) = config.category_for(prefix) else {
            continue;
        };
        if draft.sections.iter().any(|s| s.category == category) {
            continue;
        }
        if let Some(pos) = buckets.iter().position(|b| b.category == category) {
            draft.sections.push(buckets.swap_remove(pos));
        }
    }

    draft
}

impl ChangelogDraft {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// render the draft as markdown
    pub fn render(&self) -> String {
        let mut out = String::new();

        if let Some(title) = &self.title {
            out.push_str(title);
            out.push('\n');
        }

        for section in &self.sections {
            out.push_str(&format!("\n### {}\n", section.category));
            for entry in &section.entries {
                out.push_str(entry);
                out.push('\n');
            }
        }

        if self.is_empty() {
            out.push_str(NO_CHANGES);
            out.push_str("\n\n");
        }

        out
    }
}
