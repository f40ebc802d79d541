use chrono::NaiveDate;
use monorel_core::ChangelogEntry;

pub const CHANGELOG_TITLE: &str = "# Changelog";

#[must_use]
pub fn format_version_header(version: &str, date: NaiveDate) -> String {
    format!("## {version} - {}", date.format("%Y-%m-%d"))
}

/// Header line followed by one bullet line per entry, without a trailing newline.
#[must_use]
pub fn format_release_block(version: &str, date: NaiveDate, entries: &[ChangelogEntry]) -> String {
    let mut output = format_version_header(version, date);
    for entry in entries {
        output.push('\n');
        output.push_str(&entry.render());
    }
    output
}

/// Places `block` into `existing` changelog content.
///
/// Blank content becomes a fresh document with a title. When the first
/// non-blank line is a top-level heading the block goes right below it;
/// anything else gets the block prepended. Inserted lines use the line ending
/// of the existing content.
#[must_use]
pub fn merge_release(existing: &str, block: &str) -> String {
    let newline = line_ending(existing);
    let block = block.lines().collect::<Vec<_>>().join(newline);

    if existing.trim().is_empty() {
        return format!("{CHANGELOG_TITLE}{newline}{newline}{block}{newline}");
    }

    if let Some(title_end) = find_title_end(existing) {
        let (title, rest) = existing.split_at(title_end);
        let rest = rest.trim_start_matches(['\n', '\r']);

        let mut output = String::with_capacity(existing.len() + block.len() + 8);
        output.push_str(title);
        if !title.ends_with('\n') {
            output.push_str(newline);
        }
        output.push_str(newline);
        output.push_str(&block);
        output.push_str(newline);
        if !rest.is_empty() {
            output.push_str(newline);
            output.push_str(rest);
        }
        return output;
    }

    format!("{block}{newline}{newline}{existing}")
}

/// `\r\n` when the first line of `content` ends with it, otherwise `\n`.
fn line_ending(content: &str) -> &'static str {
    match content.find('\n') {
        Some(end) if content[..end].ends_with('\r') => "\r\n",
        _ => "\n",
    }
}

/// Byte offset just past the first non-blank line, if that line is a title.
fn find_title_end(content: &str) -> Option<usize> {
    let mut offset = 0;

    for line in content.split_inclusive('\n') {
        let end = offset + line.len();
        let trimmed = line.trim();
        if trimmed.is_empty() {
            offset = end;
            continue;
        }
        return is_title(trimmed).then_some(end);
    }

    None
}

fn is_title(line: &str) -> bool {
    line == "#" || line.starts_with("# ")
}
