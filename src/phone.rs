use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use tracing::debug;

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(11\)\d{4}-\d{4}").unwrap());
static NAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\w+\s").unwrap());

/// Phone list scanned when no other input is given.
pub const SAMPLE_DIRECTORY: &str = "Lista telefonica:\n\
Ana - (11)1234-5678\n\
Beatriz - (11)4312-1223\n\
Camila - (19)3367-1234\n\
Debora - (15)2336-9972\n\
Eloisa - (11)9982-2230";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhoneEntry {
    /// 1-based line in the scanned text.
    pub line_number: usize,
    /// Leading word token, trailing whitespace included.
    pub name: String,
}

/// True when the line holds a `(11)DDDD-DDDD` number anywhere.
pub fn has_phone(line: &str) -> bool {
    PHONE_RE.is_match(line)
}

/// Word characters plus one whitespace character at the start of the line.
pub fn name_token(line: &str) -> Option<&str> {
    NAME_RE.find(line).map(|m| &line[m.start()..m.end()])
}

fn scan(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.split('\n')
        .enumerate()
        .filter(|(_, line)| has_phone(line))
        .filter_map(|(idx, line)| {
            let name = name_token(line);
            debug!(line = idx + 1, ?name, "phone line");
            name.map(|n| (idx + 1, n))
        })
}

/// Name tokens of every line carrying an area-11 phone number, in line order.
pub fn extract_names(text: &str) -> Vec<&str> {
    scan(text).map(|(_, name)| name).collect()
}

pub fn extract_entries(text: &str) -> Vec<PhoneEntry> {
    scan(text)
        .map(|(line_number, name)| PhoneEntry {
            line_number,
            name: name.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_line_yields_name_with_space() {
        assert_eq!(extract_names("Ana - (11)1234-5678"), vec!["Ana "]);
        assert_eq!(extract_names("Beatriz - (11)4312-1223"), vec!["Beatriz "]);
        assert_eq!(extract_names("João - (11)1234-5678"), vec!["João "]);
    }

    #[test]
    fn other_area_codes_are_ignored() {
        assert!(extract_names("Carlos - (21)1234-5678").is_empty());
        assert!(!has_phone("Camila - (19)3367-1234"));
    }

    #[test]
    fn phone_without_leading_token_is_skipped() {
        assert!(extract_names("(11)1234-5678 Ana").is_empty());
        assert!(extract_names("Ana-(11)1234-5678").is_empty());
        assert!(extract_names(" Ana - (11)1234-5678").is_empty());
    }

    #[test]
    fn malformed_numbers_do_not_match() {
        assert!(!has_phone("Ana - (11)123-5678"));
        assert!(!has_phone("Ana - 11 1234-5678"));
        assert!(!has_phone("Ana - (11)12345678"));
        assert!(has_phone("Ana tel:(11)1234-56789"));
    }

    #[test]
    fn sample_directory_output() {
        assert_eq!(
            extract_names(SAMPLE_DIRECTORY),
            vec!["Ana ", "Beatriz ", "Eloisa "]
        );
    }

    #[test]
    fn entries_carry_line_numbers() {
        let entries = extract_entries(SAMPLE_DIRECTORY);
        let lines: Vec<usize> = entries.iter().map(|e| e.line_number).collect();
        assert_eq!(lines, vec![2, 3, 6]);
        assert_eq!(entries[2].name, "Eloisa ");
    }

    #[test]
    fn outputs_are_line_prefixes() {
        let text = std::fs::read_to_string("tests/fixtures/agenda.txt").unwrap();
        let names = extract_names(&text);
        assert!(names.len() <= text.split('\n').count());
        for name in &names {
            assert!(text.split('\n').any(|line| line.starts_with(name)));
        }
        assert_eq!(names, vec!["Joao ", "Ana_Paula ", "Luiza\t", "Zoe "]);
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(extract_names("").is_empty());
        assert!(extract_entries("\n\n").is_empty());
    }
}
