//! Submission IDs with date-based sequencing.
//!
//! IDs look like `2026-10-16-004-k2x`: the local date, a base36 sequence
//! that counts submissions already written for that date, and a random
//! base36 suffix.

use anyhow::Result;
use chrono::Local;
use rand::Rng;
use std::path::Path;

const BASE36_CHARS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// File extension of stored submissions.
pub const SUBMISSION_EXT: &str = "json";

/// Generate a new submission ID for files stored in `dir`.
pub fn generate_id(dir: &Path) -> Result<String> {
    let date = Local::now().format("%Y-%m-%d").to_string();
    let seq = next_sequence_for_date(dir, &date)?;

    Ok(format!(
        "{}-{}-{}",
        date,
        format_base36(seq, 3),
        random_base36(3)
    ))
}

/// Next free sequence number for `date` among the files in `dir`.
fn next_sequence_for_date(dir: &Path, date: &str) -> Result<u32> {
    let mut max_seq = 0u32;

    if dir.exists() {
        let suffix = format!(".{}", SUBMISSION_EXT);
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            let filename = entry.file_name();
            let name = filename.to_string_lossy();

            // YYYY-MM-DD-SSS-XXX.json
            if let Some(stem) = name.strip_suffix(&suffix) {
                if !stem.starts_with(date) {
                    continue;
                }
                let parts: Vec<&str> = stem.split('-').collect();
                if parts.len() == 5 {
                    if let Some(seq) = parse_base36(parts[3]) {
                        max_seq = max_seq.max(seq);
                    }
                }
            }
        }
    }

    Ok(max_seq + 1)
}

/// Format a number as zero-padded base36.
pub fn format_base36(n: u32, width: usize) -> String {
    let mut digits = Vec::new();
    let mut num = n;

    while num > 0 {
        digits.push(BASE36_CHARS[(num % 36) as usize] as char);
        num /= 36;
    }

    let s: String = digits.into_iter().rev().collect();
    format!("{:0>width$}", s, width = width)
}

/// Parse a lowercase base36 string.
pub fn parse_base36(s: &str) -> Option<u32> {
    if s.is_empty() {
        return None;
    }
    s.chars().try_fold(0u32, |acc, c| {
        let pos = BASE36_CHARS.iter().position(|&b| b as char == c)?;
        acc.checked_mul(36)?.checked_add(pos as u32)
    })
}

fn random_base36(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| BASE36_CHARS[rng.gen_range(0..36)] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_format_base36() {
        assert_eq!(format_base36(0, 3), "000");
        assert_eq!(format_base36(1, 3), "001");
        assert_eq!(format_base36(35, 3), "00z");
        assert_eq!(format_base36(36, 3), "010");
        assert_eq!(format_base36(46656, 3), "1000");
    }

    #[test]
    fn test_parse_base36() {
        assert_eq!(parse_base36("001"), Some(1));
        assert_eq!(parse_base36("010"), Some(36));
        assert_eq!(parse_base36("0A1"), None);
        assert_eq!(parse_base36(""), None);
    }

    #[test]
    fn test_generate_id_shape() {
        let tmp = TempDir::new().unwrap();
        let id = generate_id(tmp.path()).unwrap();
        let parts: Vec<&str> = id.split('-').collect();
        assert_eq!(parts.len(), 5);
        assert_eq!(parts[3], "001");
        assert_eq!(parts[4].len(), 3);
    }

    #[test]
    fn test_sequence_continues_after_existing_files() {
        let tmp = TempDir::new().unwrap();
        let date = Local::now().format("%Y-%m-%d").to_string();
        std::fs::write(tmp.path().join(format!("{}-00a-xyz.json", date)), "{}").unwrap();
        std::fs::write(tmp.path().join("1999-01-01-0zz-abc.json"), "{}").unwrap();

        let id = generate_id(tmp.path()).unwrap();
        assert!(id.starts_with(&format!("{}-00b-", date)));
    }
}
