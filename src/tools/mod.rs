use crate::models::{ContentRecord, ContentType};
use std::fs;
use std::path::Path;

/// Split a payload file into individual payloads
///
/// Payloads are separated by one or more blank lines so multi-line vCards stay
/// intact. Lines starting with `#` are comments.
pub fn split_payloads(contents: &str) -> Vec<String> {
    let mut payloads = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in contents.lines() {
        if line.trim_start().starts_with('#') {
            continue;
        }
        if line.trim().is_empty() {
            if !current.is_empty() {
                payloads.push(current.join("\n"));
                current.clear();
            }
            continue;
        }
        current.push(line);
    }
    if !current.is_empty() {
        payloads.push(current.join("\n"));
    }

    payloads
}

/// Read and split a payload file.
pub fn read_payloads<P: AsRef<Path>>(path: P) -> std::io::Result<Vec<String>> {
    let contents = fs::read_to_string(path)?;
    Ok(split_payloads(&contents))
}

/// Record counts per content type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeTally {
    counts: [usize; ContentType::ALL.len()],
}

impl TypeTally {
    /// Count for one type
    pub fn count(&self, content_type: ContentType) -> usize {
        self.counts[Self::slot(content_type)]
    }

    /// Total records tallied
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// `(type, count)` in display order, including zero counts
    pub fn iter(&self) -> impl Iterator<Item = (ContentType, usize)> + '_ {
        ContentType::ALL
            .iter()
            .map(move |&ty| (ty, self.count(ty)))
    }

    fn slot(content_type: ContentType) -> usize {
        ContentType::ALL
            .iter()
            .position(|&ty| ty == content_type)
            .unwrap_or(ContentType::ALL.len() - 1)
    }
}

/// Count records per content type.
pub fn tally<'a, I>(records: I) -> TypeTally
where
    I: IntoIterator<Item = &'a ContentRecord>,
{
    let mut tally = TypeTally::default();
    for record in records {
        tally.counts[TypeTally::slot(record.content_type())] += 1;
    }
    tally
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify_batch;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    static TEMP_FILE_COUNTER: AtomicU64 = AtomicU64::new(0);

    fn write_temp_file(contents: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock before UNIX epoch")
            .as_nanos();
        let sequence = TEMP_FILE_COUNTER.fetch_add(1, Ordering::Relaxed);
        path.push(format!("qrcraft_payloads_{nanos}_{sequence}.txt"));
        fs::write(&path, contents).expect("failed to write temp payload file");
        path
    }

    #[test]
    fn split_payloads_keeps_vcards_whole() {
        let payloads = split_payloads(
            "# scanned at the front desk\n\
             https://example.com\n\
             \n\
             BEGIN:VCARD\n\
             FN:Jane Doe\n\
             END:VCARD\n\
             \n\
             \n\
             tel:555\n",
        );
        assert_eq!(
            payloads,
            vec![
                "https://example.com".to_string(),
                "BEGIN:VCARD\nFN:Jane Doe\nEND:VCARD".to_string(),
                "tel:555".to_string(),
            ]
        );
    }

    #[test]
    fn split_payloads_empty_input() {
        assert!(split_payloads("").is_empty());
        assert!(split_payloads("# only a comment\n\n").is_empty());
    }

    #[test]
    fn read_payloads_and_tally() {
        let path = write_temp_file("WIFI:S:net;;\n\n12.5,45.25\n\nhello\n\nworld\n");
        let payloads = read_payloads(&path).expect("payload file should be readable");
        let records = classify_batch(&payloads);
        let tally = tally(&records);
        assert_eq!(tally.total(), 4);
        assert_eq!(tally.count(ContentType::WiFi), 1);
        assert_eq!(tally.count(ContentType::GeoLocation), 1);
        assert_eq!(tally.count(ContentType::Text), 2);
        assert_eq!(tally.count(ContentType::Unknown), 0);
        assert_eq!(tally.iter().count(), ContentType::ALL.len());
        let _ = fs::remove_file(path);
    }

    #[test]
    fn read_payloads_missing_file() {
        assert!(read_payloads("/nonexistent/qrcraft/payloads.txt").is_err());
    }
}
