//! One-shot dataset loading.
//!
//! The dataset is fetched exactly once at startup and never revalidated.
//! Nothing downstream may render or aggregate before the load resolves.

use std::path::Path;

use super::{Dataset, DatasetError, Participant};

/// Parses a dataset from raw JSON bytes: an array of flat participant
/// records.
///
/// # Errors
///
/// - `Parse` if the JSON is malformed or a record violates a value
///   invariant (empty alias, rating outside 1-10, missing dimension)
/// - `DuplicateAlias` if two records share an alias
pub fn parse_dataset(bytes: &[u8]) -> Result<Dataset, DatasetError> {
    let participants: Vec<Participant> = serde_json::from_slice(bytes)?;
    Dataset::from_participants(participants)
}

/// Loads the dataset from a JSON file.
///
/// This is the single asynchronous boundary of the system. A failure here
/// is surfaced upward and rendering simply never begins; there is no
/// automatic retry.
pub async fn load_dataset(path: impl AsRef<Path>) -> Result<Dataset, DatasetError> {
    let bytes = tokio::fs::read(path).await?;
    parse_dataset(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn record(alias: &str, programming: u8) -> String {
        format!(
            r#"{{
                "alias": "{alias}",
                "timestamp": "2022-10-04T10:30:00Z",
                "selfDescription": "",
                "skillInfoViz": 1, "skillStats": 1, "skillMaths": 1,
                "skillArt": 1, "skillComputer": 1, "skillProgramming": {programming},
                "skillGraphics": 1, "skillHCI": 1, "skillUX": 1,
                "skillCommunication": 1, "skillCollaboration": 1, "skillRepos": 1
            }}"#
        )
    }

    #[test]
    fn parse_accepts_well_formed_array() {
        let json = format!("[{},{}]", record("Ann", 8), record("Bo", 3));
        let dataset = parse_dataset(json.as_bytes()).unwrap();
        assert_eq!(dataset.len(), 2);
    }

    #[test]
    fn parse_rejects_duplicate_aliases() {
        let json = format!("[{},{}]", record("Ann", 8), record("Ann", 3));
        assert!(matches!(
            parse_dataset(json.as_bytes()),
            Err(DatasetError::DuplicateAlias { .. })
        ));
    }

    #[test]
    fn parse_rejects_malformed_json() {
        assert!(matches!(
            parse_dataset(b"not json"),
            Err(DatasetError::Parse(_))
        ));
    }

    #[test]
    fn parse_rejects_rating_out_of_scale() {
        let json = format!("[{}]", record("Ann", 11));
        assert!(matches!(
            parse_dataset(json.as_bytes()),
            Err(DatasetError::Parse(_))
        ));
    }

    #[test]
    fn parse_accepts_empty_array() {
        let dataset = parse_dataset(b"[]").unwrap();
        assert!(dataset.is_empty());
    }

    #[tokio::test]
    async fn load_reads_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[{}]", record("Ann", 8)).unwrap();

        let dataset = load_dataset(file.path()).await.unwrap();
        assert_eq!(dataset.len(), 1);
    }

    #[tokio::test]
    async fn load_surfaces_missing_file_as_io_error() {
        let result = load_dataset("/definitely/not/here.json").await;
        assert!(matches!(result, Err(DatasetError::Io(_))));
    }
}
