use crate::core::{DisplayRecord, PLACEHOLDER_CONTENT};

/// One card per breed, same order as the input.
pub fn project<S: AsRef<str>>(breeds: &[S]) -> Vec<DisplayRecord> {
    breeds.iter().map(|breed| to_record(breed.as_ref())).collect()
}

pub fn to_record(breed: &str) -> DisplayRecord {
    DisplayRecord {
        title: breed.to_string(),
        content: PLACEHOLDER_CONTENT.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_preserves_order() {
        let records = project(&["corgi", "akita", "beagle"]);

        let titles: Vec<&str> = records.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["corgi", "akita", "beagle"]);
        assert!(records
            .iter()
            .all(|r| r.content == "Breed info goes here."));
    }

    #[test]
    fn test_project_empty() {
        let empty: [String; 0] = [];
        assert!(project(&empty).is_empty());
    }

    #[test]
    fn test_project_is_idempotent() {
        let breeds = vec!["akita".to_string(), "beagle".to_string()];
        assert_eq!(project(&breeds), project(&breeds));
    }
}
