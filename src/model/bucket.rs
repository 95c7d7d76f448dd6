use std::convert::TryFrom;

use crate::list_error::ListError;

// One record per bucket in the listing response. Only the name is of
// interest; the rest of the service record is dropped on conversion.
#[derive(Debug)]
pub struct Bucket {
    pub(crate) name: String,
}

impl TryFrom<rusoto_s3::Bucket> for Bucket {
    type Error = ListError;

    fn try_from(record: rusoto_s3::Bucket) -> Result<Self, Self::Error> {
        match record.name {
            Some(name) if name.is_empty() => Err(ListError::MalformedResponse(
                "bucket record has an empty name".to_string(),
            )),
            Some(name) => Ok(Bucket { name }),
            None => Err(ListError::MalformedResponse(
                "bucket record is missing its name".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_record_converts() {
        let record = rusoto_s3::Bucket {
            name: Some("logs-2023".to_string()),
            ..Default::default()
        };

        let bucket = Bucket::try_from(record).unwrap();
        assert_eq!(bucket.name, "logs-2023");
    }

    #[test]
    fn test_record_without_name_is_malformed() {
        let record = rusoto_s3::Bucket {
            creation_date: Some("2023-02-01T09:00:00.000Z".to_string()),
            ..Default::default()
        };

        let err = Bucket::try_from(record).unwrap_err();
        assert!(matches!(err, ListError::MalformedResponse(_)));
    }

    #[test]
    fn test_record_with_empty_name_is_malformed() {
        let record = rusoto_s3::Bucket {
            name: Some(String::new()),
            ..Default::default()
        };

        let err = Bucket::try_from(record).unwrap_err();
        assert!(matches!(err, ListError::MalformedResponse(_)));
    }
}
