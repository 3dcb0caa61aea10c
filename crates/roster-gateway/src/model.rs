//! Wire representations of records.
//!
//! Field names follow the public contract (`nome`, `apelido`, `nascimento`,
//! `stack`) and are kept out of the core types.

use roster_core::{NewRecord, Record};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreateRecordRequest {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "apelido")]
    pub nickname: String,
    #[serde(rename = "nascimento")]
    pub birthdate: String,
    #[serde(default)]
    pub stack: Option<Vec<String>>,
}

impl From<CreateRecordRequest> for NewRecord {
    fn from(request: CreateRecordRequest) -> Self {
        NewRecord {
            name: request.name,
            nickname: request.nickname,
            birthdate: request.birthdate,
            stack: request.stack,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecordResponse {
    pub id: String,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "apelido")]
    pub nickname: String,
    #[serde(rename = "nascimento")]
    pub birthdate: String,
    pub stack: Option<Vec<String>>,
}

impl From<Record> for RecordResponse {
    fn from(record: Record) -> Self {
        RecordResponse {
            id: record.id.to_string(),
            name: record.name,
            nickname: record.nickname,
            birthdate: record.birthdate,
            stack: record.stack,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub t: Option<String>,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_uses_public_field_names() {
        let request: CreateRecordRequest = serde_json::from_str(
            r#"{"apelido":"joaoj","nome":"João","nascimento":"1990-01-01","stack":["java"]}"#,
        )
        .unwrap();
        let candidate = NewRecord::from(request);

        assert_eq!(candidate.name, "João");
        assert_eq!(candidate.nickname, "joaoj");
        assert_eq!(candidate.birthdate, "1990-01-01");
        assert_eq!(candidate.stack, Some(vec!["java".to_string()]));
    }

    #[test]
    fn stack_may_be_missing_or_null() {
        let missing: CreateRecordRequest =
            serde_json::from_str(r#"{"apelido":"a","nome":"b","nascimento":"1990-01-01"}"#)
                .unwrap();
        let null: CreateRecordRequest = serde_json::from_str(
            r#"{"apelido":"a","nome":"b","nascimento":"1990-01-01","stack":null}"#,
        )
        .unwrap();

        assert_eq!(missing.stack, None);
        assert_eq!(null.stack, None);
    }

    #[test]
    fn null_required_field_is_rejected() {
        let result = serde_json::from_str::<CreateRecordRequest>(
            r#"{"apelido":null,"nome":"b","nascimento":"1990-01-01"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn non_string_stack_entry_is_rejected() {
        let result = serde_json::from_str::<CreateRecordRequest>(
            r#"{"apelido":"a","nome":"b","nascimento":"1990-01-01","stack":[1]}"#,
        );
        assert!(result.is_err());
    }
}
