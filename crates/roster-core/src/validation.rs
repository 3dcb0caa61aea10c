use crate::error::ValidationError;
use crate::record::NewRecord;
use regex::Regex;
use std::sync::LazyLock;

const NAME_MAX_LENGTH: usize = 100;
const NICKNAME_MAX_LENGTH: usize = 32;

// Shape only, no calendar check. ASCII digits, unlike `\d`.
static BIRTHDATE_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("birthdate pattern is valid")
});

/// Checks the structural constraints of a candidate record.
///
/// Lengths are counted in UTF-16 code units, so a character outside the
/// Basic Multilingual Plane counts twice. Field presence is the deserializer's
/// job, so only length and date shape are checked here. Returns the first
/// violation found.
pub fn validate(candidate: &NewRecord) -> Result<(), ValidationError> {
    check_length("name", &candidate.name, NAME_MAX_LENGTH)?;
    check_length("nickname", &candidate.nickname, NICKNAME_MAX_LENGTH)?;

    if !BIRTHDATE_SHAPE.is_match(&candidate.birthdate) {
        return Err(ValidationError::InvalidDateShape(
            candidate.birthdate.clone(),
        ));
    }

    Ok(())
}

fn check_length(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    let actual = value.encode_utf16().count();
    if actual > max {
        return Err(ValidationError::InvalidLength { field, max, actual });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name: &str, nickname: &str, birthdate: &str) -> NewRecord {
        NewRecord {
            name: name.to_string(),
            nickname: nickname.to_string(),
            birthdate: birthdate.to_string(),
            stack: None,
        }
    }

    #[test]
    fn accepts_valid_candidate() {
        assert!(validate(&candidate("João", "joaoj", "1990-01-01")).is_ok());
    }

    #[test]
    fn accepts_limits() {
        let rec = candidate(&"a".repeat(100), &"b".repeat(32), "0000-00-00");
        assert!(validate(&rec).is_ok());
    }

    #[test]
    fn counts_code_units_not_bytes() {
        // 32 two-byte characters, one code unit each
        let rec = candidate("name", &"ã".repeat(32), "1990-01-01");
        assert!(validate(&rec).is_ok());
    }

    #[test]
    fn astral_characters_count_twice() {
        assert!(validate(&candidate("name", &"😀".repeat(16), "1990-01-01")).is_ok());

        let err = validate(&candidate("name", &"😀".repeat(17), "1990-01-01")).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidLength {
                field: "nickname",
                max: 32,
                actual: 34
            }
        );
    }

    #[test]
    fn rejects_long_name() {
        let err = validate(&candidate(&"a".repeat(101), "nick", "1990-01-01")).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidLength {
                field: "name",
                max: 100,
                actual: 101
            }
        );
    }

    #[test]
    fn rejects_long_nickname() {
        let err = validate(&candidate("name", &"n".repeat(33), "1990-01-01")).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::InvalidLength {
                field: "nickname",
                ..
            }
        ));
    }

    #[test]
    fn rejects_bad_date_shapes() {
        for bad in [
            "",
            "1990-1-01",
            "1990/01/01",
            "90-01-01",
            "1990-01-01T00:00",
            " 1990-01-01",
            "1990-01-01\n",
            "abcd-ef-gh",
            "١٩٩٠-٠١-٠١",
        ] {
            let err = validate(&candidate("name", "nick", bad)).unwrap_err();
            assert!(
                matches!(err, ValidationError::InvalidDateShape(_)),
                "expected shape error for {bad:?}"
            );
        }
    }

    #[test]
    fn does_not_check_calendar_validity() {
        assert!(validate(&candidate("name", "nick", "2023-13-45")).is_ok());
    }
}
