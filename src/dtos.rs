use serde::Deserialize;
use validator::Validate;

use crate::models::User;

/// 创建 / 更新用户的请求体
///
/// 缺失的字段取零值，交给校验阶段统一拒绝。
/// 字段名接受 PascalCase 以及全小写、全大写与 `userName` 写法。
#[derive(Debug, Default, Clone, Deserialize, Validate)]
#[serde(rename_all = "PascalCase", default)]
pub struct UserDto {
    #[serde(alias = "id", alias = "ID")]
    pub id: i64,

    #[serde(alias = "username", alias = "userName", alias = "USERNAME")]
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[serde(alias = "email", alias = "EMAIL")]
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    #[serde(alias = "age", alias = "AGE")]
    #[validate(range(min = 1, message = "Age must be greater than zero"))]
    pub age: i64,
}

impl From<UserDto> for User {
    fn from(dto: UserDto) -> Self {
        User {
            id: dto.id,
            username: dto.username,
            email: dto.email,
            age: dto.age,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(id: i64, username: &str, email: &str, age: i64) -> UserDto {
        UserDto {
            id,
            username: username.to_string(),
            email: email.to_string(),
            age,
        }
    }

    #[test]
    fn accepts_complete_user() {
        assert!(dto(1, "a", "a@x.com", 30).validate().is_ok());
    }

    #[test]
    fn rejects_empty_fields_and_non_positive_age() {
        assert!(dto(1, "", "a@x.com", 30).validate().is_err());
        assert!(dto(1, "a", "", 30).validate().is_err());
        assert!(dto(1, "a", "a@x.com", 0).validate().is_err());
        assert!(dto(1, "a", "a@x.com", -4).validate().is_err());
    }

    #[test]
    fn zero_id_is_left_to_the_handler() {
        assert!(dto(0, "a", "a@x.com", 30).validate().is_ok());
    }

    #[test]
    fn missing_fields_default_to_zero_values() {
        let parsed: UserDto = serde_json::from_str(r#"{"Username": "a"}"#).unwrap();
        assert_eq!(parsed.id, 0);
        assert_eq!(parsed.email, "");
        assert_eq!(parsed.age, 0);
    }

    #[test]
    fn accepts_uppercase_and_camel_case_field_names() {
        let parsed: UserDto =
            serde_json::from_str(r#"{"ID": 1, "userName": "a", "EMAIL": "e", "AGE": 3}"#)
                .unwrap();
        assert_eq!(parsed.id, 1);
        assert_eq!(parsed.username, "a");
        assert_eq!(parsed.email, "e");
        assert_eq!(parsed.age, 3);
    }

    #[test]
    fn accepts_lowercase_field_names() {
        let parsed: UserDto =
            serde_json::from_str(r#"{"id": 7, "username": "b", "email": "b@x.com", "age": 5}"#)
                .unwrap();
        assert_eq!(parsed.id, 7);
        assert_eq!(parsed.username, "b");
        assert_eq!(parsed.age, 5);
    }
}
