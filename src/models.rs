use std::fmt;

use serde::{Deserialize, Serialize};

/// 存储中的用户记录，JSON 字段名为 `Id`、`Username`、`Email`、`Age`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub age: i64,
}

// -- 创建成功时返回的摘要行: id - username - email - age
impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} - {} - {}",
            self.id, self.username, self.email, self.age
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_pascal_case_fields() {
        let user = User {
            id: 1,
            username: "a".to_string(),
            email: "a@x.com".to_string(),
            age: 30,
        };

        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"Id": 1, "Username": "a", "Email": "a@x.com", "Age": 30})
        );
        assert_eq!(user.to_string(), "1 - a - a@x.com - 30");
    }
}
