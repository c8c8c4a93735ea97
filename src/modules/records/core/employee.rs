use serde::{Deserialize, Serialize};

/// Employee fields are never validated, so stored records may lack any of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
}

#[cfg(test)]
mod employee_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_read_a_record_with_only_a_first_name() {
        let employee: Employee =
            serde_json::from_str(r#"{"id":"e-1","firstName":"Ada"}"#).unwrap();

        assert_eq!(employee.first_name, "Ada");
        assert_eq!(employee.last_name, "");
        assert_eq!(employee.email, "");
    }
}
