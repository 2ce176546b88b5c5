//! Form encoding for Moodle web service arguments.
//!
//! Moodle's REST server reads arguments as PHP arrays flattened into form
//! keys, e.g. `users[0][username]=ada`. Absent optional members are omitted
//! so Moodle keeps its own defaults.

use crate::domain::{NewUser, RoleAssignment, UserUpdate};

/// Ordered form fields for one web service call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(super) struct FormParams {
    pairs: Vec<(String, String)>,
}

impl FormParams {
    pub(super) fn new() -> Self {
        Self::default()
    }

    pub(super) fn push(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.pairs.push((key.into(), value.into()));
        self
    }

    pub(super) fn push_opt(&mut self, key: impl Into<String>, value: Option<&str>) -> &mut Self {
        if let Some(value) = value {
            self.push(key, value);
        }
        self
    }

    pub(super) fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Prefix the call with the protocol fields every request carries.
    pub(super) fn with_protocol(self, token: &str, function: &str) -> Self {
        let mut pairs = vec![
            ("wstoken".to_owned(), token.to_owned()),
            ("wsfunction".to_owned(), function.to_owned()),
            ("moodlewsrestformat".to_owned(), "json".to_owned()),
        ];
        pairs.extend(self.pairs);
        Self { pairs }
    }
}

fn key(array: &str, index: usize, member: &str) -> String {
    format!("{array}[{index}][{member}]")
}

fn flag(value: bool) -> &'static str {
    if value { "1" } else { "0" }
}

/// Arguments for `core_user_create_users` with a single account.
///
/// Without a password Moodle is asked to generate one and mail it.
pub(super) fn create_users(user: &NewUser) -> FormParams {
    let mut params = FormParams::new();
    params
        .push(key("users", 0, "username"), user.username.as_str())
        .push(key("users", 0, "firstname"), user.first_name.as_str())
        .push(key("users", 0, "lastname"), user.last_name.as_str())
        .push(key("users", 0, "email"), user.email.as_str())
        .push_opt(key("users", 0, "auth"), user.auth.as_deref())
        .push_opt(key("users", 0, "idnumber"), user.id_number.as_deref());
    if user.password.is_empty() {
        params.push(key("users", 0, "createpassword"), "1");
    } else {
        params.push(key("users", 0, "password"), user.password.as_str());
    }
    params
}

/// Arguments for `core_user_get_users_by_field` with one value.
pub(super) fn users_by_field(field: &str, value: &str) -> FormParams {
    let mut params = FormParams::new();
    params.push("field", field).push("values[0]", value);
    params
}

/// Arguments for `core_user_update_users`, preserving batch order.
pub(super) fn update_users(updates: &[UserUpdate]) -> FormParams {
    let mut params = FormParams::new();
    for (index, update) in updates.iter().enumerate() {
        params
            .push(key("users", index, "id"), update.id.to_string())
            .push_opt(key("users", index, "username"), update.username.as_deref())
            .push_opt(key("users", index, "password"), update.password.as_deref())
            .push_opt(key("users", index, "firstname"), update.first_name.as_deref())
            .push_opt(key("users", index, "lastname"), update.last_name.as_deref())
            .push_opt(key("users", index, "email"), update.email.as_deref())
            .push_opt(key("users", index, "auth"), update.auth.as_deref())
            .push_opt(key("users", index, "idnumber"), update.id_number.as_deref())
            .push_opt(key("users", index, "suspended"), update.suspended.map(flag));
    }
    params
}

/// Arguments for `core_role_assign_roles` with one assignment.
pub(super) fn assign_roles(assignment: &RoleAssignment) -> FormParams {
    let mut params = FormParams::new();
    params
        .push(key("assignments", 0, "roleid"), assignment.role_id.to_string())
        .push(key("assignments", 0, "userid"), assignment.user_id.to_string())
        .push(
            key("assignments", 0, "contextid"),
            assignment.context_id.to_string(),
        );
    params
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_strs(params: &FormParams) -> Vec<(&str, &str)> {
        params
            .pairs()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }

    fn new_user(password: &str) -> NewUser {
        NewUser {
            username: "ada".to_owned(),
            password: password.to_owned(),
            first_name: "Ada".to_owned(),
            last_name: "Lovelace".to_owned(),
            email: "ada@example.org".to_owned(),
            auth: None,
            id_number: Some("S-1".to_owned()),
        }
    }

    #[test]
    fn protocol_fields_come_first() {
        let params = users_by_field("email", "ada@example.org").with_protocol("tok", "fn_name");
        assert_eq!(
            as_strs(&params),
            vec![
                ("wstoken", "tok"),
                ("wsfunction", "fn_name"),
                ("moodlewsrestformat", "json"),
                ("field", "email"),
                ("values[0]", "ada@example.org"),
            ]
        );
    }

    #[test]
    fn create_encodes_password_and_skips_absent_members() {
        let params = create_users(&new_user("S3cret!"));
        let pairs = as_strs(&params);
        assert!(pairs.contains(&("users[0][password]", "S3cret!")));
        assert!(pairs.contains(&("users[0][idnumber]", "S-1")));
        assert!(!pairs.iter().any(|(k, _)| *k == "users[0][auth]"));
        assert!(!pairs.iter().any(|(k, _)| *k == "users[0][createpassword]"));
    }

    #[test]
    fn create_without_password_asks_lms_to_generate_one() {
        let params = create_users(&new_user(""));
        let pairs = as_strs(&params);
        assert!(pairs.contains(&("users[0][createpassword]", "1")));
        assert!(!pairs.iter().any(|(k, _)| *k == "users[0][password]"));
    }

    #[test]
    fn update_indexes_records_in_order() {
        let updates = vec![
            UserUpdate {
                id: 7,
                email: Some("a@example.org".to_owned()),
                ..UserUpdate::default()
            },
            UserUpdate {
                id: 9,
                suspended: Some(true),
                ..UserUpdate::default()
            },
        ];

        let params = update_users(&updates);

        assert_eq!(
            as_strs(&params),
            vec![
                ("users[0][id]", "7"),
                ("users[0][email]", "a@example.org"),
                ("users[1][id]", "9"),
                ("users[1][suspended]", "1"),
            ]
        );
    }

    #[test]
    fn assign_encodes_all_identifiers() {
        let params = assign_roles(&RoleAssignment {
            role_id: 5,
            user_id: 42,
            context_id: 1,
        });
        assert_eq!(
            as_strs(&params),
            vec![
                ("assignments[0][roleid]", "5"),
                ("assignments[0][userid]", "42"),
                ("assignments[0][contextid]", "1"),
            ]
        );
    }
}
