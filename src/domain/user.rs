use serde::{Deserialize, Serialize};

/// A user record as produced by the data source.
///
/// Records are immutable values: they are created once by the data source and only
/// ever cloned afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    id: String,
    name: String,
    email: String,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_user_accessors() {
        let user = User::new("2", "Trần Thị B", "tranthib@example.com");
        assert_eq!(user.id(), "2");
        assert_eq!(user.name(), "Trần Thị B");
        assert_eq!(user.email(), "tranthib@example.com");
    }

    #[test]
    fn test_user_equality_is_by_value() {
        let a = User::new("1", "Nguyễn Văn A", "nguyenvana@example.com");
        let b = User::new("1", "Nguyễn Văn A", "nguyenvana@example.com");
        assert_eq!(a, b);
        assert_ne!(a, User::new("1", "Nguyễn Văn A", "other@example.com"));
    }
}
