use std::fmt;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};

use crate::codec;

/// One credential entry from the users file.
///
/// Fields missing from a record deserialize as empty strings, so a record
/// with no `password` key matches a login that sends an empty password.
/// Keys match in any ASCII case.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub username: String,
    pub password: String,
    pub level: String,
}

impl<'de> Deserialize<'de> for User {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct UserVisitor;

        impl<'de> Visitor<'de> for UserVisitor {
            type Value = User;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a user record")
            }

            fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<User, A::Error> {
                let mut user = User::default();
                codec::read_string_fields(
                    map,
                    &mut [
                        ("username", &mut user.username),
                        ("password", &mut user.password),
                        ("level", &mut user.level),
                    ],
                )?;
                Ok(user)
            }
        }

        deserializer.deserialize_map(UserVisitor)
    }
}

impl User {
    pub fn new(username: impl Into<String>, password: impl Into<String>, level: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            level: level.into(),
        }
    }

    /// Exact, case-sensitive comparison of both fields
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}
