//! # Person Records
//!
//! Immutable records describing who is being greeted.
//!
//! * [`UserRecord`]: a display name and an age.
//! * [`AdminRecord`]: a [`UserRecord`] with an administrative flag.
//! * [`Account`]: either of the two, chosen at runtime.
//!
//! All three implement [`Profile`], so code that only needs a name and an age
//! can take any of them.

/// The capability set shared by every record kind.
pub trait Profile {
    fn name(&self) -> &str;
    fn age(&self) -> i32;
    fn is_admin(&self) -> bool {
        false
    }
}

/// A plain user. Nothing is validated: empty names and any age are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserRecord {
    name: String,
    age: i32,
}

impl UserRecord {
    pub fn new(name: impl Into<String>, age: i32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i32 {
        self.age
    }
}

impl Profile for UserRecord {
    fn name(&self) -> &str {
        UserRecord::name(self)
    }

    fn age(&self) -> i32 {
        UserRecord::age(self)
    }
}

/// A user carrying an administrative flag.
///
/// Wraps a [`UserRecord`] and delegates `name` and `age` to it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AdminRecord {
    user: UserRecord,
    is_admin: bool,
}

impl AdminRecord {
    pub fn new(name: impl Into<String>, age: i32, is_admin: bool) -> Self {
        Self::from_user(UserRecord::new(name, age), is_admin)
    }

    /// Promotes an existing user record.
    pub fn from_user(user: UserRecord, is_admin: bool) -> Self {
        Self { user, is_admin }
    }

    pub fn name(&self) -> &str {
        self.user.name()
    }

    pub fn age(&self) -> i32 {
        self.user.age()
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    /// The embedded user record.
    pub fn user(&self) -> &UserRecord {
        &self.user
    }
}

impl Profile for AdminRecord {
    fn name(&self) -> &str {
        AdminRecord::name(self)
    }

    fn age(&self) -> i32 {
        AdminRecord::age(self)
    }

    fn is_admin(&self) -> bool {
        AdminRecord::is_admin(self)
    }
}

/// A record whose kind is only known at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Account {
    User(UserRecord),
    Admin(AdminRecord),
}

impl Account {
    pub fn kind(&self) -> &'static str {
        match self {
            Account::User(_) => "user",
            Account::Admin(_) => "admin",
        }
    }
}

impl Profile for Account {
    fn name(&self) -> &str {
        match self {
            Account::User(user) => user.name(),
            Account::Admin(admin) => admin.name(),
        }
    }

    fn age(&self) -> i32 {
        match self {
            Account::User(user) => user.age(),
            Account::Admin(admin) => admin.age(),
        }
    }

    fn is_admin(&self) -> bool {
        match self {
            Account::User(_) => false,
            Account::Admin(admin) => admin.is_admin(),
        }
    }
}

impl From<UserRecord> for Account {
    fn from(user: UserRecord) -> Self {
        Account::User(user)
    }
}

impl From<AdminRecord> for Account {
    fn from(admin: AdminRecord) -> Self {
        Account::Admin(admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn describe(profile: &impl Profile) -> (String, i32) {
        (profile.name().to_string(), profile.age())
    }

    #[test]
    fn user_record_returns_values_verbatim() {
        let user = UserRecord::new("John Doe", 30);

        assert_eq!(user.name(), "John Doe");
        assert_eq!(user.age(), 30);
        assert!(!Profile::is_admin(&user));
    }

    #[test]
    fn user_record_accepts_anything() {
        let empty = UserRecord::new("", 0);
        assert_eq!(empty.name(), "");
        assert_eq!(empty.age(), 0);

        let negative = UserRecord::new(String::from("x"), -7);
        assert_eq!(negative.age(), -7);

        let huge = UserRecord::new("y", i32::MAX);
        assert_eq!(huge.age(), i32::MAX);
    }

    #[test]
    fn admin_record_exposes_user_capabilities() {
        let admin = AdminRecord::new("Alice", 40, true);

        assert_eq!(admin.name(), "Alice");
        assert_eq!(admin.age(), 40);
        assert!(admin.is_admin());

        // Same answers through the shared capability set
        assert_eq!(describe(&admin), (String::from("Alice"), 40));
        assert!(Profile::is_admin(&admin));
    }

    #[test]
    fn admin_record_keeps_false_flag() {
        let admin = AdminRecord::new("Bob", 25, false);
        assert!(!admin.is_admin());
        assert!(!Profile::is_admin(&admin));
    }

    #[test]
    fn admin_from_user_wraps_the_same_record() {
        let user = UserRecord::new("Carol", 52);
        let admin = AdminRecord::from_user(user.clone(), true);

        assert_eq!(admin.user(), &user);
        assert_eq!(describe(&admin), describe(&user));
    }

    #[test]
    fn account_dispatches_to_held_record() {
        let user: Account = UserRecord::new("Dave", 18).into();
        let admin: Account = AdminRecord::new("Eve", 33, true).into();

        assert_eq!(user.kind(), "user");
        assert_eq!(admin.kind(), "admin");

        assert_eq!(describe(&user), (String::from("Dave"), 18));
        assert_eq!(describe(&admin), (String::from("Eve"), 33));

        assert!(!user.is_admin());
        assert!(admin.is_admin());
    }

    #[test]
    fn records_are_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<UserRecord>();
        assert_send_sync::<AdminRecord>();
        assert_send_sync::<Account>();
    }
}
