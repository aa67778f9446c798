use greetr_common::record::{Account, AdminRecord, Profile, UserRecord};
use greetr_common::text::capitalize;
use greetr_core::{Greeter, greet};

/// Assertions that must hold for every kind of record.
fn check_profile<P: Profile>(profile: &P, name: &str, age: i32) {
    assert_eq!(profile.name(), name);
    assert_eq!(profile.age(), age);
    assert_eq!(
        greet(profile).to_string(),
        format!("Hello, {}. You are {} years old.", capitalize(name), age)
    );
}

#[test]
fn classic_greeting_end_to_end() {
    let user: UserRecord = UserRecord::new("John Doe", 30);
    let mut greeter = Greeter::new(Vec::new());

    let greeting = greeter.greet(&user).unwrap();
    let out: String = String::from_utf8(greeter.into_inner()).unwrap();

    assert_eq!(greeting.to_string(), "Hello, John Doe. You are 30 years old.");
    assert_eq!(out, "Hello, John Doe. You are 30 years old.\n");
}

#[test]
fn admin_satisfies_user_checks() {
    let user: UserRecord = UserRecord::new("Alice", 40);
    let admin: AdminRecord = AdminRecord::new("Alice", 40, true);

    check_profile(&user, "Alice", 40);
    check_profile(&admin, "Alice", 40);
    assert!(admin.is_admin());
}

#[test]
fn accounts_greet_like_their_records() {
    let accounts: Vec<Account> = vec![
        UserRecord::new("john doe", 30).into(),
        AdminRecord::new("jOHN", 31, false).into(),
    ];

    let mut greeter = Greeter::new(Vec::new());
    for account in &accounts {
        greeter.greet(account).unwrap();
    }

    let out: String = String::from_utf8(greeter.into_inner()).unwrap();
    assert_eq!(
        out,
        "Hello, John doe. You are 30 years old.\nHello, JOHN. You are 31 years old.\n"
    );
}

#[test]
fn records_are_readable_from_other_threads() {
    let admin: AdminRecord = AdminRecord::new("bob", 22, true);

    let line: String = std::thread::scope(|s| {
        s.spawn(|| greet(&admin).to_string())
            .join()
            .unwrap()
    });

    assert_eq!(line, "Hello, Bob. You are 22 years old.");
    assert_eq!(admin.name(), "bob");
}
