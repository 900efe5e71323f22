/// Registration and login, both answered with a plain bool: failures are
/// inline screen messages, not errors.
pub trait UserDirectory {
    /// Register a new account. False when the email is already taken.
    fn register(&mut self, email: &str, password: &str) -> bool;

    /// True when the email/password pair matches a registered account.
    fn login(&self, email: &str, password: &str) -> bool;
}

struct UserAccount {
    email: String,
    password: String,
}

/// Account storage backed by a plain in-process list.
#[derive(Default)]
pub struct InMemoryUsers {
    users: Vec<UserAccount>,
}

impl InMemoryUsers {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserDirectory for InMemoryUsers {
    fn register(&mut self, email: &str, password: &str) -> bool {
        if self.users.iter().any(|user| user.email == email) {
            return false;
        }
        self.users.push(UserAccount {
            email: email.to_string(),
            password: password.to_string(),
        });
        true
    }

    fn login(&self, email: &str, password: &str) -> bool {
        self.users
            .iter()
            .any(|user| user.email == email && user.password == password)
    }
}
