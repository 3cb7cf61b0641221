/// A user record: numeric id, display name, and email address.
///
/// The id and email are fixed at construction; the name is the only field
/// that can change afterwards.
#[derive(Debug, Clone)]
pub struct User {
    id: u64,
    name: String,
    email: String,
}

impl User {
    /// Creates a new user from its id, name, and email.
    ///
    /// Values are stored as-is: no validation is performed, and empty
    /// strings are accepted.
    pub fn new(id: u64, name: String, email: String) -> Self {
        Self { id, name, email }
    }

    /// Returns the user's id.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the user's current name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replaces the stored name unconditionally.
    pub fn set_name(&mut self, name: String) {
        self.name = name;
    }

    /// Returns the email address supplied at construction.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Renders the two-line console summary: `User ID: <id>` followed by
    /// `User Name: <name>`, each line newline-terminated.
    ///
    /// The email is not part of the summary.
    pub fn info_text(&self) -> String {
        format!("User ID: {}\nUser Name: {}\n", self.id, self.name)
    }

    /// Writes the two-line summary to standard output.
    pub fn display_info(&self) {
        print!("{}", self.info_text());
    }
}
