/// An outbound message to an account owner's recovery contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    pub destination: String,
    pub subject: String,
    pub body: String,
}
