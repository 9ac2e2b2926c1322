use uuid::Uuid;

/// Stateless source of globally unique tokens.
pub trait TokenSource: Send + Sync {
    fn next_token(&self) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UuidTokenSource;

impl TokenSource for UuidTokenSource {
    fn next_token(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
