/// How `load_web2` treats a missing account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadMode {
    /// Missing account is an error.
    #[default]
    Existing,
    /// Missing account is created first.
    Init,
}
