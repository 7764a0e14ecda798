/// URL scheme types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchemeType {
    #[default]
    Http,
    Https,
    Ws,
    Wss,
    Ftp,
    Gopher,
    File,
    Other,
}

impl SchemeType {
    /// Check if URLs of this scheme always carry `//` and a rooted path
    /// once they have a host
    pub fn is_slashed(self) -> bool {
        self != Self::Other
    }
}
