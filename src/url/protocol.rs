use std::fmt;

/// The scheme part of a URL, always lower-cased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scheme {
    HTTPS,
    HTTP,
    FTP,
    SFTP,
    WS,
    WSS,
    Other(String),
}

impl Default for Scheme {
    fn default() -> Self {
        Self::HTTPS
    }
}

impl From<&str> for Scheme {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "https" => Scheme::HTTPS,
            "http" => Scheme::HTTP,
            "ftp" => Scheme::FTP,
            "sftp" => Scheme::SFTP,
            "ws" => Scheme::WS,
            "wss" => Scheme::WSS,
            other => Scheme::Other(other.into()),
        }
    }
}

impl Scheme {
    pub fn as_str(&self) -> &str {
        match self {
            Scheme::HTTPS => "https",
            Scheme::HTTP => "http",
            Scheme::FTP => "ftp",
            Scheme::SFTP => "sftp",
            Scheme::WS => "ws",
            Scheme::WSS => "wss",
            Scheme::Other(s) => s,
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
