use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Portfolio content error: {0}")]
    Content(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Showcase needs at least one project")]
    EmptyShowcase,
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            Error::EmptyShowcase.to_string(),
            "Showcase needs at least one project"
        );
        assert_eq!(
            Error::Config("bad key".to_string()).to_string(),
            "Configuration error: bad key"
        );
        let io = Error::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert!(matches!(io, Error::Io(_)));
    }
}
