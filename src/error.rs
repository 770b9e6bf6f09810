//! file: error.rs
//! author: Jacob Xie
//! date: 2026/10/19 20:14:02 Monday
//! brief:

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to access score store at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Score store is not a JSON object of strings: {source}")]
    Corrupt {
        #[from]
        source: serde_json::Error,
    },
    #[error("Score store worker for {path} stopped before answering")]
    WorkerGone { path: PathBuf },
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn messages_carry_the_cause() {
        let err = StoreError::Io {
            path: PathBuf::from("score-tracker.json"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only volume"),
        };
        assert_eq!(
            err.to_string(),
            "Failed to access score store at score-tracker.json: read-only volume"
        );

        let corrupt: StoreError = serde_json::from_str::<u32>("[]").unwrap_err().into();
        assert!(
            corrupt
                .to_string()
                .starts_with("Score store is not a JSON object of strings: invalid type")
        );
    }
}
