use std::fs;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use std::thread;

use crate::error::{LogoError, Result};
use crate::logo::LogoImage;

pub type LogoReceiver = Receiver<Result<LogoImage>>;

/// Reads and decodes a logo payload on a background thread.
///
/// Exactly one result is sent, after which the sender is dropped.
pub fn spawn<P: Into<PathBuf>>(path: P) -> LogoReceiver {
    let path = path.into();
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let _ = tx.send(load(path));
    });

    rx
}

pub fn load(path: PathBuf) -> Result<LogoImage> {
    let text = fs::read_to_string(&path).map_err(|source| LogoError::Io {
        path: path.clone(),
        source,
    })?;
    let logo = LogoImage::parse(&text)?;
    log::debug!("loaded logo from {}", path.display());
    Ok(logo)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::process;
    use std::time::Duration;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = env::temp_dir().join(format!("starsim-{}-{}", process::id(), name));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn spawn_delivers_decoded_logo() {
        // 1x1, one red pixel
        let path = temp_file("ok.txt", "1,1,/wAA\n");
        let rx = spawn(path.clone());

        let logo = rx.recv_timeout(Duration::from_secs(5)).unwrap().unwrap();
        assert_eq!(logo.pixels(), &[starcore::Color::RED]);
        assert!(rx.recv_timeout(Duration::from_secs(5)).is_err());
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn spawn_reports_missing_file() {
        let rx = spawn(env::temp_dir().join("starsim-definitely-missing.txt"));
        match rx.recv_timeout(Duration::from_secs(5)).unwrap() {
            Err(LogoError::Io { path, .. }) => {
                assert!(path.ends_with("starsim-definitely-missing.txt"))
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn load_reports_malformed_payload() {
        let path = temp_file("bad.txt", "not a logo");
        assert!(matches!(load(path.clone()), Err(LogoError::FieldCount(1))));
        fs::remove_file(path).unwrap();
    }
}
