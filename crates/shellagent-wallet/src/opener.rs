//! Opening links outside the dashboard

use std::process::{Command, Stdio};
use std::sync::Mutex;

use crate::{Result, WalletError};

/// Something that can show a URL to the user
pub trait LinkOpener: Send + Sync {
    fn open(&self, url: &str) -> Result<()>;
}

/// Hands the URL to the platform's default opener without waiting for it.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLinkOpener;

impl SystemLinkOpener {
    fn command(url: &str) -> Command {
        if cfg!(target_os = "macos") {
            let mut cmd = Command::new("open");
            cmd.arg(url);
            cmd
        } else if cfg!(target_os = "windows") {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", "start", "", url]);
            cmd
        } else {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(url);
            cmd
        }
    }
}

impl LinkOpener for SystemLinkOpener {
    fn open(&self, url: &str) -> Result<()> {
        Self::command(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(|_| ())
            .map_err(|e| WalletError::OpenLink {
                url: url.to_string(),
                message: e.to_string(),
            })
    }
}

/// Remembers every URL instead of opening it. Used for headless runs.
#[derive(Debug, Default)]
pub struct RecordingLinkOpener {
    opened: Mutex<Vec<String>>,
}

impl RecordingLinkOpener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened
            .lock()
            .map(|urls| urls.clone())
            .unwrap_or_default()
    }
}

impl LinkOpener for RecordingLinkOpener {
    fn open(&self, url: &str) -> Result<()> {
        if let Ok(mut urls) = self.opened.lock() {
            urls.push(url.to_string());
        }
        tracing::info!(%url, "link recorded");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_opener_keeps_order() {
        let opener = RecordingLinkOpener::new();
        opener.open("https://phantom.app/").unwrap();
        opener.open("https://x.com/shellagents").unwrap();
        assert_eq!(
            opener.opened(),
            vec!["https://phantom.app/", "https://x.com/shellagents"]
        );
    }
}
