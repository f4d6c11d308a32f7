use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Audio file in the temp dir, removed again on drop.
pub struct TempAudio(PathBuf);

impl TempAudio {
    pub fn new(name: &str, data: &[u8]) -> Self {
        let path = env::temp_dir().join(format!("{}-{}", std::process::id(), name));
        fs::write(&path, data).expect("write audio failed");
        TempAudio(path)
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl Drop for TempAudio {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removed_on_drop() {
        let audio = TempAudio::new("dropped.mp3", b"ID3");
        let path = audio.path().to_path_buf();
        assert!(path.is_file());
        drop(audio);
        assert!(!path.exists());
    }
}
