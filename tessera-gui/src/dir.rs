use std::path::{Path, PathBuf};

/// The directory holding the Tessera configuration, session cache and logs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TesseraDirectory(PathBuf);

impl TesseraDirectory {
    pub fn new(path: PathBuf) -> Self {
        Self(path)
    }

    pub fn new_default() -> Result<Self, Box<dyn std::error::Error>> {
        default_datadir().map(TesseraDirectory::new)
    }

    pub fn exists(&self) -> bool {
        self.0.as_path().exists()
    }

    pub fn init(&self) -> Result<(), Box<dyn std::error::Error>> {
        create_directory(self.0.as_path())
    }

    pub fn path(&self) -> &Path {
        self.0.as_path()
    }
}

/// Absolute path to the default Tessera data directory.
///
/// This is a "Tessera" directory in the XDG standard configuration directory
/// for all OSes but Linux-based ones, for which it's `~/.tessera`.
fn default_datadir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    #[cfg(target_os = "linux")]
    let configs_dir = dirs::home_dir();

    #[cfg(not(target_os = "linux"))]
    let configs_dir = dirs::config_dir();

    if let Some(mut path) = configs_dir {
        #[cfg(target_os = "linux")]
        path.push(".tessera");

        #[cfg(not(target_os = "linux"))]
        path.push("Tessera");

        return Ok(path);
    }

    Err("Failed to get default data directory".into())
}

fn create_directory(datadir_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(unix)]
    return {
        use std::fs::DirBuilder;
        use std::os::unix::fs::DirBuilderExt;

        let mut builder = DirBuilder::new();
        builder.mode(0o700).recursive(true).create(datadir_path)?;
        Ok(())
    };

    // TODO: permissions on Windows..
    #[cfg(not(unix))]
    return {
        std::fs::create_dir_all(datadir_path)?;
        Ok(())
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_creates_the_directory_recursively() {
        let root = tempfile::tempdir().unwrap();
        let datadir = TesseraDirectory::new(root.path().join("nested").join("tessera"));
        assert!(!datadir.exists());
        datadir.init().unwrap();
        assert!(datadir.exists());
    }
}
