use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Regular files exactly `depth` levels below `dir` whose extension is `ext`.
/// Symlinks are followed, so a linked file counts as the file it points at.
pub fn files_with_extension_at_depth(dir: &Path, ext: &str, depth: usize) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .follow_links(true)
        .min_depth(depth)
        .max_depth(depth)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.path().extension().and_then(|e| e.to_str()) == Some(ext))
        .map(|entry| entry.into_path())
        .collect()
}

/// Total size in bytes of the regular files directly inside `dir`.
pub fn direct_file_bytes(dir: &Path) -> u64 {
    WalkDir::new(dir)
        .follow_links(true)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| entry.metadata().ok())
        .map(|metadata| metadata.len())
        .sum()
}

pub fn file_exists(path: &Path) -> bool {
    path.is_file()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn extension_filter_respects_depth() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::create_dir_all(dir.path().join("pkg/inner")).expect("nested dirs should create");
        fs::write(dir.path().join("top.py"), "").expect("top file should write");
        fs::write(dir.path().join("pkg/mod.py"), "").expect("nested file should write");
        fs::write(dir.path().join("pkg/inner/deep.py"), "").expect("deep file should write");
        fs::write(dir.path().join("notes.txt"), "").expect("text file should write");

        assert_eq!(files_with_extension_at_depth(dir.path(), "py", 1).len(), 1);
        assert_eq!(files_with_extension_at_depth(dir.path(), "py", 2).len(), 1);
    }

    #[test]
    fn direct_file_bytes_ignores_subdirectories() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::create_dir_all(dir.path().join("sub")).expect("sub dir should create");
        fs::write(dir.path().join("a.bin"), vec![0u8; 100]).expect("a should write");
        fs::write(dir.path().join("sub/b.bin"), vec![0u8; 900]).expect("b should write");

        assert_eq!(direct_file_bytes(dir.path()), 100);
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_files_are_counted_and_sized() {
        let target = TempDir::new().expect("target dir should be created");
        let dir = TempDir::new().expect("temp dir should be created");
        let real = target.path().join("main.py");
        fs::write(&real, vec![b'#'; 300]).expect("real file should write");
        std::os::unix::fs::symlink(&real, dir.path().join("main.py"))
            .expect("symlink should be created");
        std::os::unix::fs::symlink(target.path().join("missing.py"), dir.path().join("dead.py"))
            .expect("dangling symlink should be created");

        assert_eq!(files_with_extension_at_depth(dir.path(), "py", 1).len(), 1);
        assert_eq!(direct_file_bytes(dir.path()), 300);
    }
}
