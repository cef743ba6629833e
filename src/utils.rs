use std::path::Path;

/// Normalize a path for diagnostics: absolute with forward slashes when the
/// file exists, otherwise the caller's own spelling (forward slashes still forced).
pub fn display_path(path: &Path) -> String {
    // dunce strips the \\?\ prefix std::fs::canonicalize adds on Windows
    let resolved = dunce::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let final_path = resolved.to_string_lossy().replace('\\', "/");

    if cfg!(windows) {
        upper_drive_letter(final_path)
    } else {
        final_path
    }
}

/// Windows Drive Letter Normalization (C:/ not c:/)
fn upper_drive_letter(path: String) -> String {
    let mut chars = path.chars();
    match (chars.next(), chars.next()) {
        (Some(drive), Some(':')) => {
            format!("{}{}", drive.to_uppercase(), &path[drive.len_utf8()..])
        }
        _ => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_path_keeps_caller_spelling() {
        let shown = display_path(Path::new("build/us/does_not_exist.map"));
        assert_eq!(shown, "build/us/does_not_exist.map");
    }

    #[test]
    fn existing_path_is_absolute() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = dir.path().join("game.map");
        std::fs::write(&file, "").expect("write map");

        let shown = display_path(&file);
        assert!(Path::new(&shown).is_absolute() || shown.starts_with('/'));
        assert!(shown.ends_with("/game.map"));
        assert!(!shown.contains('\\'));
    }

    #[test]
    fn drive_letter_is_uppercased() {
        assert_eq!(upper_drive_letter("c:/build/game.map".into()), "C:/build/game.map");
        assert_eq!(upper_drive_letter("/build/game.map".into()), "/build/game.map");
        assert_eq!(upper_drive_letter("é:/build".into()), "É:/build");
        assert_eq!(upper_drive_letter("ér/build".into()), "ér/build");
        assert_eq!(upper_drive_letter(String::new()), "");
    }
}
