// myspell-cli: shared utilities for CLI tools.

use std::path::{Path, PathBuf};
use std::process;

use myspell_dict::Dictionary;
use myspell_dict::dictionary::{AFFIX_EXTENSION, WORDS_EXTENSION, dictionary_file};

/// Environment variable naming an extra dictionary directory.
pub const DICT_PATH_ENV: &str = "MYSPELL_DICT_PATH";

/// Search for `<symbol>.aff` + `<symbol>.dic` and load the dictionary.
///
/// Search order:
/// 1. `dict_path` argument (if provided)
/// 2. `MYSPELL_DICT_PATH` environment variable
/// 3. `~/.myspell`
/// 4. `/usr/share/myspell`, `/usr/share/hunspell`
/// 5. Current working directory
pub fn load_dictionary(dict_path: Option<&str>, symbol: &str) -> Result<Dictionary, String> {
    let dir = find_dictionary(&build_search_paths(dict_path), symbol)?;
    Dictionary::load(&dir, symbol).map_err(|e| format!("failed to load dictionary: {e}"))
}

/// Return the first directory holding both files of dictionary `symbol`.
pub fn find_dictionary(search_paths: &[PathBuf], symbol: &str) -> Result<PathBuf, String> {
    search_paths
        .iter()
        .find(|dir| has_dictionary(dir, symbol))
        .cloned()
        .ok_or_else(|| {
            format!(
                "could not find {symbol}.{AFFIX_EXTENSION} and {symbol}.{WORDS_EXTENSION} in any of the search paths:\n{}",
                search_paths
                    .iter()
                    .map(|p| format!("  - {}", p.display()))
                    .collect::<Vec<_>>()
                    .join("\n")
            )
        })
}

fn has_dictionary(dir: &Path, symbol: &str) -> bool {
    dictionary_file(dir, symbol, AFFIX_EXTENSION).is_file()
        && dictionary_file(dir, symbol, WORDS_EXTENSION).is_file()
}

/// Build the list of directories to search for dictionary files.
pub fn build_search_paths(dict_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // 1. Explicit path from argument
    if let Some(p) = dict_path {
        paths.push(PathBuf::from(p));
    }

    // 2. MYSPELL_DICT_PATH environment variable
    if let Ok(env_path) = std::env::var(DICT_PATH_ENV) {
        paths.push(PathBuf::from(env_path));
    }

    // 3. Home directory
    if let Some(home) = home_dir() {
        paths.push(home.join(".myspell"));
    }

    // 4. System paths
    paths.push(PathBuf::from("/usr/share/myspell"));
    paths.push(PathBuf::from("/usr/share/hunspell"));

    // 5. Current directory
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd);
    }

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Parse a `--dict-path=PATH` or `-d PATH` argument from command line args.
///
/// Returns `(dict_path, remaining_args)`.
pub fn parse_dict_path(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut dict_path = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--dict-path=") {
            dict_path = Some(val.to_string());
        } else if arg == "--dict-path" || arg == "-d" {
            if i + 1 < args.len() {
                dict_path = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                fatal(&format!("{arg} requires a value"));
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (dict_path, remaining)
}

/// Remove a boolean flag from `args`, returning whether it was present.
pub fn take_flag(args: &mut Vec<String>, names: &[&str]) -> bool {
    let before = args.len();
    args.retain(|a| !names.contains(&a.as_str()));
    args.len() != before
}

/// Remove `NAME VALUE` (or `NAME=VALUE`) from `args` and return the value.
pub fn take_option(args: &mut Vec<String>, names: &[&str]) -> Option<String> {
    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];
        for name in names {
            if let Some(val) = arg.strip_prefix(name).and_then(|rest| rest.strip_prefix('=')) {
                let val = val.to_string();
                args.remove(i);
                return Some(val);
            }
        }
        if names.contains(&arg.as_str()) {
            if i + 1 >= args.len() {
                fatal(&format!("{arg} requires a value"));
            }
            let val = args.remove(i + 1);
            args.remove(i);
            return Some(val);
        }
        i += 1;
    }
    None
}

/// Initialize logging from `RUST_LOG`, defaulting to warnings.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn dict_path_short_and_long() {
        let (path, rest) = parse_dict_path(&args(&["-d", "/tmp/x", "pl_PL"]));
        assert_eq!(path.as_deref(), Some("/tmp/x"));
        assert_eq!(rest, args(&["pl_PL"]));

        let (path, rest) = parse_dict_path(&args(&["pl_PL", "--dict-path=/opt/dicts"]));
        assert_eq!(path.as_deref(), Some("/opt/dicts"));
        assert_eq!(rest, args(&["pl_PL"]));

        let (path, _) = parse_dict_path(&args(&["pl_PL"]));
        assert!(path.is_none());
    }

    #[test]
    fn flags_and_options() {
        let mut a = args(&["pl_PL", "--keep-going", "-o", "out.all", "-j=4"]);
        assert!(take_flag(&mut a, &["--keep-going"]));
        assert!(!take_flag(&mut a, &["--list"]));
        assert_eq!(take_option(&mut a, &["-o", "--output"]).as_deref(), Some("out.all"));
        assert_eq!(take_option(&mut a, &["-j", "--jobs"]).as_deref(), Some("4"));
        assert_eq!(take_option(&mut a, &["--ignore"]), None);
        assert_eq!(a, args(&["pl_PL"]));
    }

    #[test]
    fn help_detection() {
        assert!(wants_help(&args(&["pl_PL", "-h"])));
        assert!(!wants_help(&args(&["pl_PL"])));
    }

    #[test]
    fn explicit_path_is_searched_first() {
        let paths = build_search_paths(Some("/opt/dicts"));
        assert_eq!(paths[0], PathBuf::from("/opt/dicts"));
        assert!(paths.contains(&PathBuf::from("/usr/share/hunspell")));
    }

    #[test]
    fn finds_directory_with_both_files() {
        let only_aff = tempfile::tempdir().unwrap();
        std::fs::write(only_aff.path().join("pl_PL.aff"), "SET UTF-8\n").unwrap();
        let both = tempfile::tempdir().unwrap();
        std::fs::write(both.path().join("pl_PL.aff"), "SET UTF-8\n").unwrap();
        std::fs::write(both.path().join("pl_PL.dic"), "0\n").unwrap();

        let search = vec![only_aff.path().to_path_buf(), both.path().to_path_buf()];
        assert_eq!(find_dictionary(&search, "pl_PL").unwrap(), both.path());

        let err = find_dictionary(&search[..1], "pl_PL").unwrap_err();
        assert!(err.contains("pl_PL.aff"));
    }
}
