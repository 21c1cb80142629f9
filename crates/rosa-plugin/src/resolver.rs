//! Plugin resolver: scans the search path for plugin executables and dispatches
//! command lines to them.
//!
//! Two distinct lookups live here:
//! - [`PluginHandler::find_plugins`] lists every file on the search path that
//!   follows the naming rules, applying [`is_executable`] only to warn.
//! - [`PluginResolver::lookup`] resolves a single subcommand to one executable
//!   through the platform's own program lookup (via `which`), which is what
//!   [`PluginHandler::handle_plugin_command`] runs.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

use serde::Serialize;
use tracing::debug;

use crate::config::ResolverConfig;
use crate::error::{PluginError, PluginResult};
use crate::executable::{is_executable, FileMeta, Platform};
use crate::search_path::SearchPath;

/// A plugin found on the search path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Plugin {
    /// Subcommand the plugin provides: the file name, minus `<prefix>-` when
    /// it matched a prefix.
    pub name: String,
    /// Directory the executable was found in. This is NOT the path of the
    /// executable itself; callers that want to run a listed plugin have to
    /// rebuild the file path. Whether that is intended has not been settled.
    pub path: PathBuf,
}

/// The operations the CLI needs from a plugin resolution strategy.
pub trait PluginHandler {
    /// List plugin candidates on the search path, in scan order, writing a
    /// warning line to `out` for every match that is not executable.
    fn find_plugins_to(&self, out: &mut dyn Write) -> PluginResult<Vec<Plugin>>;

    /// [`PluginHandler::find_plugins_to`] with warnings on standard output.
    fn find_plugins(&self) -> PluginResult<Vec<Plugin>> {
        let mut out = anstream::stdout().lock();
        self.find_plugins_to(&mut out)
    }

    /// Run `cmd_args[0]` as a plugin with the remaining arguments.
    ///
    /// `Ok(false)` means no plugin exists for that name (or `cmd_args` is
    /// empty). `Ok(true)` means the plugin ran and exited cleanly. An error
    /// means a plugin was found but could not be started or exited
    /// unsuccessfully.
    fn handle_plugin_command(&self, cmd_args: &[String]) -> PluginResult<bool>;
}

#[derive(Debug, Clone)]
pub struct PluginResolver {
    config: ResolverConfig,
    /// `None` reads `PATH` on every call.
    search_path: Option<SearchPath>,
    platform: Platform,
}

impl Default for PluginResolver {
    fn default() -> Self {
        Self::new(ResolverConfig::default())
    }
}

impl PluginResolver {
    /// Resolver over the process `PATH`, read at call time.
    pub fn new(config: ResolverConfig) -> Self {
        Self {
            config,
            search_path: None,
            platform: Platform::current(),
        }
    }

    /// Resolver over a fixed search path instead of the environment.
    pub fn with_search_path(config: ResolverConfig, search_path: SearchPath) -> Self {
        Self {
            search_path: Some(search_path),
            ..Self::new(config)
        }
    }

    /// Override the platform whose executability rules the scan applies.
    #[must_use]
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    fn search_path(&self) -> SearchPath {
        self.search_path.clone().unwrap_or_else(SearchPath::from_env)
    }

    /// Resolve a subcommand name to the executable that would run it.
    ///
    /// An exact valid binary name is tried first, then `<prefix>-<name>` for
    /// each prefix in order.
    pub fn lookup(&self, name: &str) -> Option<PathBuf> {
        let search_path = self.search_path();
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let find = |candidate: &str| {
            which::which_in(candidate, Some(search_path.as_os_str()), &cwd).ok()
        };

        if self.config.is_valid_binary(name) {
            if let Some(path) = find(name) {
                return Some(path);
            }
        }

        self.config
            .valid_prefixes
            .iter()
            .find_map(|prefix| find(&format!("{prefix}-{name}")))
    }
}

/// Metadata for a name-matched entry, following symlinks. A dangling symlink
/// falls back to the link's own metadata.
fn candidate_meta(dir: &Path, file_path: &Path, entry: &fs::DirEntry) -> PluginResult<FileMeta> {
    let metadata = match fs::metadata(file_path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            entry.metadata().map_err(|e| PluginError::scan(dir, e))?
        }
        Err(e) => return Err(PluginError::scan(dir, e)),
    };
    Ok(FileMeta::from_metadata(file_path, &metadata))
}

impl PluginHandler for PluginResolver {
    /// Scan the search path, writing a warning line to `out` for every match
    /// that is not executable. Non-executable matches are still returned.
    ///
    /// Directories that do not exist are skipped. Any other failure to stat or
    /// read a directory aborts the scan and discards what was found so far.
    fn find_plugins_to(&self, out: &mut dyn Write) -> PluginResult<Vec<Plugin>> {
        let mut plugins = Vec::new();

        for dir in self.search_path().directories() {
            match fs::metadata(&dir) {
                Ok(_) => {}
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    debug!(?dir, "Search path directory does not exist, skipping");
                    continue;
                }
                Err(e) => return Err(PluginError::scan(dir, e)),
            }

            let entries = fs::read_dir(&dir).map_err(|e| PluginError::scan(&dir, e))?;
            for entry in entries {
                let entry = entry.map_err(|e| PluginError::scan(&dir, e))?;

                let Some(name) = entry
                    .file_name()
                    .to_str()
                    .and_then(|file_name| self.config.matches(file_name))
                else {
                    continue;
                };

                let file_path = entry.path();
                let meta = candidate_meta(&dir, &file_path, &entry)?;
                if meta.is_dir {
                    continue;
                }

                if !is_executable(&meta, self.platform) {
                    debug!(path = ?file_path, "Plugin candidate is not executable");
                    writeln!(
                        out,
                        "Warning: {} identified as an ROSA plugin, but it is not executable.",
                        file_path.display()
                    )
                    .ok();
                }

                debug!(%name, ?dir, "Discovered plugin");
                plugins.push(Plugin {
                    name,
                    path: dir.clone(),
                });
            }
        }

        Ok(plugins)
    }

    fn handle_plugin_command(&self, cmd_args: &[String]) -> PluginResult<bool> {
        let Some((name, args)) = cmd_args.split_first() else {
            return Ok(false);
        };

        let Some(path) = self.lookup(name) else {
            debug!(%name, "No plugin found for command");
            return Ok(false);
        };

        debug!(%name, ?path, "Dispatching to plugin");
        let status = Command::new(&path)
            .args(args)
            .status()
            .map_err(|source| PluginError::Spawn {
                path: path.clone(),
                source,
            })?;

        if status.success() {
            Ok(true)
        } else {
            Err(PluginError::Exit { path, status })
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::TempDir;

    fn write_file(dir: &Path, name: &str, contents: &str, mode: u32) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(mode)).unwrap();
        path
    }

    fn resolver_over(dirs: &[&Path]) -> PluginResolver {
        PluginResolver::with_search_path(
            ResolverConfig::default(),
            SearchPath::from_dirs(dirs).unwrap(),
        )
    }

    fn scan(resolver: &PluginResolver) -> (Vec<Plugin>, String) {
        let mut out = Vec::new();
        let plugins = resolver.find_plugins_to(&mut out).unwrap();
        (plugins, String::from_utf8(out).unwrap())
    }

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_find_matching_files_only() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "rosa-foo", "", 0o755);
        write_file(dir.path(), "aws", "", 0o755);
        write_file(dir.path(), "ocm", "", 0o755);
        write_file(dir.path(), "kubectl", "", 0o755);
        write_file(dir.path(), "rosafoo", "", 0o755);
        write_file(dir.path(), "notrosa-foo", "", 0o755);

        let (plugins, warnings) = scan(&resolver_over(&[dir.path()]));

        let mut names: Vec<&str> = plugins.iter().map(|p| p.name.as_str()).collect();
        names.sort_unstable();
        assert_eq!(names, vec!["aws", "foo", "ocm"]);
        assert!(plugins.iter().all(|p| p.path == dir.path()));
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_directories_are_not_candidates() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("rosa-subdir")).unwrap();
        fs::create_dir(dir.path().join("aws")).unwrap();

        let (plugins, warnings) = scan(&resolver_over(&[dir.path()]));
        assert!(plugins.is_empty());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_same_plugin_in_two_directories() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        write_file(first.path(), "rosa-foo", "", 0o755);
        write_file(second.path(), "rosa-foo", "", 0o755);

        let (plugins, _) = scan(&resolver_over(&[second.path(), first.path()]));

        let mut expected = vec![first.path().to_path_buf(), second.path().to_path_buf()];
        expected.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
        assert_eq!(
            plugins,
            expected
                .into_iter()
                .map(|path| Plugin {
                    name: "foo".to_string(),
                    path,
                })
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_duplicate_search_path_entries_scanned_once() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "rosa-foo", "", 0o755);

        let (plugins, _) = scan(&resolver_over(&[dir.path(), dir.path()]));
        assert_eq!(plugins.len(), 1);
    }

    #[test]
    fn test_non_executable_match_warns_once_and_is_kept() {
        let dir = TempDir::new().unwrap();
        let path = write_file(dir.path(), "rosa-foo", "", 0o644);

        let (plugins, warnings) = scan(&resolver_over(&[dir.path()]));

        assert_eq!(plugins.len(), 1);
        assert_eq!(plugins[0].name, "foo");
        assert_eq!(
            warnings,
            format!(
                "Warning: {} identified as an ROSA plugin, but it is not executable.\n",
                path.display()
            )
        );
    }

    #[test]
    fn test_non_matching_non_executable_file_is_silent() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "README", "", 0o644);

        let (plugins, warnings) = scan(&resolver_over(&[dir.path()]));
        assert!(plugins.is_empty());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_windows_rules_use_extension() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "rosa-foo.exe", "", 0o644);
        let script = write_file(dir.path(), "rosa-bar.sh", "", 0o755);

        let resolver = resolver_over(&[dir.path()]).with_platform(Platform::Windows);
        let (plugins, warnings) = scan(&resolver);

        assert_eq!(plugins.len(), 2);
        assert_eq!(warnings.lines().count(), 1);
        assert!(warnings.contains(&script.display().to_string()));
    }

    #[test]
    fn test_missing_directory_is_skipped() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "rosa-foo", "", 0o755);
        let missing = dir.path().join("does-not-exist");

        let (plugins, _) = scan(&resolver_over(&[missing.as_path(), dir.path()]));
        assert_eq!(plugins.len(), 1);
    }

    #[test]
    fn test_unreadable_entry_aborts_scan() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "rosa-foo", "", 0o755);
        // A plain file on the search path cannot be read as a directory.
        let not_a_dir = write_file(dir.path(), "zz-file", "", 0o644);

        let resolver = resolver_over(&[dir.path(), not_a_dir.as_path()]);
        let mut out = Vec::new();
        let err = resolver.find_plugins_to(&mut out).unwrap_err();

        match err {
            PluginError::Scan { dir: failed, .. } => assert_eq!(failed, not_a_dir),
            other => panic!("Expected Scan error, got {other:?}"),
        }
    }

    #[test]
    fn test_dangling_symlink_does_not_abort_scan() {
        let dir = TempDir::new().unwrap();
        std::os::unix::fs::symlink(dir.path().join("nowhere"), dir.path().join("rosa-broken"))
            .unwrap();

        let (plugins, _) = scan(&resolver_over(&[dir.path()]));
        assert_eq!(plugins.len(), 1);
        assert_eq!(plugins[0].name, "broken");
    }

    #[test]
    fn test_empty_search_path_finds_nothing() {
        let resolver =
            PluginResolver::with_search_path(ResolverConfig::default(), SearchPath::default());
        let (plugins, _) = scan(&resolver);
        assert!(plugins.is_empty());
    }

    #[test]
    #[serial]
    fn test_find_plugins_reads_path_env() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "rosa-from-env", "", 0o755);

        let saved = std::env::var_os("PATH");
        std::env::set_var("PATH", dir.path());
        let mut out = Vec::new();
        let result = PluginResolver::default().find_plugins_to(&mut out);
        match saved {
            Some(path) => std::env::set_var("PATH", path),
            None => std::env::remove_var("PATH"),
        }

        let plugins = result.unwrap();
        assert_eq!(plugins.len(), 1);
        assert_eq!(plugins[0].name, "from-env");
    }

    #[test]
    fn test_lookup_prefers_valid_binary() {
        let dir = TempDir::new().unwrap();
        let aws = write_file(dir.path(), "aws", "", 0o755);
        write_file(dir.path(), "rosa-aws", "", 0o755);

        assert_eq!(resolver_over(&[dir.path()]).lookup("aws"), Some(aws));
    }

    #[test]
    fn test_lookup_uses_prefix_in_order() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "rosa-foo", "", 0o755);
        let ocm_foo = write_file(dir.path(), "ocm-foo", "", 0o755);

        let resolver = PluginResolver::with_search_path(
            ResolverConfig::new(Vec::<String>::new(), ["ocm", "rosa"]),
            SearchPath::from_dirs([dir.path()]).unwrap(),
        );
        assert_eq!(resolver.lookup("foo"), Some(ocm_foo));
    }

    #[test]
    fn test_lookup_ignores_unprefixed_non_binary() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "kubectl", "", 0o755);

        assert_eq!(resolver_over(&[dir.path()]).lookup("kubectl"), None);
    }

    #[test]
    fn test_handle_empty_args() {
        let resolver = resolver_over(&[]);
        assert!(!resolver.handle_plugin_command(&[]).unwrap());
    }

    #[test]
    fn test_handle_unknown_command() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "rosa-foo", "", 0o755);

        let resolver = resolver_over(&[dir.path()]);
        assert!(!resolver
            .handle_plugin_command(&args(&["unknownthing"]))
            .unwrap());
    }

    #[test]
    #[serial]
    fn test_handle_runs_plugin_with_arguments() {
        let dir = TempDir::new().unwrap();
        let out_file = dir.path().join("args.txt");
        write_file(
            dir.path(),
            "rosa-echo",
            &format!("#!/bin/sh\nprintf '%s\\n' \"$@\" > '{}'\n", out_file.display()),
            0o755,
        );

        let resolver = resolver_over(&[dir.path()]);
        let found = resolver
            .handle_plugin_command(&args(&["echo", "--flag", "value with space"]))
            .unwrap();

        assert!(found);
        assert_eq!(
            fs::read_to_string(&out_file).unwrap(),
            "--flag\nvalue with space\n"
        );
    }

    #[test]
    #[serial]
    fn test_handle_reports_child_exit_status() {
        let dir = TempDir::new().unwrap();
        let aws = write_file(dir.path(), "aws", "#!/bin/sh\nexit 3\n", 0o755);

        let resolver = resolver_over(&[dir.path()]);
        let err = resolver
            .handle_plugin_command(&args(&["aws", "--version"]))
            .unwrap_err();

        assert_eq!(err.exit_code(), Some(3));
        match err {
            PluginError::Exit { path, .. } => assert_eq!(path, aws),
            other => panic!("Expected Exit error, got {other:?}"),
        }
    }
}
