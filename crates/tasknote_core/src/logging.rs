//! Rolling file logs for the task and note manager.
//!
//! # Invariants
//! - At most one logger per process; a second `init_logging` with the same
//!   level and directory is a no-op, anything else is an error.
//! - Initialization never panics.
//!
//! Events use `event=<name> module=<module> status=<ok|error|...>` followed
//! by extra `key=value` pairs. Record titles and note content are never
//! logged, only ids and counts.

use flexi_logger::{
    Cleanup, Criterion, FileSpec, LogSpecification, Logger, LoggerHandle, Naming, WriteMode,
};
use log::{error, info, LevelFilter};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "tasknote";
const ROTATE_AT_BYTES: u64 = 10 * 1024 * 1024;
const KEPT_LOG_FILES: usize = 5;
const PANIC_EXCERPT_CHARS: usize = 160;
const BUILD_PROFILE: &str = if cfg!(debug_assertions) {
    "debug"
} else {
    "release"
};

static ACTIVE: OnceCell<ActiveLogger> = OnceCell::new();
static PANIC_HOOK: OnceCell<()> = OnceCell::new();

struct ActiveLogger {
    level: LevelFilter,
    log_dir: PathBuf,
    _handle: LoggerHandle,
}

impl ActiveLogger {
    fn matches(&self, level: LevelFilter, log_dir: &Path) -> Result<(), String> {
        if self.log_dir != log_dir {
            return Err(format!(
                "logs already go to `{}`, cannot move them to `{}`",
                self.log_dir.display(),
                log_dir.display()
            ));
        }
        if self.level != level {
            return Err(format!(
                "logging already runs at `{}`, cannot change it to `{level}`",
                self.level
            ));
        }
        Ok(())
    }
}

/// Starts file logging at `level` under the absolute directory `log_dir`.
///
/// # Errors
/// - Unknown level name (`warning` is accepted for `warn`; `off` is refused).
/// - Blank or relative `log_dir`, or a directory that cannot be created.
/// - Logging already active with another level or directory.
pub fn init_logging(level: &str, log_dir: &str) -> Result<(), String> {
    let level = parse_level(level)?;
    let log_dir = absolute_log_dir(log_dir)?;

    if let Some(active) = ACTIVE.get() {
        return active.matches(level, &log_dir);
    }
    ACTIVE
        .get_or_try_init(|| start(level, log_dir.clone()))?
        .matches(level, &log_dir)
}

fn start(level: LevelFilter, log_dir: PathBuf) -> Result<ActiveLogger, String> {
    std::fs::create_dir_all(&log_dir)
        .map_err(|err| format!("cannot create log directory `{}`: {err}", log_dir.display()))?;

    let handle = Logger::with(LogSpecification::builder().default(level).build())
        .log_to_file(
            FileSpec::default()
                .directory(log_dir.as_path())
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(ROTATE_AT_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(KEPT_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| format!("logger backend did not start: {err}"))?;

    hook_panics();

    info!(
        "event=logging_init module=logging status=ok level={level} log_dir={} platform={} build={BUILD_PROFILE} version={}",
        log_dir.display(),
        std::env::consts::OS,
        env!("CARGO_PKG_VERSION")
    );

    Ok(ActiveLogger {
        level,
        log_dir,
        _handle: handle,
    })
}

/// Level and directory of the running logger, if any.
pub fn logging_status() -> Option<(LevelFilter, PathBuf)> {
    ACTIVE
        .get()
        .map(|active| (active.level, active.log_dir.clone()))
}

/// `debug` in debug builds, `info` in release builds.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn parse_level(raw: &str) -> Result<LevelFilter, String> {
    let name = raw.trim();
    let name = if name.eq_ignore_ascii_case("warning") {
        "warn"
    } else {
        name
    };
    match name.parse::<LevelFilter>() {
        Ok(LevelFilter::Off) | Err(_) => Err(format!(
            "unknown log level `{}`, use one of trace, debug, info, warn, error",
            raw.trim()
        )),
        Ok(level) => Ok(level),
    }
}

fn absolute_log_dir(raw: &str) -> Result<PathBuf, String> {
    let path = Path::new(raw.trim());
    if path.as_os_str().is_empty() {
        Err("no log directory given".to_string())
    } else if path.is_relative() {
        Err(format!("log directory `{}` is not absolute", path.display()))
    } else {
        Ok(path.to_path_buf())
    }
}

fn hook_panics() {
    if PANIC_HOOK.set(()).is_err() {
        return;
    }

    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info.location().map_or_else(
            || "unknown".to_string(),
            |loc| format!("{}:{}", loc.file(), loc.line()),
        );
        let payload = panic_info.payload();
        let message = payload
            .downcast_ref::<&str>()
            .copied()
            .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
            .unwrap_or("non-string panic payload");
        error!(
            "event=panic_captured module=logging status=error location={location} payload={}",
            one_line_excerpt(message, PANIC_EXCERPT_CHARS)
        );
        previous(panic_info);
    }));
}

/// First `max_chars` characters of `text` on a single line, with `...` when cut.
fn one_line_excerpt(text: &str, max_chars: usize) -> String {
    let mut excerpt = text
        .chars()
        .take(max_chars)
        .map(|ch| if matches!(ch, '\n' | '\r') { ' ' } else { ch })
        .collect::<String>();
    if text.chars().nth(max_chars).is_some() {
        excerpt.push_str("...");
    }
    excerpt
}

#[cfg(test)]
mod tests {
    use super::{absolute_log_dir, init_logging, logging_status, one_line_excerpt, parse_level};
    use log::LevelFilter;

    #[test]
    fn level_names_are_case_insensitive_with_warning_alias() {
        assert_eq!(parse_level(" Debug ").unwrap(), LevelFilter::Debug);
        assert_eq!(parse_level("WARNING").unwrap(), LevelFilter::Warn);
        assert!(parse_level("off").unwrap_err().contains("`off`"));
        assert!(parse_level("chatty").is_err());
    }

    #[test]
    fn log_dir_must_be_given_and_absolute() {
        assert_eq!(absolute_log_dir("  ").unwrap_err(), "no log directory given");
        assert!(absolute_log_dir("logs/dev").unwrap_err().contains("not absolute"));
        let dir = tempfile::tempdir().unwrap();
        let padded = format!(" {} ", dir.path().display());
        assert_eq!(absolute_log_dir(&padded).unwrap(), dir.path());
    }

    #[test]
    fn panic_excerpt_is_one_line_and_capped() {
        assert_eq!(one_line_excerpt("note\r\nbody", 20), "note  body");
        assert_eq!(one_line_excerpt("abcdef", 3), "abc...");
        assert_eq!(one_line_excerpt("abc", 3), "abc");
    }

    #[test]
    fn second_init_must_match_the_first() {
        let log_dir = tempfile::tempdir().unwrap();
        let other_dir = tempfile::tempdir().unwrap();
        let log_dir_str = log_dir.path().to_str().unwrap().to_string();
        let other_dir_str = other_dir.path().to_str().unwrap().to_string();

        init_logging("info", &log_dir_str).expect("first init should succeed");
        init_logging(" INFO", &log_dir_str).expect("same config should be accepted");

        let level_error = init_logging("debug", &log_dir_str).unwrap_err();
        assert!(level_error.contains("cannot change"), "{level_error}");

        let dir_error = init_logging("info", &other_dir_str).unwrap_err();
        assert!(dir_error.contains("cannot move"), "{dir_error}");

        let (level, dir) = logging_status().expect("logging should be active");
        assert_eq!(level, LevelFilter::Info);
        assert_eq!(dir, log_dir.path());
    }
}
