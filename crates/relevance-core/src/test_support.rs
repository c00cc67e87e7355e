//! Shell stand-in for QnA used by process tests
//!
//! The stub checks its flags, reads the query from the file argument or
//! stdin, records the file argument and its pid, and answers by echoing the
//! expression. Keywords inside the query select other behaviour:
//!
//! - `sleep`: exec into a long sleep
//! - `fail`: write to stderr and exit 3
//! - `warn`: write to stderr but succeed
//! - `multi`: emit several answers, including an empty one
//! - `nostring`: emit the "string operator" error line
//! - `nonewline`: emit one answer without a trailing newline
//! - `linger`: leave a background child holding stdout and stderr, then exit

use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::locator::EvaluatorPath;

pub(crate) struct StubEvaluator {
    pub dir: TempDir,
    pub path: EvaluatorPath,
}

impl StubEvaluator {
    pub fn install() -> Self {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let script_path = dir.path().join("qna");
        let script = STUB_SCRIPT.replace("@DIR@", &dir.path().display().to_string());
        std::fs::write(&script_path, script).unwrap();
        std::fs::set_permissions(&script_path, std::fs::Permissions::from_mode(0o755)).unwrap();

        let path = EvaluatorPath::new(script_path).unwrap();
        Self { dir, path }
    }

    /// File argument of the last file-staged run
    pub fn last_input_file(&self) -> Option<PathBuf> {
        std::fs::read_to_string(self.dir.path().join("last_arg"))
            .ok()
            .map(|s| PathBuf::from(s.trim()))
            .filter(|p| !p.as_os_str().is_empty())
    }

    /// Pid of the last stub process
    pub fn last_pid(&self) -> Option<i32> {
        read_trimmed(&self.dir.path().join("pid")).and_then(|s| s.parse().ok())
    }
}

fn read_trimmed(path: &Path) -> Option<String> {
    std::fs::read_to_string(path).ok().map(|s| s.trim().to_string())
}

const STUB_SCRIPT: &str = r#"#!/bin/sh
if [ "$1" != "-t" ] || [ "$2" != "-showtypes" ]; then
    echo "unexpected flags: $*" >&2
    exit 64
fi
echo "$3" > "@DIR@/last_arg"
echo $$ > "@DIR@/pid"
if [ -n "$3" ]; then
    input=$(cat "$3")
else
    input=$(cat)
fi
case "$input" in
    *sleep*) exec sleep 30 ;;
    *linger*) sleep 5 & printf 'A: x\n'; exit 0 ;;
    *nonewline*) printf 'A: last'; exit 0 ;;
    *fail*) echo "E: forced failure" >&2; exit 3 ;;
    *warn*) echo "stub warning" >&2 ;;
esac
printf '%s\n' "$input"
case "$input" in
    *multi*) printf 'A: one\nA: \nQ: A: three\n' ;;
    *nostring*) printf 'E: The operator "string" is not defined.\n' ;;
    *) printf 'A: %s\nT: string\n' "${input#Q: }" ;;
esac
"#;
