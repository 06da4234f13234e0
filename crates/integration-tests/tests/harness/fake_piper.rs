//! Shell scripts standing in for the Piper executable

use std::{
    fs,
    os::unix::fs::PermissionsExt,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

/// Writes a RIFF/WAVE header followed by the text read from stdin
const ECHO_WAV: &str = r#"
out=""
while [ $# -gt 0 ]; do
  case "$1" in
    --output_file) out="$2"; shift 2 ;;
    *) shift ;;
  esac
done
[ -n "$out" ] || { echo "missing --output_file" >&2; exit 2; }
printf 'RIFF0000WAVEfmt ' > "$out"
cat >> "$out"
"#;

/// A fake Piper install: executable, model file and a scratch directory
pub struct FakePiper {
    dir: TempDir,
    scratch: TempDir,
    binary: PathBuf,
    model: PathBuf,
}

impl FakePiper {
    /// Engine that answers with a WAV header followed by the input text
    pub fn echo() -> Self {
        Self::with_script(ECHO_WAV)
    }

    /// Engine that prints `stderr` and exits with status 1
    pub fn failing(stderr: &str) -> Self {
        Self::with_script(&format!("cat > /dev/null\nprintf '%s' '{stderr}' >&2\nexit 1"))
    }

    /// Engine that never finishes on its own
    pub fn hanging() -> Self {
        Self::with_script("exec sleep 60")
    }

    /// Engine that sleeps `delay` seconds before echoing
    pub fn slow_echo(delay: &str) -> Self {
        Self::with_script(&format!("sleep {delay}\n{ECHO_WAV}"))
    }

    fn with_script(body: &str) -> Self {
        let dir = tempfile::tempdir().expect("create fake piper dir");
        let scratch = tempfile::tempdir().expect("create scratch dir");

        let binary = dir.path().join("piper");
        fs::write(&binary, format!("#!/bin/sh\n{body}\n")).expect("write fake piper");
        fs::set_permissions(&binary, fs::Permissions::from_mode(0o755)).expect("chmod fake piper");

        let model = dir.path().join("de_DE-thorsten-medium.onnx");
        fs::write(&model, b"onnx").expect("write fake model");

        Self {
            dir,
            scratch,
            binary,
            model,
        }
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }

    pub fn model(&self) -> &Path {
        &self.model
    }

    pub fn scratch(&self) -> &Path {
        self.scratch.path()
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    /// Files currently left in the scratch directory
    pub fn leftover_files(&self) -> Vec<PathBuf> {
        fs::read_dir(self.scratch())
            .expect("read scratch dir")
            .map(|entry| entry.expect("scratch entry").path())
            .collect()
    }
}
