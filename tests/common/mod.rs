use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Isolated environment with a stub `exiftool` so tests never depend on a
/// real installation. The stub records its argument list for assertions and
/// prints a canned JSON record array.
pub struct TestEnv {
    tmp: TempDir,
    exiftool: PathBuf,
    args_file: PathBuf,
}

impl TestEnv {
    /// Stub backend answering every invocation with the given record.
    pub fn with_record(record: Value) -> Self {
        Self::build(&Value::Array(vec![record]).to_string(), 0, "")
    }

    /// Stub backend that fails with the given status and stderr message.
    pub fn failing(status: i32, message: &str) -> Self {
        Self::build("", status, message)
    }

    fn build(stdout_json: &str, status: i32, stderr: &str) -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let exiftool = tmp.path().join("exiftool");
        let args_file = tmp.path().join("args.txt");

        let mut script = format!(
            "#!/bin/sh\nprintf '%s\\n' \"$@\" > '{}'\n",
            args_file.display()
        );
        if !stderr.is_empty() {
            script.push_str(&format!("echo '{stderr}' >&2\n"));
        }
        if !stdout_json.is_empty() {
            script.push_str(&format!("cat <<'EOF'\n{stdout_json}\nEOF\n"));
        }
        script.push_str(&format!("exit {status}\n"));

        fs::write(&exiftool, script).expect("write stub exiftool");
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(&exiftool).expect("stub metadata").permissions();
            perms.set_mode(0o755);
            fs::set_permissions(&exiftool, perms).expect("make stub executable");
        }

        Self {
            tmp,
            exiftool,
            args_file,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("tagcheck").expect("binary under test");
        cmd.arg("--exiftool").arg(&self.exiftool);
        cmd
    }

    /// Write a fixture file (e.g. an `--expect` JSON document) into the
    /// environment and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.tmp.path().join(name);
        fs::write(&path, contents).expect("write fixture file");
        path
    }

    /// Run a subcommand expected to succeed and parse its stdout as JSON.
    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    /// Argument list the stub backend was last invoked with.
    pub fn backend_args(&self) -> Vec<String> {
        fs::read_to_string(&self.args_file)
            .expect("stub was invoked")
            .lines()
            .map(str::to_string)
            .collect()
    }
}
