use std::{
    error::Error,
    io,
    path::Path,
    process::{Command, Output},
    str,
};

const PASKALC_PATH: &str = "./target/debug/paskalc";

fn run_paskalc(src_path: &Path, extra_args: &[&str]) -> Result<Output, io::Error> {
    Command::new(PASKALC_PATH).arg(src_path).args(extra_args).output()
}

/// Runs `paskalc` over `src_path` and asserts it exits successfully.
/// Returns the captured stdout so callers can assert on dump output.
pub fn check_analysis_succeeds(src_path: &Path) -> Result<String, Box<dyn Error>> {
    check_analysis_succeeds_with(src_path, &[])
}

pub fn check_analysis_succeeds_with(
    src_path: &Path,
    extra_args: &[&str],
) -> Result<String, Box<dyn Error>> {
    let output = run_paskalc(src_path, extra_args)?;
    let stdout = str::from_utf8(&output.stdout)?.to_string();
    let stderr = str::from_utf8(&output.stderr)?;

    assert!(
        output.status.success(),
        "paskalc exited with status {:?} on '{}': {stderr}",
        output.status.code(),
        src_path.display(),
    );

    Ok(stdout)
}

/// Runs `paskalc` over `src_path` and asserts it exits with a failure status
/// (a lexical, syntax, or semantic error). Returns the captured stderr so
/// callers can assert on the diagnostic's shape.
pub fn check_analysis_fails(src_path: &Path) -> Result<String, Box<dyn Error>> {
    let output = run_paskalc(src_path, &[])?;
    let stderr = str::from_utf8(&output.stderr)?.to_string();

    assert!(
        !output.status.success(),
        "expected paskalc to reject '{}', but it exited successfully",
        src_path.display(),
    );

    Ok(stderr)
}
