//! Integration tests that run the CLI binary.

fn bin() -> std::process::Command {
    // CARGO_BIN_EXE_<name> uses the binary target name; hyphens require concat! for env!()
    let bin = env!(concat!("CARGO_BIN_EXE_groq", "-", "chat"));
    let mut cmd = std::process::Command::new(bin);
    cmd.env_remove("GROQ_API_KEY");
    cmd.env_remove("GROQ_MODEL");
    cmd.env_remove("GROQ_MEMORY_LENGTH");
    cmd
}

#[test]
fn cli_help_succeeds_and_outputs_usage() {
    let output = bin()
        .arg("--help")
        .output()
        .expect("binary not found - run cargo build first");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("groq-chat"), "expected usage text in output");
    assert!(stdout.contains("GROQ_API_KEY"));
}

#[test]
fn cli_version_succeeds() {
    let output = bin()
        .arg("--version")
        .output()
        .expect("binary not found - run cargo build first");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("groq-chat"));
}

#[test]
fn cli_models_lists_choices_without_api_key() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin()
        .arg("models")
        .current_dir(tmp.path())
        .output()
        .expect("binary not found - run cargo build first");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    for id in [
        "mixtral-8x7b-32768",
        "gemma2-9b-it",
        "llama3-8b-8192",
        "llama-3.1-8b-instant",
    ] {
        assert!(stdout.contains(id), "missing {} in: {}", id, stdout);
    }
}

#[test]
fn cli_prompt_without_api_key_exits_with_error() {
    // Run from temp dir so dotenv() won't load .env from project root
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin()
        .arg("-p")
        .arg("hello")
        .current_dir(tmp.path())
        .output()
        .expect("binary not found - run cargo build first");

    assert!(
        !output.status.success(),
        "expected failure when GROQ_API_KEY is not set"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("GROQ_API_KEY not found in environment variables"),
        "stderr: {}",
        stderr
    );
}

#[test]
fn cli_completions_generates_script() {
    let output = bin()
        .args(["completions", "bash"])
        .output()
        .expect("binary not found - run cargo build first");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("groq-chat"));
}
