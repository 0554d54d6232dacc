use assert_cmd::Command;

pub fn postbook_cmd() -> Command {
    let mut cmd = Command::cargo_bin("postbook").unwrap();
    cmd.env_remove("POSTBOOK_FOLDER");
    cmd.env_remove("RUST_LOG");
    cmd
}
