use assert_cmd::Command;
use predicates::prelude::*;

fn solve(maze: &str) -> Command {
    let mut cmd = Command::cargo_bin("maze_pathfinding").unwrap();
    cmd.arg(format!("tests/data/{maze}"))
        .arg("--config")
        .arg("tests/data/astar_config.yaml");
    cmd
}

#[test]
fn prints_marked_maze() {
    solve("maze1.txt").assert().success().stdout(
        "Found path of length 4 steps.\n#####\n#B..#\n#P#.#\n#PPE#\n#####\n",
    );
}

#[test]
fn custom_markers_from_config() {
    solve("tunnels.txt")
        .assert()
        .success()
        .stdout(predicate::str::contains("Found path of length 6 steps."))
        .stdout(predicate::str::contains("XSPP XX"))
        .stdout(predicate::str::contains("XXXPX X"))
        .stdout(predicate::str::contains("X  PPGX"));
}

#[test]
fn no_path_exits_with_failure() {
    solve("blocked.txt")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("No path found from start to end."));
}

#[test]
fn missing_config_entry() {
    solve("unknown.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No configuration for 'unknown'"));
}

#[test]
fn missing_begin_marker() {
    // no_begin has no config entry of its own, so point it at a config that has one
    let mut cmd = Command::cargo_bin("maze_pathfinding").unwrap();
    cmd.arg("tests/data/no_begin.txt")
        .arg("--config")
        .arg("tests/data/no_begin.yaml");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("begin marker 'B'"));
}

#[test]
fn missing_maze_file() {
    solve("does_not_exist.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read maze"));
}
