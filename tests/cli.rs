use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};
use tempfile::TempDir;

const BIN_NAME: &str = "budget-planner";

/// Command isolated from the user's real config directory
fn planner(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("BUDGET_PLANNER_DIR", dir.path());
    cmd.env_remove("BUDGET_PLANNER_LOG");
    cmd
}

#[test]
fn summary_shows_seeded_totals() {
    let dir = TempDir::new().unwrap();
    planner(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(contains("Budget:        ৳ 20000"))
        .stdout(contains("Remaining:     ৳ 17000"))
        .stdout(contains("Spent so far:  ৳ 3000"))
        .stdout(contains("Shopping").and(contains("Transportation")).and(contains("Fuel")));
}

#[test]
fn summary_ignores_zero_budget() {
    let dir = TempDir::new().unwrap();
    planner(&dir)
        .args(["summary", "--budget", "0"])
        .assert()
        .success()
        .stdout(contains("Budget:        ৳ 20000"))
        .stderr(contains("Budget unchanged: budget cannot be zero"));
}

#[test]
fn summary_accepts_new_budget_and_sort() {
    let dir = TempDir::new().unwrap();
    let output = planner(&dir)
        .args(["summary", "--budget", "500", "--sort", "asc"])
        .assert()
        .success()
        .stdout(contains("Remaining:     -৳ 2500"))
        .stdout(contains("Expenses (Low to High)"))
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8(output).unwrap();
    let fuel = text.find("Fuel").unwrap();
    let shopping = text.find("Shopping").unwrap();
    assert!(fuel < shopping);
}

#[test]
fn summary_json_is_machine_readable() {
    let dir = TempDir::new().unwrap();
    let output = planner(&dir)
        .args(["summary", "--format", "json", "--sort", "desc"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["spent"], 3000.0);
    assert_eq!(value["remaining"], 17000.0);
    assert_eq!(value["sort_mode"], "desc");
    assert_eq!(value["items"][0]["name"], "Shopping");
    assert_eq!(value["items"][0]["id"], "#11001");
    assert_eq!(value["is_empty"], false);
}

#[test]
fn summary_yaml_output() {
    let dir = TempDir::new().unwrap();
    planner(&dir)
        .args(["summary", "--format", "yaml"])
        .assert()
        .success()
        .stdout(contains("# Budget Planner snapshot"))
        .stdout(contains("total_budget: 20000"));
}

#[test]
fn run_script_from_file() {
    let dir = TempDir::new().unwrap();
    let script = dir.path().join("plan.txt");
    std::fs::write(
        &script,
        "# trim the plan\nremove #11001\nrm #11001\nadd Coffee beans 120\nadd Water 0\nbudget 5000\n",
    )
    .unwrap();

    planner(&dir)
        .arg("run")
        .arg(&script)
        .assert()
        .success()
        .stdout(contains("Budget:        ৳ 5000"))
        .stdout(contains("Spent so far:  ৳ 1620"))
        .stdout(contains("Coffee beans"))
        .stderr(contains("line 3: ignored 'remove #11001': no such expense"))
        .stderr(contains("line 5: ignored 'add Water 0': cost cannot be zero"));
}

#[test]
fn run_script_from_stdin() {
    let dir = TempDir::new().unwrap();
    planner(&dir)
        .args(["run", "-", "--format", "json"])
        .write_stdin("rm #11001\nrm #11002\nrm #11003\n")
        .assert()
        .success()
        .stdout(contains("\"is_empty\": true"));
}

#[test]
fn run_reports_malformed_line() {
    let dir = TempDir::new().unwrap();
    planner(&dir)
        .args(["run", "-"])
        .write_stdin("add Tea 10\nfrobnicate\n")
        .assert()
        .failure()
        .stderr(contains("Parse error on line 2"));
}

#[test]
fn init_writes_settings_and_config_reads_them() {
    let dir = TempDir::new().unwrap();
    planner(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Wrote default settings"));
    assert!(dir.path().join("config.json").exists());

    planner(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Already initialized"));

    planner(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(contains("Currency symbol: ৳"))
        .stdout(contains("Seed items:      true"));
}

#[test]
fn settings_change_the_starting_state() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{ "default_budget": 1000, "currency_symbol": "$", "seed_items": false }"#,
    )
    .unwrap();

    planner(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(contains("Budget:        $ 1000"))
        .stdout(contains("Add some new budgets to your planner."));
}
