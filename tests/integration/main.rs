//! Integration tests for marketcart

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use tempfile::TempDir;

    /// Command isolated to its own state dir and config file
    fn marketcart(home: &TempDir) -> Command {
        let mut cmd = cargo_bin_cmd!("marketcart");
        cmd.env("MARKETCART_STATE_DIR", home.path().join("state"))
            .env("MARKETCART_CONFIG", home.path().join("config.toml"))
            .env("CI", "1");
        cmd
    }

    fn add(home: &TempDir, id: &str) {
        marketcart(home)
            .args(["add", "--id", id, "--title", "T", "--image-url", "u", "--price", "10"])
            .assert()
            .success();
    }

    fn list_json(home: &TempDir) -> serde_json::Value {
        let output = marketcart(home)
            .args(["list", "--format", "json"])
            .output()
            .unwrap();
        assert!(output.status.success());
        serde_json::from_slice(&output.stdout).unwrap()
    }

    #[test]
    fn help_displays() {
        let home = TempDir::new().unwrap();
        marketcart(&home)
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("shopping cart"));
    }

    #[test]
    fn version_displays() {
        let home = TempDir::new().unwrap();
        marketcart(&home)
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("marketcart"));
    }

    #[test]
    fn list_empty() {
        let home = TempDir::new().unwrap();
        marketcart(&home)
            .arg("list")
            .assert()
            .success()
            .stdout(predicate::str::contains("Cart is empty"));

        assert_eq!(list_json(&home), serde_json::json!([]));
    }

    #[test]
    fn add_persists_across_runs() {
        let home = TempDir::new().unwrap();
        add(&home, "a");

        let items = list_json(&home);
        assert_eq!(items[0]["id"], "a");
        assert_eq!(items[0]["title"], "T");
        assert_eq!(items[0]["image_url"], "u");
        assert_eq!(items[0]["price"], 10.0);
        assert_eq!(items[0]["quantity"], 1);
    }

    #[test]
    fn add_twice_merges() {
        let home = TempDir::new().unwrap();
        add(&home, "a");
        add(&home, "a");

        let items = list_json(&home);
        assert_eq!(items.as_array().unwrap().len(), 1);
        assert_eq!(items[0]["quantity"], 2);
    }

    #[test]
    fn increment_and_decrement() {
        let home = TempDir::new().unwrap();
        add(&home, "a");

        marketcart(&home)
            .args(["inc", "a"])
            .assert()
            .success()
            .stdout(predicate::str::contains("quantity 2"));

        marketcart(&home).args(["decrement", "a"]).assert().success();
        assert_eq!(list_json(&home)[0]["quantity"], 1);

        marketcart(&home)
            .args(["dec", "a"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Removed a"));
        assert_eq!(list_json(&home), serde_json::json!([]));
    }

    #[test]
    fn unknown_item_is_noop() {
        let home = TempDir::new().unwrap();
        add(&home, "a");

        marketcart(&home)
            .args(["dec", "missing"])
            .assert()
            .success()
            .stdout(predicate::str::contains("not in the cart"));

        assert_eq!(list_json(&home)[0]["quantity"], 1);
    }

    #[test]
    fn empty_id_rejected() {
        let home = TempDir::new().unwrap();
        marketcart(&home)
            .args(["add", "--id", ""])
            .assert()
            .failure()
            .stderr(predicate::str::contains("must not be empty"));
    }

    #[test]
    fn non_finite_price_rejected() {
        let home = TempDir::new().unwrap();
        for price in ["NaN", "inf"] {
            marketcart(&home)
                .args(["add", "--id", "a", "--price", price])
                .assert()
                .failure()
                .stderr(predicate::str::contains("finite"));
        }

        assert_eq!(list_json(&home), serde_json::json!([]));
    }

    #[test]
    fn memory_backend_warns_changes_are_lost() {
        let home = TempDir::new().unwrap();
        marketcart(&home)
            .args(["config", "set", "storage.backend", "memory"])
            .assert()
            .success();

        marketcart(&home)
            .args(["add", "--id", "a"])
            .assert()
            .success()
            .stderr(predicate::str::contains("will not persist"));

        marketcart(&home)
            .arg("list")
            .assert()
            .success()
            .stderr(predicate::str::contains("will not persist"));
    }

    #[test]
    fn corrupt_cart_fails_then_resets() {
        let home = TempDir::new().unwrap();
        let storage = home.path().join("state").join("storage");
        std::fs::create_dir_all(&storage).unwrap();
        std::fs::write(storage.join("%40GoMarketplace%3Aproducts.json"), "{oops").unwrap();

        marketcart(&home)
            .arg("list")
            .assert()
            .failure()
            .stderr(predicate::str::contains("corrupt"))
            .stderr(predicate::str::contains("Hint:"));

        marketcart(&home)
            .args(["config", "set", "storage.on_corrupt", "reset"])
            .assert()
            .success();

        add(&home, "a");
        assert_eq!(list_json(&home)[0]["quantity"], 1);
    }

    #[test]
    fn namespace_isolates_carts() {
        let home = TempDir::new().unwrap();
        add(&home, "a");

        marketcart(&home)
            .args(["config", "set", "storage.namespace", "@other"])
            .assert()
            .success();

        assert_eq!(list_json(&home), serde_json::json!([]));
    }

    #[test]
    fn config_path() {
        let home = TempDir::new().unwrap();
        marketcart(&home)
            .args(["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("config.toml"));
    }

    #[test]
    fn config_show() {
        let home = TempDir::new().unwrap();
        marketcart(&home)
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[storage]"));
    }

    #[test]
    fn config_set_unknown_key() {
        let home = TempDir::new().unwrap();
        marketcart(&home)
            .args(["config", "set", "storage.nonexistent", "x"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Unknown config key"));
    }
}
