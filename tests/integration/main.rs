//! Integration tests for marketcart

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use std::path::Path;
    use tempfile::TempDir;

    fn marketcart() -> Command {
        cargo_bin_cmd!("marketcart")
    }

    /// Write a config pointing storage at a directory inside `temp`
    fn write_config(temp: &TempDir) -> std::path::PathBuf {
        write_config_with(temp, "")
    }

    /// Write a config with an extra `[general]` section body
    fn write_config_with(temp: &TempDir, general: &str) -> std::path::PathBuf {
        let config_path = temp.path().join("config.toml");
        let storage_root = temp.path().join("state");
        std::fs::write(
            &config_path,
            format!(
                "[general]\n{general}\n[storage]\nroot = \"{}\"\n",
                storage_root.display()
            ),
        )
        .unwrap();
        config_path
    }

    fn cart_blob_path(config_path: &Path) -> std::path::PathBuf {
        config_path
            .parent()
            .unwrap()
            .join("state")
            .join("marketcart.cart.items.json")
    }

    #[test]
    fn help_displays() {
        marketcart()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Persistent Shopping Cart"));
    }

    #[test]
    fn version_displays() {
        marketcart()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("marketcart"));
    }

    #[test]
    fn show_empty_cart() {
        let temp = TempDir::new().unwrap();
        let config = write_config(&temp);

        marketcart()
            .args(["--config", config.to_str().unwrap(), "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Cart is empty"));
    }

    #[test]
    fn add_then_show_across_invocations() {
        let temp = TempDir::new().unwrap();
        let config = write_config(&temp);

        marketcart()
            .args([
                "--config",
                config.to_str().unwrap(),
                "add",
                "sku-1",
                "--title",
                "Shoe",
                "--price",
                "10.0",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("Added"));

        // A separate process hydrates from storage
        marketcart()
            .args(["--config", config.to_str().unwrap(), "show", "--format", "plain"])
            .assert()
            .success()
            .stdout(predicate::str::contains("sku-1\t1\tShoe"));
    }

    #[test]
    fn add_twice_merges_quantities() {
        let temp = TempDir::new().unwrap();
        let config = write_config(&temp);

        for _ in 0..2 {
            marketcart()
                .args([
                    "--config",
                    config.to_str().unwrap(),
                    "add",
                    "sku-1",
                    "--title",
                    "Shoe",
                    "--price",
                    "10.0",
                ])
                .assert()
                .success();
        }

        marketcart()
            .args(["--config", config.to_str().unwrap(), "show", "--format", "plain"])
            .assert()
            .success()
            .stdout(predicate::str::contains("sku-1\t2\tShoe"));
    }

    #[test]
    fn decrement_to_zero_removes_item() {
        let temp = TempDir::new().unwrap();
        let config = write_config(&temp);

        marketcart()
            .args([
                "--config",
                config.to_str().unwrap(),
                "add",
                "sku-1",
                "--title",
                "Shoe",
                "--price",
                "10.0",
            ])
            .assert()
            .success();

        marketcart()
            .args(["--config", config.to_str().unwrap(), "decrement", "sku-1"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Removed"));

        marketcart()
            .args(["--config", config.to_str().unwrap(), "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Cart is empty"));
    }

    #[test]
    fn increment_unknown_id_is_noop() {
        let temp = TempDir::new().unwrap();
        let config = write_config(&temp);

        marketcart()
            .args(["--config", config.to_str().unwrap(), "increment", "ghost"])
            .assert()
            .success()
            .stdout(predicate::str::contains("not in the cart"));
    }

    #[test]
    fn malformed_persisted_cart_recovers_empty() {
        let temp = TempDir::new().unwrap();
        let config = write_config(&temp);

        let blob = cart_blob_path(&config);
        std::fs::create_dir_all(blob.parent().unwrap()).unwrap();
        std::fs::write(&blob, "{definitely not json").unwrap();

        marketcart()
            .args(["--config", config.to_str().unwrap(), "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Cart is empty"));
    }

    #[test]
    fn persisted_blob_matches_mutations() {
        let temp = TempDir::new().unwrap();
        let config = write_config(&temp);

        marketcart()
            .args([
                "--config",
                config.to_str().unwrap(),
                "add",
                "sku-1",
                "--title",
                "Shoe",
                "--price",
                "10.0",
            ])
            .assert()
            .success();

        let raw = std::fs::read_to_string(cart_blob_path(&config)).unwrap();
        assert!(raw.contains("\"id\":\"sku-1\""));
        assert!(raw.contains("\"quantity\":1"));
    }

    #[test]
    fn clear_empties_cart() {
        let temp = TempDir::new().unwrap();
        let config = write_config(&temp);

        marketcart()
            .args([
                "--config",
                config.to_str().unwrap(),
                "add",
                "sku-1",
                "--title",
                "Shoe",
                "--price",
                "10.0",
            ])
            .assert()
            .success();

        marketcart()
            .args(["--config", config.to_str().unwrap(), "clear"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Cart cleared"));

        let raw = std::fs::read_to_string(cart_blob_path(&config)).unwrap();
        assert_eq!(raw, "[]");
    }

    #[test]
    fn ephemeral_mode_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let config = write_config(&temp);

        marketcart()
            .args([
                "--config",
                config.to_str().unwrap(),
                "--ephemeral",
                "add",
                "sku-1",
                "--title",
                "Shoe",
                "--price",
                "10.0",
            ])
            .assert()
            .success();

        assert!(!cart_blob_path(&config).exists());
    }

    #[test]
    fn config_verbose_enables_info_logging() {
        let temp = TempDir::new().unwrap();
        let config = write_config_with(&temp, "verbose = true\n");

        marketcart()
            .args([
                "--config",
                config.to_str().unwrap(),
                "add",
                "sku-1",
                "--title",
                "Shoe",
                "--price",
                "10.0",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("Added sku-1 to cart"));
    }

    #[test]
    fn config_json_log_format() {
        let temp = TempDir::new().unwrap();
        let config = write_config_with(&temp, "verbose = true\nlog_format = \"json\"\n");

        marketcart()
            .args([
                "--config",
                config.to_str().unwrap(),
                "add",
                "sku-1",
                "--title",
                "Shoe",
                "--price",
                "10.0",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"message\":\"Added sku-1 to cart\""));
    }

    #[test]
    fn config_show() {
        let temp = TempDir::new().unwrap();
        let config = write_config(&temp);

        marketcart()
            .args(["--config", config.to_str().unwrap(), "config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[general]"));
    }

    #[test]
    fn config_path() {
        let temp = TempDir::new().unwrap();
        let config = write_config(&temp);

        marketcart()
            .args(["--config", config.to_str().unwrap(), "config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("config.toml"));
    }
}
