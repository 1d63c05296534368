#[cfg(test)]
mod tests {

    use std::fs;
    use std::io::{self, Write};
    use std::path::Path;

    use clap::Parser;

    use crate::cli::{run, Cli, CliError, OUTPUT_CONTEXT};
    use crate::result_code::ResultCode;

    fn todo(config_dir: &Path, args: &[&str]) -> anyhow::Result<String> {
        let mut argv = vec!["todo", "--config-dir", config_dir.to_str().unwrap()];
        argv.extend_from_slice(args);
        let cli = Cli::try_parse_from(argv).unwrap();
        let mut out = Vec::new();
        run(cli, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_e2e_todo_lifecycle() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("datastore_todo.json");

        let out = todo(dir.path(), &["init"]).unwrap();
        assert_eq!(
            out,
            format!("The to-do database location is: '{}'\n", db.display())
        );
        assert_eq!(fs::read_to_string(&db).unwrap(), "[]");

        let out = todo(dir.path(), &["list"]).unwrap();
        assert_eq!(out, "There are no tasks in the to-do list yet\n");

        let out = todo(dir.path(), &["add", "buy", "milk", "-p", "low"]).unwrap();
        assert_eq!(
            out,
            "to-do: \"buy milk\" was added with priority: low (id 1)\n"
        );
        assert_eq!(
            fs::read_to_string(&db).unwrap(),
            r#"[{"id":1,"description":"buy milk","priority":"low","status":"pending"}]"#
        );

        todo(dir.path(), &["add", "write report", "--priority", "high"]).unwrap();

        let out = todo(dir.path(), &["complete", "1"]).unwrap();
        assert_eq!(out, "to-do # 1 \"buy milk\" completed!\n");

        let out = todo(dir.path(), &["list", "--status", "pending"]).unwrap();
        assert!(out.contains("write report"));
        assert!(!out.contains("buy milk"));

        let out = todo(dir.path(), &["update", "2", "-d", "write summary"]).unwrap();
        assert_eq!(out, "to-do # 2 \"write summary\" updated\n");

        let out = todo(dir.path(), &["show", "2"]).unwrap();
        assert!(out.contains("| high      | pending    | write summary"));

        let out = todo(dir.path(), &["remove", "1"]).unwrap();
        assert_eq!(out, "to-do # 1: \"buy milk\" was removed\n");
        // an unknown id is removed silently
        let out = todo(dir.path(), &["remove", "1"]).unwrap();
        assert_eq!(out, "");

        let out = todo(dir.path(), &["add", "call mom"]).unwrap();
        assert!(out.ends_with("(id 3)\n"), "id 2 is still taken: {}", out);
    }

    #[test]
    fn test_e2e_not_found_message() {
        let dir = tempfile::tempdir().unwrap();
        todo(dir.path(), &["init"]).unwrap();

        let err = todo(dir.path(), &["show", "5"]).unwrap_err();
        assert_eq!(err.to_string(), "Todo with id 5 not found");

        let err = todo(dir.path(), &["complete", "5"]).unwrap_err();
        assert_eq!(err.to_string(), "Todo with id 5 not found");
    }

    #[test]
    fn test_e2e_requires_init() {
        let dir = tempfile::tempdir().unwrap();

        let err = todo(dir.path(), &["list"]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::ConfigMissing)
        ));
        assert_eq!(
            err.to_string(),
            "Config file not found. Please, run \"todo init\""
        );

        todo(dir.path(), &["init"]).unwrap();
        fs::remove_file(dir.path().join("datastore_todo.json")).unwrap();
        let err = todo(dir.path(), &["list"]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::DatabaseMissing)
        ));
        assert_eq!(
            err.to_string(),
            "Database not found. Please, run \"todo init\""
        );
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_e2e_output_failure_has_context() {
        let dir = tempfile::tempdir().unwrap();
        todo(dir.path(), &["init"]).unwrap();
        todo(dir.path(), &["add", "buy milk"]).unwrap();

        let cli = Cli::try_parse_from([
            "todo",
            "--config-dir",
            dir.path().to_str().unwrap(),
            "list",
        ])
        .unwrap();
        let err = run(cli, &mut BrokenPipe).unwrap_err();

        assert_eq!(err.to_string(), OUTPUT_CONTEXT);
        assert!(err.downcast_ref::<CliError>().is_none());
        let io_err = err.root_cause().downcast_ref::<io::Error>().unwrap();
        assert_eq!(io_err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn test_e2e_broken_database() {
        let dir = tempfile::tempdir().unwrap();
        todo(dir.path(), &["init"]).unwrap();
        fs::write(dir.path().join("datastore_todo.json"), "not json").unwrap();

        let err = todo(dir.path(), &["list"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Opening database failed with \"database json error\""
        );
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::Failed {
                code: ResultCode::JsonError,
                ..
            })
        ));
    }

    #[test]
    fn test_e2e_in_memory_backend() {
        let dir = tempfile::tempdir().unwrap();
        todo(dir.path(), &["init", "--backend", "in_memory"]).unwrap();

        let out = todo(dir.path(), &["add", "transient"]).unwrap();
        assert!(out.contains("(id 1)"));

        // every process starts from an empty list
        let out = todo(dir.path(), &["list"]).unwrap();
        assert_eq!(out, "There are no tasks in the to-do list yet\n");
    }

    #[test]
    fn test_e2e_rejects_bad_input() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("db").join("todos.json");
        todo(dir.path(), &["init", "--db-path", db.to_str().unwrap()]).unwrap();
        assert!(db.exists());

        let err = todo(dir.path(), &["add", " "]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Adding to-do failed with \"to-do input error\""
        );

        let parsed = Cli::try_parse_from(["todo", "add", "x", "--priority", "urgent"]);
        assert!(parsed.is_err());
        let parsed = Cli::try_parse_from(["todo", "show", "abc"]);
        assert!(parsed.is_err());
    }
}
