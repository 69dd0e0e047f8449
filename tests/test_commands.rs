use dsbox::command::{CommandError, Outcome, Session, execute_line};
use dsbox::model::ContainerError;
use dsbox::parser::ParsingErrorType;
use dsbox::store::{CollectionKind, Registry, StoreError};
use std::fs;
use tempfile::tempdir;

/// Runs every line, returning the output of the last one.
fn run(registry: &mut Registry, lines: &[&str]) -> Outcome {
    let mut last = Outcome::default();
    for line in lines {
        last = execute_line(registry, line).unwrap_or_else(|err| panic!("{line}: {err}"));
    }
    last
}

fn output(registry: &mut Registry, line: &str) -> Vec<String> {
    execute_line(registry, line).unwrap().output
}

fn store_err(registry: &mut Registry, line: &str) -> StoreError {
    match execute_line(registry, line) {
        Err(CommandError::Store(err)) => err,
        other => panic!("{line}: expected store error, got {other:?}"),
    }
}

fn parse_err(registry: &mut Registry, line: &str) -> ParsingErrorType {
    match execute_line(registry, line) {
        Err(CommandError::Parse(err)) => err.kind().clone(),
        other => panic!("{line}: expected parse error, got {other:?}"),
    }
}

// ============= General =============

#[test]
fn test_create_prints_ok_and_modifies() {
    let mut registry = Registry::new();
    for prefix in ["M", "F", "L", "S", "Q", "T"] {
        let outcome = execute_line(&mut registry, &format!("{prefix}CREATE x{prefix}")).unwrap();
        assert_eq!(outcome.output, vec!["OK"]);
        assert!(outcome.modified);
    }
    assert_eq!(registry.len(), 6);
    assert_eq!(registry.find("xL").unwrap().kind(), CollectionKind::LinkedList);
}

#[test]
fn test_print_uses_display_order() {
    let mut registry = Registry::new();
    run(&mut registry, &["SCREATE s", "SPUSH s A", "SPUSH s B", "TCREATE t", "TINSERT t b", "TINSERT t a"]);

    assert_eq!(output(&mut registry, "PRINT s"), vec!["B A"]);
    assert_eq!(output(&mut registry, "PRINT t"), vec!["a b"]);
    assert!(!execute_line(&mut registry, "PRINT t").unwrap().modified);
}

#[test]
fn test_ismember() {
    let mut registry = Registry::new();
    run(&mut registry, &["MCREATE m", "MPUSH_BACK m v", "QCREATE q"]);

    assert_eq!(output(&mut registry, "ISMEMBER m v"), vec!["TRUE"]);
    assert_eq!(output(&mut registry, "ISMEMBER m w"), vec!["FALSE"]);
    assert!(matches!(
        store_err(&mut registry, "ISMEMBER q v"),
        StoreError::InvalidType { kind: CollectionKind::Queue, .. }
    ));
}

#[test]
fn test_help_and_quit() {
    let mut registry = Registry::new();
    let help = execute_line(&mut registry, "HELP").unwrap();
    assert!(help.output.iter().any(|line| line.contains("MPUSH_BACK")));
    assert!(!help.modified);

    assert!(execute_line(&mut registry, "QUIT").unwrap().quit);
}

#[test]
fn test_vertical_tab_ends_the_name() {
    let mut registry = Registry::new();
    assert_eq!(output(&mut registry, "FCREATE a\x0Bb"), vec!["OK"]);
    assert!(registry.find("a").is_some());
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_missing_entry_is_not_created() {
    let mut registry = Registry::new();
    assert!(matches!(store_err(&mut registry, "SPUSH ghost 1"), StoreError::NotFound(name) if name == "ghost"));
    assert!(registry.is_empty());
}

#[test]
fn test_parse_errors() {
    let mut registry = Registry::new();
    assert_eq!(parse_err(&mut registry, "FOO x"), ParsingErrorType::UnknownCommand("FOO".into()));
    assert_eq!(parse_err(&mut registry, "MFOO x"), ParsingErrorType::UnknownCommand("MFOO".into()));
    assert_eq!(parse_err(&mut registry, "XCREATE x"), ParsingErrorType::UnknownKind("X".into()));
    assert_eq!(parse_err(&mut registry, "MCREATE"), ParsingErrorType::MissingArgument("name".into()));
    assert_eq!(parse_err(&mut registry, "MGET m one"), ParsingErrorType::InvalidIndex("one".into()));
    assert_eq!(parse_err(&mut registry, "   "), ParsingErrorType::EmptyCommand);
    assert_eq!(parse_err(&mut registry, "mcreate x"), ParsingErrorType::UnknownCommand("mcreate".into()));
}

// ============= Array =============

#[test]
fn test_array_get_on_empty_is_out_of_range() {
    let mut registry = Registry::new();
    run(&mut registry, &["MCREATE arr"]);

    assert!(matches!(
        store_err(&mut registry, "MGET arr 0"),
        StoreError::Container(ContainerError::OutOfRange { index: 0, len: 0 })
    ));

    run(&mut registry, &["MPUSH_BACK arr x"]);
    assert_eq!(output(&mut registry, "MGET arr 0"), vec!["x"]);
}

#[test]
fn test_array_commands() {
    let mut registry = Registry::new();
    let last = run(&mut registry, &["MCREATE m", "MPUSH_BACK m a", "MPUSH_BACK m c", "MINSERT_AT m 1 b"]);
    assert_eq!(last.output, vec!["OK"]);
    assert!(last.modified);

    run(&mut registry, &["MSET_AT m 0 A"]);
    assert_eq!(output(&mut registry, "MLENGTH m"), vec!["3"]);

    let deleted = execute_line(&mut registry, "MDEL_AT m 1").unwrap();
    assert_eq!(deleted.output, vec!["b"]);
    assert!(deleted.modified);
    assert_eq!(output(&mut registry, "PRINT m"), vec!["A c"]);
}

#[test]
fn test_negative_index_is_out_of_range() {
    let mut registry = Registry::new();
    run(&mut registry, &["MCREATE m", "MPUSH_BACK m a", "LCREATE l", "LPUSH_TAIL l a"]);

    for line in ["MGET m -1", "MSET_AT m -1 x", "MINSERT_AT m -3 x", "MDEL_AT m -1", "LGET_AT l -1"] {
        assert!(
            matches!(
                store_err(&mut registry, line),
                StoreError::Container(ContainerError::OutOfRange { .. })
            ),
            "{line}"
        );
    }
    assert_eq!(output(&mut registry, "PRINT m"), vec!["a"]);
}

// ============= Lists =============

#[test]
fn test_list_commands() {
    for prefix in ["F", "L"] {
        let mut registry = Registry::new();
        let lines: Vec<String> = ["CREATE l", "PUSH_TAIL l b", "PUSH_HEAD l a", "PUSH_TAIL l d"]
            .iter()
            .map(|cmd| format!("{prefix}{cmd}"))
            .collect();
        for line in &lines {
            assert_eq!(output(&mut registry, line), vec!["OK"]);
        }

        let cmd = |op: &str| format!("{prefix}{op}");
        assert_eq!(output(&mut registry, &cmd("INS_BEFORE l d c")), vec!["OK"]);
        assert_eq!(output(&mut registry, &cmd("INS_AFTER l zz x")), vec!["Not Found"]);
        assert_eq!(output(&mut registry, &cmd("GET_HEAD l")), vec!["a"]);
        assert_eq!(output(&mut registry, &cmd("GET_TAIL l")), vec!["d"]);
        assert_eq!(output(&mut registry, &cmd("GET_AT l 2")), vec!["c"]);
        assert_eq!(output(&mut registry, "PRINT l"), vec!["a b c d"]);

        assert_eq!(output(&mut registry, &cmd("DEL_BEFORE l b")), vec!["OK"]);
        assert_eq!(output(&mut registry, &cmd("DEL_AFTER l d")), vec!["Not Found"]);
        assert_eq!(output(&mut registry, &cmd("DEL_BY_VALUE l c")), vec!["OK"]);
        assert_eq!(output(&mut registry, &cmd("DEL_HEAD l")), vec!["b"]);
        assert_eq!(output(&mut registry, &cmd("DEL_TAIL l")), vec!["d"]);
        assert!(matches!(
            store_err(&mut registry, &cmd("DEL_TAIL l")),
            StoreError::Container(ContainerError::Empty(_))
        ));
    }
}

#[test]
fn test_not_found_is_not_a_modification() {
    let mut registry = Registry::new();
    run(&mut registry, &["FCREATE f", "FPUSH_TAIL f a"]);
    assert!(!execute_line(&mut registry, "FDEL_BY_VALUE f b").unwrap().modified);
    assert!(execute_line(&mut registry, "FDEL_BY_VALUE f a").unwrap().modified);
}

#[test]
fn test_list_prefix_must_match_kind() {
    let mut registry = Registry::new();
    run(&mut registry, &["FCREATE f", "LCREATE l"]);

    assert!(matches!(
        store_err(&mut registry, "LPUSH_HEAD f x"),
        StoreError::InvalidType { kind: CollectionKind::ForwardList, .. }
    ));
    assert!(matches!(
        store_err(&mut registry, "FPUSH_HEAD l x"),
        StoreError::InvalidType { kind: CollectionKind::LinkedList, .. }
    ));
    assert!(matches!(
        store_err(&mut registry, "SPUSH l x"),
        StoreError::InvalidType { kind: CollectionKind::LinkedList, .. }
    ));
}

// ============= Stack, Queue & Tree =============

#[test]
fn test_stack_commands() {
    let mut registry = Registry::new();
    run(&mut registry, &["SCREATE s", "SPUSH s A", "SPUSH s B", "SPUSH s C"]);

    assert_eq!(output(&mut registry, "SPEAK s"), vec!["C"]);
    assert_eq!(output(&mut registry, "SPEEK s"), vec!["C"]);
    assert_eq!(output(&mut registry, "SLENGTH s"), vec!["3"]);
    assert_eq!(output(&mut registry, "SPOP s"), vec!["C"]);
    assert_eq!(output(&mut registry, "SPOP s"), vec!["B"]);
    assert_eq!(output(&mut registry, "SPOP s"), vec!["A"]);
    assert!(matches!(
        store_err(&mut registry, "SPOP s"),
        StoreError::Container(ContainerError::Empty(_))
    ));
}

#[test]
fn test_queue_commands() {
    let mut registry = Registry::new();
    run(&mut registry, &["QCREATE q", "QPUSH q A", "QPUSH q B"]);

    assert_eq!(output(&mut registry, "QPEEK q"), vec!["A"]);
    assert_eq!(output(&mut registry, "QLENGTH q"), vec!["2"]);
    assert_eq!(output(&mut registry, "QPOP q"), vec!["A"]);
    assert_eq!(output(&mut registry, "PRINT q"), vec!["B"]);
}

#[test]
fn test_tree_commands() {
    let mut registry = Registry::new();
    run(&mut registry, &["TCREATE t", "TINSERT t m", "TINSERT t c"]);

    let duplicate = execute_line(&mut registry, "TINSERT t m").unwrap();
    assert_eq!(duplicate.output, vec!["OK"]);
    assert!(!duplicate.modified);

    assert_eq!(output(&mut registry, "TGET t c"), vec!["c"]);
    assert_eq!(output(&mut registry, "TGET t z"), vec!["Not Found"]);
    assert_eq!(output(&mut registry, "TDEL t z"), vec!["Not Found"]);
    assert_eq!(output(&mut registry, "TDEL t c"), vec!["OK"]);
    assert_eq!(output(&mut registry, "ISMEMBER t c"), vec!["FALSE"]);
}

// ============= Session =============

#[test]
fn test_session_writes_back_only_on_change() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("store.txt");

    let mut session = Session::open(&path, Registry::new()).unwrap();
    assert!(session.registry().is_empty());

    session.run_line("QCREATE q").unwrap();
    session.run_line("QPUSH q job").unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "QUEUE q job\n");

    // read-only commands leave the file alone
    fs::write(&path, "sentinel").unwrap();
    session.run_line("QPEEK q").unwrap();
    session.run_line("PRINT q").unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "sentinel");

    // failed commands too
    assert!(session.run_line("QPUSH ghost x").is_err());
    assert_eq!(fs::read_to_string(&path).unwrap(), "sentinel");
}

#[test]
fn test_session_reopens_saved_state() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("store.txt");

    {
        let mut session = Session::open(&path, Registry::new()).unwrap();
        session.run_line("SCREATE s").unwrap();
        for value in ["A", "B", "C"] {
            session.run_line(&format!("SPUSH s {value}")).unwrap();
        }
    }

    let mut session = Session::open(&path, Registry::new()).unwrap();
    let pops: Vec<String> = (0..3)
        .map(|_| session.run_line("SPOP s").unwrap().output.remove(0))
        .collect();
    assert_eq!(pops, vec!["C", "B", "A"]);
}

#[test]
fn test_session_reports_failed_write_back() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing_dir").join("store.txt");

    let mut session = Session::open(&path, Registry::new()).unwrap();
    let err = session.run_line("TCREATE t").unwrap_err();
    assert!(matches!(err, CommandError::Store(StoreError::Io { .. })));
    // memory is not rolled back
    assert!(session.registry().find("t").is_some());
}

#[test]
fn test_session_refuses_file_beyond_capacity() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("store.txt");
    let stored = "STACK a 1\nSTACK b 2\nSTACK c 3\n";
    fs::write(&path, stored).unwrap();

    let err = Session::open(&path, Registry::with_capacity(2)).unwrap_err();
    assert!(matches!(
        err,
        StoreError::StoredOverCapacity { capacity: 2, dropped: 1, .. }
    ));
    assert_eq!(fs::read_to_string(&path).unwrap(), stored);

    let session = Session::open(&path, Registry::with_capacity(3)).unwrap();
    assert_eq!(session.registry().len(), 3);
}
