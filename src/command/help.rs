//! Help table listing every command.

const COLUMN_WIDTH: usize = 55;
const RULE_WIDTH: usize = 100;

/// Sections of `(usage, description)` rows, each under a title.
const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "General commands:",
        &[
            ("HELP", "Show this help message."),
            ("QUIT", "Exit the program."),
            ("<X>CREATE <name>", "Create a new structure. X: M, F, L, S, Q, T."),
            ("PRINT <name>", "Print the contents of a structure."),
            ("ISMEMBER <name> <value>", "Check whether a value is present (not for S, Q)."),
        ],
    ),
    (
        "Dynamic array (M):",
        &[
            ("MPUSH_BACK <name> <value>", "Append a value."),
            ("MINSERT_AT <name> <index> <value>", "Insert a value at an index."),
            ("MSET_AT <name> <index> <value>", "Replace the value at an index."),
            ("MGET <name> <index>", "Show the value at an index."),
            ("MDEL_AT <name> <index>", "Remove and show the value at an index."),
            ("MLENGTH <name>", "Show the number of values."),
        ],
    ),
    (
        "Singly/doubly linked list (F/L):",
        &[
            ("<X>PUSH_HEAD <name> <value>", "Prepend a value."),
            ("<X>PUSH_TAIL <name> <value>", "Append a value."),
            ("<X>INS_BEFORE <name> <target> <value>", "Insert a value before the target value."),
            ("<X>INS_AFTER <name> <target> <value>", "Insert a value after the target value."),
            ("<X>GET_HEAD <name>", "Show the first value."),
            ("<X>GET_TAIL <name>", "Show the last value."),
            ("<X>GET_AT <name> <index>", "Show the value at an index."),
            ("<X>DEL_HEAD <name>", "Remove and show the first value."),
            ("<X>DEL_TAIL <name>", "Remove and show the last value."),
            ("<X>DEL_BY_VALUE <name> <value>", "Remove the first occurrence of a value."),
            ("<X>DEL_BEFORE <name> <value>", "Remove the value before the given value."),
            ("<X>DEL_AFTER <name> <value>", "Remove the value after the given value."),
        ],
    ),
    (
        "Stack (S):",
        &[
            ("SPUSH <name> <value>", "Push a value."),
            ("SPOP <name>", "Pop and show the top value."),
            ("SPEAK <name>", "Show the top value."),
            ("SLENGTH <name>", "Show the number of values."),
        ],
    ),
    (
        "Queue (Q):",
        &[
            ("QPUSH <name> <value>", "Enqueue a value."),
            ("QPOP <name>", "Dequeue and show the front value."),
            ("QPEEK <name>", "Show the front value."),
            ("QLENGTH <name>", "Show the number of values."),
        ],
    ),
    (
        "AVL tree (T):",
        &[
            ("TINSERT <name> <value>", "Insert a value."),
            ("TDEL <name> <value>", "Delete a value."),
            ("TGET <name> <value>", "Show the value if it is present."),
        ],
    ),
];

/// Returns the help table, one printable line per element.
pub fn help_lines() -> Vec<String> {
    let rule = "=".repeat(RULE_WIDTH);
    let thin_rule = "-".repeat(RULE_WIDTH);

    let mut lines = vec![String::new(), "Available Commands:".to_string(), rule.clone()];
    for (i, (title, rows)) in SECTIONS.iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        lines.push(title.to_string());
        lines.push(thin_rule.clone());
        for (usage, description) in rows.iter() {
            lines.push(format!("{:<width$}{description}", format!("  {usage}"), width = COLUMN_WIDTH));
        }
    }
    lines.push(rule);
    lines
}
