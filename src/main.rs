use std::{env, fs::read_to_string, process::exit};

use ra_lexer::{
    display::{print_table, render_error},
    init_tracing,
    lexer::{lexer::tokenize_with, rules::RuleTable},
};

const EXAMPLES: [&str; 2] = [
    "T__12 := TE__4 INTERSECT (EM__L UNION DEP__2 WHERE salary_s1 > 4015)",
    concat!(
        "BeginRA ",
        "CREATE TABLE fds sd group__12 (num_g12 integer, name_g12 text (60));",
        "INSERT INTO group__12 VALUES (1, 'Цикл ГСЕ дисциплін вибору')",
        "EndRA  dawd asdw"
    ),
];

fn main() {
    init_tracing();

    let args: Vec<String> = env::args().collect();

    if args.len() > 2 {
        eprintln!("Usage: {} [file]", args[0]);
        exit(2);
    }

    let table = match RuleTable::relational_algebra() {
        Ok(table) => table,
        Err(err) => {
            eprintln!("{}", render_error(&err));
            exit(1);
        }
    };

    if let Some(file_path) = args.get(1) {
        match read_to_string(file_path) {
            Ok(contents) => print_table(&tokenize_with(&table, &contents)),
            Err(err) => {
                eprintln!("Error: failed to read {}: {}", file_path, err);
                exit(1);
            }
        }
        return;
    }

    for example in EXAMPLES {
        print_table(&tokenize_with(&table, example));
    }
}
