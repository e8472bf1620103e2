//! Plain-text rendering of token sequences and rule table errors.

use crate::{
    errors::errors::{Error, ErrorTip},
    lexer::tokens::Token,
};

const HEADERS: [&str; 6] = ["Token", "Name", "Lexeme", "Start", "Length", "Position"];

fn row(token: &Token) -> [String; 6] {
    [
        token.kind.clone(),
        token.name.clone(),
        token.value.clone(),
        token.start.to_string(),
        token.length.to_string(),
        token.position.to_string(),
    ]
}

fn separator(widths: &[usize]) -> String {
    let cells: Vec<String> = widths.iter().map(|width| "-".repeat(width + 2)).collect();
    format!("+{}+", cells.join("+"))
}

fn line<S: AsRef<str>>(cells: &[S], widths: &[usize]) -> String {
    let cells: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!(" {:<width$} ", cell.as_ref(), width = *width))
        .collect();
    format!("|{}|", cells.join("|"))
}

/// Renders `tokens` as a bordered table, one row per token. Widths are
/// counted in characters so non-ASCII lexemes stay aligned.
pub fn render_table(tokens: &[Token]) -> String {
    let rows: Vec<[String; 6]> = tokens.iter().map(row).collect();

    let mut widths = HEADERS.map(|header| header.chars().count());
    for cells in &rows {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = vec![separator(&widths), line(&HEADERS, &widths), separator(&widths)];
    out.extend(rows.iter().map(|cells| line(cells, &widths)));
    out.push(separator(&widths));

    out.join("\n")
}

pub fn print_table(tokens: &[Token]) {
    println!("{}", render_table(tokens));
}

/// Renders a rule table error as
///
/// ```text
/// Error: EmptyMatch (Pattern `a*` of rule `stars` accepts ...)
/// -> rule `stars`
/// ```
pub fn render_error(error: &Error) -> String {
    let heading = if let ErrorTip::None = error.get_tip() {
        format!("Error: {}", error.get_error_name())
    } else {
        format!("Error: {} ({})", error.get_error_name(), error.get_tip())
    };

    format!("{}\n-> rule `{}`\n   {}", heading, error.get_rule(), error)
}

#[cfg(test)]
mod tests {
    use crate::{
        errors::errors::{Error, ErrorImpl},
        lexer::lexer::tokenize,
    };

    use super::{render_error, render_table};

    #[test]
    fn test_render_table_layout() {
        let table = render_table(&tokenize("a_b := 1"));
        let lines: Vec<&str> = table.lines().collect();

        // border, header, border, three rows, border
        assert_eq!(lines.len(), 7);
        assert!(lines[1].contains("Token"));
        assert!(lines[1].contains("Position"));
        assert!(lines[3].contains("a_b"));
        assert!(lines[4].contains("walrus"));
        assert!(lines[5].contains("number"));
    }

    #[test]
    fn test_render_table_aligns_non_ascii() {
        let table = render_table(&tokenize("x_y 'Цикл'"));
        let widths: Vec<usize> = table.lines().map(|line| line.chars().count()).collect();

        assert!(widths.windows(2).all(|pair| pair[0] == pair[1]));
    }

    #[test]
    fn test_render_empty_table() {
        let table = render_table(&[]);

        assert_eq!(table.lines().count(), 4);
    }

    #[test]
    fn test_render_error_with_tip() {
        let error = Error::new(
            ErrorImpl::EmptyMatch {
                pattern: "a*".to_string(),
            },
            "stars",
        );
        let rendered = render_error(&error);
        let lines: Vec<&str> = rendered.lines().collect();

        assert!(lines[0].starts_with("Error: EmptyMatch (Pattern `a*`"));
        assert_eq!(lines[1], "-> rule `stars`");
        assert_eq!(lines[2], "   rule \"stars\": pattern \"a*\" matches the empty string");
    }

    #[test]
    fn test_render_error_without_tip() {
        let error = Error::new(
            ErrorImpl::InvalidPattern {
                message: "unclosed group".to_string(),
            },
            "broken",
        );

        assert_eq!(
            render_error(&error).lines().next(),
            Some("Error: InvalidPattern")
        );
    }
}
