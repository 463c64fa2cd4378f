use crate::eval::evaluate;
use crate::syntax::Expr;
use std::collections::HashMap;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TableFormat {
    Text,
    Html,
}

#[derive(Clone, Debug)]
pub struct TruthTableOptions {
    pub include_intermediate: bool,
    pub pretty: bool,
    pub format: TableFormat,
}

impl Default for TruthTableOptions {
    fn default() -> Self {
        TruthTableOptions {
            include_intermediate: true,
            pretty: true,
            format: TableFormat::Text,
        }
    }
}

/// Tabulates the formula under every assignment of its variables. Variable
/// columns follow first-seen order and variable i reads bit i of the row
/// counter; intermediate columns run from the innermost sub-expression to
/// the full formula.
pub fn truth_table(expr: &Expr, options: &TruthTableOptions) -> String {
    let variables = expr.variables();
    let expressions: Vec<&Expr> = if options.include_intermediate {
        let mut subs = expr.sub_expressions();
        subs.reverse();
        subs
    } else {
        vec![expr]
    };

    let mut header: Vec<String> = variables.clone();
    header.extend(expressions.iter().map(|e| {
        if options.pretty {
            format!("{:#}", e)
        } else {
            format!("{}", e)
        }
    }));

    let mut rows: Vec<Vec<String>> = Vec::new();
    for state in 0..(1u32 << variables.len()) {
        let assignment: HashMap<String, bool> = variables
            .iter()
            .enumerate()
            .map(|(index, variable)| (variable.clone(), state & (1 << index) != 0))
            .collect();
        let mut row: Vec<String> = variables
            .iter()
            .map(|variable| bit(assignment[variable]))
            .collect();
        for e in &expressions {
            let value = evaluate(e, &assignment).expect("row assignment is total");
            row.push(bit(value));
        }
        rows.push(row);
    }

    match options.format {
        TableFormat::Text => render_text(&header, &rows),
        TableFormat::Html => render_html(&header, &rows),
    }
}

fn bit(value: bool) -> String {
    if value { "1" } else { "0" }.to_string()
}

fn render_text(header: &[String], rows: &[Vec<String>]) -> String {
    let widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    let rule = format!(
        "+{}+",
        widths
            .iter()
            .map(|w| "-".repeat(w + 2))
            .collect::<Vec<_>>()
            .join("+")
    );
    let head = format!(
        "|{}|",
        header
            .iter()
            .map(|h| format!(" {} ", h))
            .collect::<Vec<_>>()
            .join("|")
    );
    let body = rows
        .iter()
        .map(|row| {
            let cells: Vec<String> = row
                .iter()
                .enumerate()
                .map(|(i, value)| format!("{}{}", value, " ".repeat(widths[i].saturating_sub(1))))
                .collect();
            format!("| {} |", cells.join(" | "))
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!("{}\n{}\n{}\n{}", rule, head, body, rule)
}

fn render_html(header: &[String], rows: &[Vec<String>]) -> String {
    let thead: String = header
        .iter()
        .map(|h| format!("<th>{}</th>", h))
        .collect();
    let tbody: String = rows
        .iter()
        .map(|row| {
            let cells: String = row.iter().map(|v| format!("<td>{}</td>", v)).collect();
            format!("<tr>{}</tr>", cells)
        })
        .collect();
    format!(
        "<table><thead><tr>{}</tr></thead><tbody>{}</tbody></table>",
        thead, tbody
    )
}
