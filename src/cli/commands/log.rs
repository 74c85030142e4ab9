use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::{LogEntry, load_log};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::formatting::truncate;
use ansi_term::Colour;

const OP_WIDTH: usize = 40;

/// ANSI colour for an operation name.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "import" => Colour::Green,
        "export" => Colour::Blue,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

fn render_entry(e: &LogEntry, id_w: usize) -> String {
    let op_target = if e.target.is_empty() {
        e.operation.clone()
    } else {
        format!("{} ({})", e.operation, e.target)
    };
    // truncate on the plain text, then colour only the operation word
    let visible = truncate(&op_target, OP_WIDTH);
    let padding = " ".repeat(OP_WIDTH.saturating_sub(visible.chars().count()));
    let color = color_for_operation(&e.operation);
    let colored = match visible.split_once(' ') {
        Some((op, rest)) => format!("{} {}", color.paint(op), rest),
        None => color.paint(visible.as_str()).to_string(),
    };

    format!(
        "{:>id_w$}: {} | {}{} => {}",
        e.id,
        e.date,
        colored,
        padding,
        e.message,
        id_w = id_w
    )
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let pool = DbPool::new(&cfg.database)?;
        let entries = load_log(&pool.conn)?;

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);

        println!("📜 Internal log:\n");
        for e in &entries {
            println!("{}", render_entry(e, id_w));
        }
    }

    Ok(())
}
