use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::db::queries::load_workdays;
use crate::errors::{AppError, AppResult};
use crate::models::Workday;
use crate::ui::messages::{header, info};
use crate::utils::colors::colorize_optional;
use crate::utils::date::parse_dmy;
use crate::utils::formatting::{bold, or_dash};
use crate::utils::table::Table;

fn print_workday(w: &Workday) {
    header(format!(
        "{} {} ({})",
        or_dash(w.date.as_deref()),
        or_dash(w.weekday.as_deref()),
        or_dash(w.plate.as_deref())
    ));

    let mut table = Table::with_headers(&["#", "EVENT", "START", "END", ""]);
    for (i, (kind, interval)) in w.timeline().into_iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            kind.label().to_string(),
            colorize_optional(interval.start.as_deref()),
            colorize_optional(interval.end.as_deref()),
            if interval.is_open() { "open" } else { "" }.to_string(),
        ]);
    }
    print!("{}", table.render());

    println!();
    for (name, value) in w.attributes().into_iter().skip(4) {
        println!("{:<24} {}", bold(name), colorize_optional(value));
    }
    println!();
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Workday { driver, date } = cmd {
        let day = match date {
            Some(d) => Some(parse_dmy(d).ok_or_else(|| AppError::InvalidDate(d.clone()))?),
            None => None,
        };

        let pool = DbPool::open_initialized(&cfg.database)?;
        let records = load_workdays(&pool.conn, driver)?;
        let workdays = Core::workdays_on(&records, day);

        if workdays.is_empty() {
            info(format!("No workdays found for driver {driver}."));
            return Ok(());
        }

        for w in &workdays {
            print_workday(w);
        }
    }
    Ok(())
}
