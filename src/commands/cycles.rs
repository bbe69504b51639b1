use chrono::{Local, NaiveDate};
use colored::Colorize;
use eol_data::{Cycle, EolClient, EolError, Result};
use tabled::Tabled;

use crate::cli::CyclesArgs;
use crate::output::{self, milestone, status_colored};

#[derive(Tabled)]
struct CycleRow {
    #[tabled(rename = "Cycle")]
    cycle: String,
    #[tabled(rename = "Released")]
    released: String,
    #[tabled(rename = "Latest")]
    latest: String,
    #[tabled(rename = "LTS")]
    lts: String,
    #[tabled(rename = "Support")]
    support: String,
    #[tabled(rename = "EOL")]
    eol: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl CycleRow {
    fn new(cycle: &Cycle, today: NaiveDate) -> Self {
        Self {
            cycle: cycle.cycle.clone(),
            released: cycle.release_date.format("%Y-%m-%d").to_string(),
            latest: cycle.latest.clone(),
            lts: cycle.lts.to_string(),
            support: milestone(&cycle.support),
            eol: milestone(&cycle.eol),
            status: status_colored(cycle.status(today)),
        }
    }
}

pub async fn list(client: &EolClient, args: CyclesArgs) -> Result<()> {
    let today = Local::now().date_naive();

    let mut cycles = client.cycles(&args.product).await?;
    if args.active {
        cycles.retain(|c| !c.eol.is_reached(today));
    }

    output::print_table(&cycles, |c| CycleRow::new(c, today));

    Ok(())
}

pub async fn view(client: &EolClient, product: &str, cycle: &str) -> Result<()> {
    let today = Local::now().date_naive();

    let cycles = client.cycles(product).await?;
    let found = find_cycle(cycles, cycle).ok_or_else(|| EolError::CycleNotFound {
        product: product.to_string(),
        cycle: cycle.to_string(),
    })?;

    output::print_item(&found, |c| {
        println!("{} {}", product.bold(), c.cycle.bold());
        println!("{}", "─".repeat(40));
        println!("Status:       {}", status_colored(c.status(today)));
        println!("Released:     {}", c.release_date.format("%Y-%m-%d"));
        println!("Latest:       {}", c.latest);
        println!("LTS:          {}", c.lts);
        println!("Support:      {}", milestone(&c.support));
        println!("EOL:          {}", milestone(&c.eol));
        println!("Discontinued: {}", milestone(&c.discontinued));
        if !c.link.is_empty() {
            println!("Changelog:    {}", c.link);
        }
    });

    Ok(())
}

fn find_cycle(cycles: Vec<Cycle>, name: &str) -> Option<Cycle> {
    cycles.into_iter().find(|c| c.cycle == name)
}
