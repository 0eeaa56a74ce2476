//! Print the extracted records and cleaned price series as text tables.
//! Same pipeline as the plot window, no display needed.

use anyhow::{Context, Result};
use clap::Parser;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use bond_scatter::ui::PriceKind;
use bond_scatter::utils::{init_logger, install_panic_hook};
use bond_scatter::{Cli, PriceSeries, Record, load_records};

#[derive(Tabled)]
struct RecordRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Issue date")]
    issue_date: String,
    #[tabled(rename = "CleanBid")]
    bid: String,
    #[tabled(rename = "CleanAsk")]
    ask: String,
    #[tabled(rename = "LastPrice")]
    last: String,
}

#[derive(Tabled)]
struct PointRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Value")]
    value: f64,
}

fn format_price(price: Option<f64>) -> String {
    price.map_or_else(|| "-".to_string(), |p| p.to_string())
}

fn record_rows(records: &[Record]) -> Vec<RecordRow> {
    records
        .iter()
        .enumerate()
        .map(|(index, r)| RecordRow {
            index,
            issue_date: r.issue_date.label(),
            bid: format_price(r.bid_price),
            ask: format_price(r.ask_price),
            last: format_price(r.last_price),
        })
        .collect()
}

fn main() -> Result<()> {
    install_panic_hook();
    init_logger(env!("CARGO_CRATE_NAME"));

    let args = Cli::parse();
    let records = load_records(&args.path)
        .with_context(|| format!("could not read records from {}", args.path.display()))?;

    println!("Records ({}):", records.len());
    println!("{}", Table::new(record_rows(&records)).with(Style::modern()));

    let scatter = PriceSeries::from_records(&records).clean(args.sort_order);
    for kind in PriceKind::ALL {
        let rows: Vec<PointRow> = kind
            .series(&scatter)
            .iter()
            .map(|(date, value)| PointRow {
                date: date.clone(),
                value,
            })
            .collect();
        println!("\n{} ({} points, {} order):", kind.label(), rows.len(), args.sort_order);
        println!("{}", Table::new(rows).with(Style::modern()));
    }

    Ok(())
}
