//! Search command - find an order and print its extracted record.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use etik_core::{load_auto, LookupError, OrderLookup, OrderRecord};

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// Order number to look up
    #[arg(required = true)]
    order_number: String,

    /// Cutting-sheet file (.xlsx or .csv)
    #[arg(short, long)]
    input: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text summary
    Text,
    /// JSON output
    Json,
    /// CSV output
    Csv,
}

pub fn run(args: SearchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;

    info!("loading dataset from {}", args.input.display());
    let dataset = load_auto(&args.input)?;

    let lookup = OrderLookup::new(&dataset).with_order_column(&config.lookup.order_column);
    let record = match lookup.find(args.order_number.trim()) {
        Ok(record) => record,
        Err(err @ LookupError::OrderNotFound { .. }) => {
            // A rejection, not a crash: the order just is not on the sheet.
            eprintln!("{} {}", style("✗").red(), err);
            std::process::exit(1);
        }
    };

    let output = format_record(&record, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    Ok(())
}

fn format_record(record: &OrderRecord, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(format_text(record)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(record)?),
        OutputFormat::Csv => format_csv(record),
    }
}

fn format_text(record: &OrderRecord) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "✅ Номер заказа: {}\n",
        record.store_application_number
    ));
    output.push_str(&format!("✅ Магазин / Заявка: {}\n", record.client));
    output.push_str(&format!("✅ Полное наименование: {}\n", record.full_name));
    output.push_str(&format!("✅ Наименование изделия: {}\n", record.item_name));

    if let Some(dims) = record.dimensions {
        output.push_str(&format!("✅ Ширина: {} мм\n", dims.width));
        output.push_str(&format!("✅ Высота: {} мм\n", dims.height));
        output.push_str(&format!("✅ Глубина: {} мм\n", dims.depth));
    }

    output.push_str(&format!("✅ Корпус: {}\n", record.carcase));
    output.push_str(&format!(
        "✅ Дополнительный компонент: {}\n",
        record.extra_component.as_deref().unwrap_or("нет данных")
    ));
    output.push_str(&format!(
        "✅ Фасад: {}\n",
        record.facade.as_deref().unwrap_or("нет данных")
    ));

    if let Some(weight) = record.weight {
        output.push_str(&format!("✅ Вес: {} кг\n", weight.trunc()));
    }

    output
}

fn format_csv(record: &OrderRecord) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "store_application_number",
        "client",
        "full_name",
        "item_name",
        "width",
        "height",
        "depth",
        "carcase",
        "extra_component",
        "facade",
        "weight",
    ])?;

    let dims = record.dimensions_or_zero();
    wtr.write_record([
        &record.store_application_number,
        &record.client,
        &record.full_name,
        &record.item_name,
        &dims.width.to_string(),
        &dims.height.to_string(),
        &dims.depth.to_string(),
        &record.carcase,
        &record.extra_component.clone().unwrap_or_default(),
        &record.facade.clone().unwrap_or_default(),
        &record
            .weight
            .map(|w| w.to_string())
            .unwrap_or_default(),
    ])?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}
