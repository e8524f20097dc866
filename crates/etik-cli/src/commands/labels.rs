//! Labels command - build a label plan for an order.

use std::fs;
use std::path::PathBuf;

use anyhow::anyhow;
use clap::Args;
use console::style;
use tracing::info;

use etik_core::order::rules::parse_weight_text;
use etik_core::{
    load_auto, FieldOverrides, LabelContent, LabelKind, LabelPlanner, LabelRequest, LookupError,
    OrderLookup,
};

/// Arguments for the labels command.
#[derive(Args)]
pub struct LabelsArgs {
    /// Order number to plan labels for
    #[arg(required = true)]
    order_number: String,

    /// Cutting-sheet file (.xlsx or .csv)
    #[arg(short, long)]
    input: PathBuf,

    /// Label request as KIND:COUNT (repeatable), e.g. "КОРПУС:3"
    #[arg(short, long = "label", value_name = "KIND:COUNT", required = true)]
    labels: Vec<String>,

    /// Override a record field as FIELD=VALUE (repeatable)
    #[arg(long = "set", value_name = "FIELD=VALUE")]
    sets: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON plan for the label renderer
    Json,
    /// Plain text listing
    Text,
}

pub fn run(args: LabelsArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;

    let requests = parse_requests(&args.labels)?;
    let overrides = parse_overrides(&args.sets)?;

    info!("loading dataset from {}", args.input.display());
    let dataset = load_auto(&args.input)?;

    let lookup = OrderLookup::new(&dataset).with_order_column(&config.lookup.order_column);
    let record = match lookup.find(args.order_number.trim()) {
        Ok(record) => record,
        Err(err @ LookupError::OrderNotFound { .. }) => {
            eprintln!("{} {}", style("✗").red(), err);
            std::process::exit(1);
        }
    };

    let effective = overrides.apply(&record);
    let plan = LabelPlanner::new(config.labels).build(&effective, &requests);

    let output = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&plan)?,
        OutputFormat::Text => format_text(&plan),
    };

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Plan for {} labels written to {}",
            style("✓").green(),
            plan.len(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    Ok(())
}

fn parse_requests(entries: &[String]) -> anyhow::Result<Vec<LabelRequest>> {
    let mut requests = Vec::with_capacity(entries.len());

    for entry in entries {
        let (kind, count) = match entry.rsplit_once(':') {
            Some((kind, count)) => {
                let count: u32 = count
                    .trim()
                    .parse()
                    .map_err(|_| anyhow!("invalid label count in '{}'", entry))?;
                (kind, count)
            }
            None => (entry.as_str(), 1),
        };

        if count == 0 {
            anyhow::bail!("label count must be positive in '{}'", entry);
        }

        requests.push(LabelRequest::new(LabelKind::from_name(kind), count));
    }

    Ok(requests)
}

fn parse_overrides(sets: &[String]) -> anyhow::Result<FieldOverrides> {
    let mut overrides = FieldOverrides::default();

    for set in sets {
        let (field, value) = set
            .split_once('=')
            .ok_or_else(|| anyhow!("invalid override '{}', expected FIELD=VALUE", set))?;

        match field {
            "store_application_number" => {
                overrides.store_application_number = Some(value.to_string())
            }
            "client" => overrides.client = Some(value.to_string()),
            "full_name" => overrides.full_name = Some(value.to_string()),
            "item_name" => overrides.item_name = Some(value.to_string()),
            "carcase" => overrides.carcase = Some(value.to_string()),
            "extra_component" => overrides.extra_component = Some(value.to_string()),
            "facade" => overrides.facade = Some(value.to_string()),
            // Numeric edits degrade like the editable form: bad dimension
            // input becomes 0, bad weight input clears the weight.
            "width" => overrides.width = Some(value.trim().parse().unwrap_or(0)),
            "height" => overrides.height = Some(value.trim().parse().unwrap_or(0)),
            "depth" => overrides.depth = Some(value.trim().parse().unwrap_or(0)),
            "weight" => overrides.weight = Some(parse_weight_text(value)),
            other => anyhow::bail!("unknown field '{}'", other),
        }
    }

    Ok(overrides)
}

fn format_text(plan: &[LabelContent]) -> String {
    let mut output = String::new();

    for label in plan {
        output.push_str(&format!(
            "Этикетка {}/{} — {}\n",
            label.ordinal,
            label.total_count,
            label.kind.name()
        ));
        output.push_str(&format!("  Наименование: {}\n", label.item_name));
        output.push_str(&format!("  Цвет: {}\n", label.color_line));
        output.push_str(&format!("  Заказ: {}\n", label.order_line));
        output.push_str(&format!("  Заказчик: {}\n", label.client_line));
        output.push_str(&format!(
            "  Габариты: {} x {} x {} мм\n",
            label.width, label.height, label.depth
        ));
        if !label.weight.is_empty() {
            output.push_str(&format!("  Вес: {} кг\n", label.weight));
        }
        output.push_str(&format!("  Дата: {}\n\n", label.date));
    }

    output
}
