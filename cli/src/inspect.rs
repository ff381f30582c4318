use anyhow::Result;
use paytick_core::{CurrencyFormat, PayRecord};
use serde_json::json;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "Field")]
    field: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

pub fn show_inspect(record: &PayRecord, currency: &CurrencyFormat, as_json: bool) -> Result<()> {
    if as_json {
        let out = json!({
            "record": record,
            "rate_per_second": record.rate_per_second(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", render_table(record, currency));
    }
    Ok(())
}

fn render_table(record: &PayRecord, currency: &CurrencyFormat) -> String {
    let rows = vec![
        FieldRow { field: "Document", value: record.source_name.clone() },
        FieldRow { field: "Gross monthly", value: currency.format(record.gross_monthly) },
        FieldRow { field: "Net monthly", value: currency.format(record.net_monthly) },
        FieldRow { field: "Working hours", value: format!("{}h", record.working_hours) },
        FieldRow { field: "Per second", value: currency.format(record.rate_per_second()) },
        FieldRow { field: "Per hour", value: currency.format(record.rate_per_second() * 3600.0) },
    ];

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}
