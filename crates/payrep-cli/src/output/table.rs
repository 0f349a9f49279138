use payrep_core::model::{AggregatedReport, Document, Record, ReportLine};

const HEADERS: [&str; 6] = [
    "No",
    "ID number",
    "Bank code",
    "Account",
    "Budget code",
    "Amount",
];

pub fn format_document(document: &Document) -> String {
    let mut out = String::new();
    out.push_str(&format!("Region:      {}\n", or_dash(&document.region)));
    out.push_str(&format!("Report date: {}\n", or_dash(&document.report_date)));
    out.push_str(&format!("Period:      {}\n\n", or_dash(&document.period)));

    let records: Vec<&Record> = document.records.iter().collect();
    let widths = column_widths(&records);
    out.push_str(&header_row(&widths));
    for record in &records {
        out.push_str(&data_row(record, &widths));
    }
    out.push_str(&format!("\n{} record(s)", records.len()));
    out
}

pub fn format_report(report: &AggregatedReport) -> String {
    let records: Vec<&Record> = report.data_records().collect();
    let widths = column_widths(&records);

    let mut out = String::new();
    for line in &report.lines {
        match line {
            ReportLine::Period { period } => {
                if !out.is_empty() {
                    out.push('\n');
                }
                out.push_str(&format!("=== {} ===\n\n", or_dash(period)));
                out.push_str(&header_row(&widths));
            }
            ReportLine::Data(record) => out.push_str(&data_row(record, &widths)),
        }
    }
    out.push_str(&format!(
        "\n{} record(s) from {} document(s)",
        records.len(),
        report.document_count
    ));
    out
}

fn fields(record: &Record) -> [&str; 6] {
    [
        record.payment_no.as_str(),
        record.id_number.as_str(),
        record.bank_code.as_str(),
        record.account_number.as_str(),
        record.budget_code.as_str(),
        record.amount.as_str(),
    ]
}

fn column_widths(records: &[&Record]) -> [usize; 6] {
    let mut widths = HEADERS.map(|h| h.chars().count());
    for record in records {
        for (width, value) in widths.iter_mut().zip(fields(record)) {
            *width = (*width).max(value.chars().count());
        }
    }
    widths
}

fn header_row(widths: &[usize; 6]) -> String {
    format_row(HEADERS, widths)
}

fn data_row(record: &Record, widths: &[usize; 6]) -> String {
    format_row(fields(record), widths)
}

// Amounts are right-aligned, everything else left-aligned.
fn format_row(values: [&str; 6], widths: &[usize; 6]) -> String {
    let mut cells: Vec<String> = values
        .iter()
        .zip(widths)
        .map(|(value, &width)| format!("{value:<width$}"))
        .collect();
    cells[5] = format!("{:>width$}", values[5], width = widths[5]);
    format!("  {}\n", cells.join("  "))
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pay_no: &str, amount: &str) -> Record {
        Record {
            payment_no: pay_no.into(),
            id_number: "960101300123".into(),
            bank_code: "HSBKKZKX".into(),
            account_number: "KZ12601A291001300451".into(),
            budget_code: "105102".into(),
            amount: amount.into(),
        }
    }

    #[test]
    fn test_document_table_lists_metadata_and_rows() {
        let document = Document {
            region: "Алматы".into(),
            report_date: String::new(),
            period: "01.01.2023 - 31.01.2023".into(),
            records: vec![record("1", "1.00"), record("22", "1,500.00")],
        };
        let out = format_document(&document);
        assert!(out.contains("Region:      Алматы"));
        assert!(out.contains("Report date: -"));
        assert!(out.contains("KZ12601A291001300451"));
        assert!(out.contains("      1.00"));
        assert!(out.ends_with("2 record(s)"));
    }

    #[test]
    fn test_report_table_groups_by_period() {
        let report = AggregatedReport {
            lines: vec![
                ReportLine::Period {
                    period: "01.01.2023 - 31.01.2023".into(),
                },
                ReportLine::Data(record("1", "1.00")),
                ReportLine::Period {
                    period: "01.02.2023 - 28.02.2023".into(),
                },
                ReportLine::Data(record("2", "2.00")),
            ],
            document_count: 2,
        };
        let out = format_report(&report);
        let jan = out.find("=== 01.01.2023 - 31.01.2023 ===").unwrap();
        let feb = out.find("=== 01.02.2023 - 28.02.2023 ===").unwrap();
        assert!(jan < feb);
        assert!(out.ends_with("2 record(s) from 2 document(s)"));
    }
}
