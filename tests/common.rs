use std::path::Path;

use cacbarcode::{Code39Barcode, Pdf417Barcode};
use csv::{ReaderBuilder, StringRecord};

#[test]
fn decode_pdf417_fixtures() {
    const PATH: &str = "fixtures/pdf417.csv";
    let rows = Validator::new(PATH);
    assert!(!rows.0.is_empty());

    for row in rows.0 {
        let barcode = Pdf417Barcode::decode(row.get("barcode")).unwrap();

        row.validate("version", barcode.version());
        row.validate("pdi", barcode.pdi());
        row.validate("pdt", barcode.pdt());
        row.validate("pdt_description", barcode.pdt_description());
        row.validate("edipi", barcode.edipi());
        row.validate("first_name", barcode.first_name());
        row.validate("last_name", barcode.last_name());
        row.validate("middle_initial", barcode.middle_initial());
        row.validate("full_name", barcode.full_name());
        row.validate("date_of_birth", barcode.date_of_birth());
        row.validate("pcc", barcode.pcc());
        row.validate("category", barcode.category());
        row.validate("bc", barcode.bc());
        row.validate("branch", barcode.branch());
        row.validate("pect", barcode.pect());
        row.validate("pect_description", barcode.pect_description());
        row.validate("rank", barcode.rank());
        row.validate("pay_plan_code", barcode.pay_plan_code());
        row.validate("pay_plan_grade_code", barcode.pay_plan_grade_code());
        row.validate("issue_date", barcode.issue_date());
        row.validate("expiration_date", barcode.expiration_date());
        row.validate("instance_id", barcode.instance_id());
    }
}

#[test]
fn decode_code39_fixtures() {
    const PATH: &str = "fixtures/code39.csv";
    let rows = Validator::new(PATH);
    assert!(!rows.0.is_empty());

    for row in rows.0 {
        let barcode = Code39Barcode::decode(row.get("barcode")).unwrap();

        row.validate("version", barcode.version());
        row.validate("pdi", barcode.pdi());
        row.validate("pdt", barcode.pdt());
        row.validate("pdt_description", barcode.pdt_description());
        row.validate("edipi", barcode.edipi());
        row.validate("pcc", barcode.pcc());
        row.validate("category", barcode.category());
        row.validate("bc", barcode.bc());
        row.validate("branch", barcode.branch());
        row.validate("instance_id", barcode.instance_id());
    }
}

#[test]
fn decode_any_fixtures() {
    for path in ["fixtures/pdf417.csv", "fixtures/code39.csv"] {
        for row in Validator::new(path).0 {
            let barcode = cacbarcode::Barcode::decode(row.get("barcode")).unwrap();

            row.validate("pdi", barcode.pdi());
            row.validate("edipi", barcode.edipi());
            row.validate("branch", barcode.branch());
            row.validate("instance_id", barcode.instance_id());
        }
    }
}

/// Expected field values, one row per barcode, keyed by the header row.
struct Validator(Vec<Row>);

struct Row(StringRecord, StringRecord);

impl Validator {
    fn new(path: impl AsRef<Path>) -> Self {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .from_path(path)
            .unwrap();

        let headers = reader.headers().unwrap().clone();

        let rows = reader
            .records()
            .map(|r| Row(headers.clone(), r.unwrap()))
            .collect();

        Self(rows)
    }
}

impl Row {
    fn get(&self, column: &str) -> &str {
        let i = self.0.iter().position(|h| h == column).unwrap();
        &self.1[i]
    }

    fn validate(&self, column: &str, value: impl ToString) {
        assert_eq!(self.get(column), value.to_string(), "column {column}");
    }
}
