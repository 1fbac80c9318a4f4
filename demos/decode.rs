use clap::Parser;

use cacbarcode::Barcode;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Barcode strings as reported by a scanner, front or back of the card.
    barcodes: Vec<String>,
}

fn main() {
    let args = Args::parse();

    for data in &args.barcodes {
        let barcode = match Barcode::decode(data) {
            Ok(b) => b,
            Err(error) => {
                eprintln!("Error decoding {:?}: {}", data, error);
                continue;
            }
        };

        println!("{barcode}");
        println!();
    }
}
